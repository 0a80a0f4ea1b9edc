//! Randomized insert / lookup / linearize / verify run over a
//! [`DoubleKeyTree`].
//!
//! Every generated key is inserted and immediately looked up again. Keys the
//! generator repeats are rejected by the tree and counted. At the end the
//! tree is checked, converted into a sorted list, and the list is checked.

use doublekey_tree::{
    DoubleKeyTree, InsertError, InvariantViolation, LinearizeError, ListViolation, Rejected,
};
use doublekey_util::KeyFuzzer;
use log::{debug, info};

pub const USAGE: &str = "\
Usage: rb-stress [-options]

Test driver for the doublekey red-black tree.

Options:
  -h                 show brief help on version and usage
  --nodes N          number of keys to generate (default 1000000)
  --seed S           PRNG seed (default: random)
  --range R          keys are drawn from [0, R) (default 1000)
  --check-every K    check invariants every K inserts (default 0: only at the end)
  --pool             pre-allocate all nodes before inserting
  --verbose          debug logging";

#[derive(Debug, Clone, PartialEq)]
pub struct StressConfig {
    pub nodes: usize,
    pub seed: Option<u64>,
    pub range: f64,
    pub check_every: usize,
    pub pool: bool,
    pub verbose: bool,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            nodes: 1_000_000,
            seed: None,
            range: 1000.0,
            check_every: 0,
            pool: false,
            verbose: false,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(StressConfig),
}

#[derive(Debug, thiserror::Error)]
pub enum StressError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("insert of key {key} failed: {source}")]
    Insert { key: f64, source: InsertError },
    #[error("failed to find key {key} in tree")]
    Missing { key: f64 },
    #[error("lookup returned wrong value {found}, when expected {expected}")]
    WrongPayload { found: f64, expected: f64 },
    #[error("generated tree did not obey red-black invariants: {0}")]
    Invariants(#[from] InvariantViolation),
    #[error("conversion of tree to linked list failed: {0}")]
    Linearize(#[from] LinearizeError),
    #[error("linked list failed consistency check: {0}")]
    List(#[from] ListViolation),
    #[error("node allocation failed: {0}")]
    Alloc(#[from] doublekey_tree::AllocError),
}

fn value<'a, I>(flag: &str, args: &mut I) -> Result<String, StressError>
where
    I: Iterator<Item = &'a String>,
{
    args.next()
        .cloned()
        .ok_or_else(|| StressError::MissingValue(flag.to_string()))
}

fn parse<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, StressError> {
    value.parse().map_err(|_| StressError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

/// Parses flags (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, StressError> {
    let mut config = StressConfig::default();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--nodes" => config.nodes = parse(arg, value(arg, &mut args)?)?,
            "--seed" => config.seed = Some(parse(arg, value(arg, &mut args)?)?),
            "--range" => {
                let v = value(arg, &mut args)?;
                let range: f64 = parse(arg, v.clone())?;
                if !(range.is_finite() && range > 0.0) {
                    return Err(StressError::InvalidValue {
                        flag: arg.clone(),
                        value: v,
                    });
                }
                config.range = range;
            }
            "--check-every" => config.check_every = parse(arg, value(arg, &mut args)?)?,
            "--pool" => config.pool = true,
            "--verbose" => config.verbose = true,
            other => return Err(StressError::UnknownOption(other.to_string())),
        }
    }
    Ok(Command::Run(config))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressReport {
    pub inserted: usize,
    pub duplicates: usize,
    pub listed: usize,
    pub height: usize,
}

/// Runs the full sequence; stops at the first failure.
pub fn run(config: &StressConfig) -> Result<StressReport, StressError> {
    let fuzzer = match config.seed {
        Some(seed) => KeyFuzzer::from_u64(seed),
        None => KeyFuzzer::new(None),
    };
    info!(
        "inserting {} keys from [0, {}) (seed {:02x?})",
        config.nodes, config.range, fuzzer.seed
    );

    let mut tree = if config.pool {
        DoubleKeyTree::with_pool(config.nodes)?
    } else {
        DoubleKeyTree::new()
    };
    let mut duplicates = 0;

    for i in 0..config.nodes {
        let key = fuzzer.random_key(config.range);
        match tree.insert(key, key) {
            Ok(_) => {}
            Err(Rejected {
                error: InsertError::DuplicateKey { .. },
                ..
            }) => {
                debug!("skipping repeated key {key}");
                duplicates += 1;
            }
            Err(rejected) => {
                return Err(StressError::Insert {
                    key,
                    source: rejected.error,
                })
            }
        }

        match tree.lookup(key) {
            None => return Err(StressError::Missing { key }),
            Some(&found) if found != key => {
                return Err(StressError::WrongPayload {
                    found,
                    expected: key,
                })
            }
            Some(_) => {}
        }

        if config.check_every > 0 && (i + 1) % config.check_every == 0 {
            tree.check_invariants()?;
            debug!("{} keys in, invariants hold", i + 1);
        }
    }

    let inserted = tree.len();
    let height = tree.height();
    if inserted > 0 {
        tree.check_invariants()?;
    }
    info!("{inserted} keys inserted ({duplicates} repeats skipped), height {height}");

    let listed = if inserted > 0 {
        let list = tree.into_sorted_list()?;
        list.check()?
    } else {
        0
    };
    info!("sorted list verified ({listed} nodes)");

    Ok(StressReport {
        inserted,
        duplicates,
        listed,
        height,
    })
}
