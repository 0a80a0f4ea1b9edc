//! `rb-stress` — randomized insert/lookup/linearize/verify run.
//!
//! Usage:
//!   rb-stress [-h] [--nodes N] [--seed S] [--range R] [--check-every K] [--pool] [--verbose]

use doublekey_stress::{parse_args, run, Command, USAGE};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Ok(Command::Run(config)) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logger setup failed: {e}");
    }

    match run(&config) {
        Ok(report) => {
            println!(
                "ok: {} keys, {} repeats, height {}, list of {}",
                report.inserted, report.duplicates, report.height, report.listed
            );
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
