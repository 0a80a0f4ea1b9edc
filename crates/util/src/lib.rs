//! doublekey-util - helpers shared by the doublekey-tree tests and the stress driver.

pub mod fuzzer;

pub use fuzzer::KeyFuzzer;
