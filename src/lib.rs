pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{FileSource, MemorySource, ReaderSource, StdinSource};
pub use core::{
    engine::CheckEngine,
    oracle::gcd,
    validator::{validate, Verdicts},
};
pub use domain::model::{Record, RunSummary, Verdict};
pub use utils::error::{CheckError, Result};
