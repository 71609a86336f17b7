pub mod cli;

#[cfg(feature = "cli")]
pub use args::{CliConfig, LogFormat, Mode, SummaryFormat};

#[cfg(feature = "cli")]
mod args {
    use crate::core::ConfigProvider;
    use crate::domain::ports::Report;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Parser, Subcommand, ValueEnum};
    use serde::{Deserialize, Serialize};
    use std::path::PathBuf;

    pub const DEFAULT_RESULTS_FILE: &str = "_results.csv";
    pub const DEFAULT_MARKER: &str = "wrong";

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "gcd-check")]
    #[command(about = "Check simulator GCD results against a reference implementation")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub mode: Mode,

        #[arg(long, global = true, help = "Exit with status 1 if any record fails")]
        pub strict: bool,

        #[arg(long, global = true, value_enum, default_value_t = SummaryFormat::None)]
        pub summary: SummaryFormat,

        #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
        pub log_format: LogFormat,

        #[arg(long, global = true, help = "Enable verbose output")]
        pub verbose: bool,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
    pub enum Mode {
        /// Read a whole results file and print a marker for each failing record
        Batch {
            #[arg(default_value = DEFAULT_RESULTS_FILE)]
            path: PathBuf,

            #[arg(long, default_value = DEFAULT_MARKER)]
            marker: String,

            #[arg(long, help = "Stop after the first failing record")]
            stop_on_failure: bool,
        },
        /// Read records from stdin and print every verdict, stopping at the first failure
        Interactive {
            #[arg(long, help = "Continue past failing records")]
            keep_going: bool,
        },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
    pub enum SummaryFormat {
        None,
        Text,
        Json,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
    pub enum LogFormat {
        Compact,
        Json,
    }

    impl ConfigProvider for CliConfig {
        fn report(&self) -> Report {
            match &self.mode {
                Mode::Batch { marker, .. } => Report::FailuresOnly {
                    marker: marker.clone(),
                },
                Mode::Interactive { .. } => Report::Every,
            }
        }

        fn stop_on_failure(&self) -> bool {
            match &self.mode {
                Mode::Batch {
                    stop_on_failure, ..
                } => *stop_on_failure,
                Mode::Interactive { keep_going } => !keep_going,
            }
        }

        fn flush_each(&self) -> bool {
            matches!(self.mode, Mode::Interactive { .. })
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Mode::Batch { path, marker, .. } = &self.mode {
                validation::validate_path("path", &path.to_string_lossy())?;
                validation::validate_non_empty_string("marker", marker)?;
                validation::validate_single_line("marker", marker)?;
            }
            Ok(())
        }
    }

}
