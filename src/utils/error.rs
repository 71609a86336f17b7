use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read results from {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad invocation; nothing was read.
    Config,
    /// Input or output could not be used.
    Io,
}

impl CheckError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CheckError::InvalidConfigValueError { .. } => ErrorSeverity::Config,
            CheckError::IoError(_)
            | CheckError::SourceUnavailable { .. }
            | CheckError::SerializationError(_) => ErrorSeverity::Io,
        }
    }

    /// Exit status for the process. 1 is reserved for verdict failures.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Config => 2,
            ErrorSeverity::Io => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::SourceUnavailable { .. } => {
                "Run the simulator first so the results file exists, or pass its path explicitly"
            }
            CheckError::InvalidConfigValueError { .. } => "Check the command line arguments",
            CheckError::IoError(_) => "Check that stdin and stdout are still connected",
            CheckError::SerializationError(_) => "Retry without --summary json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::SourceUnavailable { path, source } => {
                format!("results file {} is not readable: {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }

    /// A write to a closed pipe; the reader went away, not a real failure.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CheckError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
