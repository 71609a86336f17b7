pub mod engine;
pub mod oracle;
pub mod parse;
pub mod validator;

pub use crate::domain::model::{Record, RunSummary, SkipReason, Verdict};
pub use crate::domain::ports::{ConfigProvider, LineSource, Report};
pub use crate::utils::error::Result;
