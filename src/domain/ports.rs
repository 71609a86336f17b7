use crate::utils::error::Result;

/// Where raw lines come from. `next_line` returns `Ok(None)` at end of
/// input; it must not read further than the line it returns.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Short label used in logs, e.g. a file path or `<stdin>`.
    fn describe(&self) -> String;
}

/// Output style for verdicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Print `marker` once per failing record, nothing for passes.
    FailuresOnly { marker: String },
    /// Print every verdict as `OK: ...` / `WRONG: ...`.
    Every,
}

pub trait ConfigProvider {
    fn report(&self) -> Report;
    fn stop_on_failure(&self) -> bool;
    /// Flush stdout after every verdict line.
    fn flush_each(&self) -> bool;
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Result<Option<String>> {
        (**self).next_line()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
