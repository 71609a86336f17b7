use crate::core::validator::{Outcome, Outcomes};
use crate::domain::model::{RunSummary, Verdict};
use crate::domain::ports::{ConfigProvider, LineSource, Report};
use crate::utils::error::Result;
use std::io::Write;

pub struct CheckEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CheckEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Check every record from `source`, writing verdict lines to `out`.
    pub fn run<S, W>(&self, source: S, out: &mut W) -> Result<RunSummary>
    where
        S: LineSource,
        W: Write,
    {
        let label = source.describe();
        let report = self.config.report();
        let stop_on_failure = self.config.stop_on_failure();
        let flush_each = self.config.flush_each();

        tracing::info!("Checking GCD results from {}", label);

        let mut summary = RunSummary::default();
        for item in Outcomes::new(source) {
            let (line_no, outcome) = item?;
            summary.lines_read += 1;

            let verdict = match outcome {
                Outcome::Checked(verdict) => verdict,
                Outcome::Skipped(reason) => {
                    tracing::debug!("{}:{}: skipped, {}", label, line_no, reason);
                    summary.skipped += 1;
                    continue;
                }
            };

            summary.record(&verdict);
            write_verdict(out, &report, &verdict)?;
            if flush_each {
                out.flush()?;
            }

            if let Verdict::Fail { a, b, r } = verdict {
                tracing::debug!("{}:{}: gcd({}, {}) != {}", label, line_no, a, b, r);
                if stop_on_failure {
                    // 第一個錯誤就停止，不再讀取後續輸入
                    summary.halted_early = true;
                    break;
                }
            }
        }
        out.flush()?;

        tracing::info!("Finished {}: {}", label, summary);
        Ok(summary)
    }
}

fn write_verdict<W: Write>(out: &mut W, report: &Report, verdict: &Verdict) -> Result<()> {
    match report {
        Report::Every => writeln!(out, "{}", verdict)?,
        Report::FailuresOnly { marker } => {
            if verdict.is_fail() {
                writeln!(out, "{}", marker)?;
            }
        }
    }
    Ok(())
}
