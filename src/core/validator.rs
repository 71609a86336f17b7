use crate::core::oracle;
use crate::core::parse::parse_line;
use crate::domain::model::{Record, SkipReason, Verdict};
use crate::domain::ports::LineSource;
use crate::utils::error::Result;

/// Result of looking at a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Checked(Verdict),
    Skipped(SkipReason),
}

pub fn check_record(record: &Record) -> Verdict {
    let Record {
        result: r,
        operand_a: a,
        operand_b: b,
    } = *record;

    if oracle::matches(r, a, b) {
        Verdict::Pass { a, b, r }
    } else {
        Verdict::Fail { a, b, r }
    }
}

pub fn check_line(line: &str) -> Outcome {
    match parse_line(line) {
        Ok(record) => Outcome::Checked(check_record(&record)),
        Err(reason) => Outcome::Skipped(reason),
    }
}

/// Outcomes of a line source, numbered from 1. Pulls one line per item.
pub struct Outcomes<S: LineSource> {
    source: S,
    line_no: usize,
}

impl<S: LineSource> Outcomes<S> {
    pub fn new(source: S) -> Self {
        Self { source, line_no: 0 }
    }
}

impl<S: LineSource> Iterator for Outcomes<S> {
    type Item = Result<(usize, Outcome)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.source.next_line() {
            Ok(Some(line)) => {
                self.line_no += 1;
                Some(Ok((self.line_no, check_line(&line))))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Any iterator of strings as a line source. Never fails.
pub struct IterSource<I> {
    lines: I,
}

impl<I> LineSource for IterSource<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next().map(|line| line.as_ref().to_string()))
    }

    fn describe(&self) -> String {
        "<lines>".to_string()
    }
}

/// Lazily turn lines into verdicts, silently dropping lines that do not
/// hold a well-formed record. One line is pulled per verdict, so stopping
/// early leaves the rest of `lines` untouched.
pub fn validate<I>(lines: I) -> Verdicts<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Verdicts {
        outcomes: Outcomes::new(IterSource {
            lines: lines.into_iter(),
        }),
    }
}

pub struct Verdicts<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    outcomes: Outcomes<IterSource<I>>,
}

impl<I> Iterator for Verdicts<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Verdict;

    fn next(&mut self) -> Option<Verdict> {
        self.outcomes.by_ref().find_map(|item| match item {
            Ok((_, Outcome::Checked(verdict))) => Some(verdict),
            _ => None,
        })
    }
}
