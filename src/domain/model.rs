use serde::{Deserialize, Serialize};
use std::fmt;

/// One simulator observation: the reported result and the two operands it
/// was computed from, in the order the simulator prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub result: i64,
    pub operand_a: i64,
    pub operand_b: i64,
}

impl Record {
    pub fn new(result: i64, operand_a: i64, operand_b: i64) -> Self {
        Self {
            result,
            operand_a,
            operand_b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass { a: i64, b: i64, r: i64 },
    Fail { a: i64, b: i64, r: i64 },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass { .. })
    }

    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }
}

/// Human readable form used by interactive mode.
impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass { a, b, r } => write!(f, "OK: gcd({}, {}) = {}", a, b, r),
            Verdict::Fail { a, b, r } => write!(f, "WRONG: gcd({}, {}) != {}", a, b, r),
        }
    }
}

/// Why a line produced no verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A token was not a base-10 integer.
    Malformed { token: String },
    /// Wrong number of integer tokens; two means an omitted zero operand.
    Arity { found: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Malformed { token } => write!(f, "non-integer token {:?}", token),
            SkipReason::Arity { found: 2 } => write!(f, "2 fields (zero operand omitted)"),
            SkipReason::Arity { found } => write!(f, "{} fields, expected 3", found),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub lines_read: u64,
    pub checked: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    /// True when the run stopped on a failure before the input ran out.
    pub halted_early: bool,
}

impl RunSummary {
    pub fn record(&mut self, verdict: &Verdict) {
        self.checked += 1;
        if verdict.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lines: {}, checked: {}, passed: {}, failed: {}, skipped: {}{}",
            self.lines_read,
            self.checked,
            self.passed,
            self.failed,
            self.skipped,
            if self.halted_early { " (halted on first failure)" } else { "" }
        )
    }
}
