// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-log parsing and result classification.
//!
//! The raw log of a test run is scanned once, top to bottom. Each line is
//! classified by the tokenizer ([`LineRecord`]) and immediately folded
//! into the running [`ResultSets`]; at the end of the scan the sets are
//! finalized into a [`TestResult`].
//!
//! Parsing is best-effort by design: console output is not machine
//! readable, and logs interleave result lines with warnings and progress
//! noise. Unrecognized lines are skipped silently, and a malformed line
//! can at worst cause an undercount, never an error.

mod aggregate;
mod tokenize;

pub use aggregate::ResultSets;
pub use tokenize::LineRecord;

use crate::errors::{LogGrammarParseError, TokenizerBuildError};
use harness_metadata::TestResult;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tokenize::Tokenizer;

/// Test-file suffixes recognized when no configuration overrides them.
pub const DEFAULT_TEST_FILE_SUFFIXES: &[&str] = &[".py"];

/// The status-line grammar a test runner's compact output uses.
///
/// Runners differ in how much per-test granularity their progress lines
/// carry. The grammar is selected per project in the harness
/// configuration; both variants share the same tokenizer and aggregator.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogGrammar {
    /// A file path followed by a contiguous run of one-letter status
    /// codes, one per sub-test.
    #[default]
    Dense,

    /// A file path followed by free-form trailing text, classified as a
    /// whole-file outcome.
    FreeText,
}

impl LogGrammar {
    /// Returns the string representations of all known variants.
    pub fn variants() -> [&'static str; 2] {
        ["dense", "free-text"]
    }
}

impl fmt::Display for LogGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogGrammar::Dense => write!(f, "dense"),
            LogGrammar::FreeText => write!(f, "free-text"),
        }
    }
}

impl FromStr for LogGrammar {
    type Err = LogGrammarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dense" => Ok(LogGrammar::Dense),
            "free-text" => Ok(LogGrammar::FreeText),
            other => Err(LogGrammarParseError::new(other)),
        }
    }
}

/// A configured test-log parser.
///
/// One parse call consumes one complete in-memory log and returns a
/// [`TestResult`]. No state is carried across calls: parsing the same log
/// twice yields identical results, and independent logs can be parsed in
/// parallel without coordination.
#[derive(Clone, Debug)]
pub struct LogParser {
    tokenizer: Tokenizer,
}

impl LogParser {
    /// Creates a parser for the given grammar with the default test-file
    /// suffixes.
    pub fn new(grammar: LogGrammar) -> Self {
        let tokenizer = Tokenizer::new(grammar, DEFAULT_TEST_FILE_SUFFIXES)
            .expect("default test-file suffixes are valid");
        Self { tokenizer }
    }

    /// Creates a parser for the given grammar with a custom set of
    /// test-file suffixes (e.g. `[".py", ".pyx"]`).
    pub fn with_suffixes<S: AsRef<str>>(
        grammar: LogGrammar,
        suffixes: &[S],
    ) -> Result<Self, TokenizerBuildError> {
        let tokenizer = Tokenizer::new(grammar, suffixes)?;
        Ok(Self { tokenizer })
    }

    /// Parses one complete log, scanning it top to bottom.
    pub fn parse(&self, log: &str) -> TestResult {
        let mut sets = ResultSets::new();
        for line in log.lines() {
            if let Some(record) = self.tokenizer.classify(line) {
                sets.record(record);
            }
        }
        let result = sets.finish();
        tracing::debug!(
            passed = result.passed_count,
            failed = result.failed_count,
            skipped = result.skipped_count,
            "parsed test log"
        );
        result
    }
}

/// Parses a raw test-runner log with the given grammar and the default
/// test-file suffixes.
pub fn parse_log(log: &str, grammar: LogGrammar) -> TestResult {
    LogParser::new(grammar).parse(log)
}
