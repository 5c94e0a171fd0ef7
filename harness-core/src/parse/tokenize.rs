// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line classification for raw test-runner output.

use crate::{errors::TokenizerBuildError, parse::LogGrammar};
use itertools::Itertools;
use regex::Regex;

/// Marker prefix of a failure summary line.
const FAILED_MARKER: &str = "FAILED ";

/// One classified line of test-runner output.
///
/// Lines matching none of these shapes are unrecognized and yield no
/// record: logs routinely interleave result lines with warnings, banners
/// and progress output, all of which must be skipped silently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineRecord {
    /// A file-status line in the dense grammar: a test-file path followed
    /// by a contiguous run of one-letter status codes, one per sub-test
    /// in left-to-right order (`.` passed, `F` failed, `s`/`S` skipped).
    ///
    /// Each character position synthesizes the identifier
    /// `path::test_<position>` (1-indexed). Positional identifiers are
    /// only stable while the runner keeps its test order; that is an
    /// accepted limitation of scraping compact console output.
    DenseFile {
        /// The test-file path.
        path: String,
        /// The run of status characters, one per sub-test.
        statuses: String,
    },

    /// A file-status line in the free-text grammar: a test-file path
    /// followed by arbitrary trailing text, classified as a whole-file
    /// outcome by the aggregator.
    FreeTextFile {
        /// The test-file path.
        path: String,
        /// Everything after the path.
        trailing: String,
    },

    /// A failure summary line: `FAILED <identifier>`. Summary lines are
    /// the authoritative source for failure identity; the identifier is
    /// captured verbatim.
    FailureSummary {
        /// The full failing-test identifier.
        test_id: String,
    },
}

/// Classifies lines without mutating shared state.
#[derive(Clone, Debug)]
pub(crate) struct Tokenizer {
    grammar: LogGrammar,
    file_status_re: Regex,
}

impl Tokenizer {
    pub(crate) fn new<S: AsRef<str>>(
        grammar: LogGrammar,
        suffixes: &[S],
    ) -> Result<Self, TokenizerBuildError> {
        if suffixes.is_empty() {
            return Err(TokenizerBuildError::new(
                "at least one test-file suffix is required",
            ));
        }
        let alternatives = suffixes
            .iter()
            .map(|suffix| regex::escape(suffix.as_ref()))
            .join("|");
        let pattern = match grammar {
            LogGrammar::Dense => format!(r"^(\S+(?:{alternatives}))\s+([.FfsS]+)$"),
            LogGrammar::FreeText => format!(r"^(\S+(?:{alternatives}))\s+(.+)$"),
        };
        let file_status_re = Regex::new(&pattern)
            .map_err(|err| TokenizerBuildError::new(err.to_string()))?;
        Ok(Self {
            grammar,
            file_status_re,
        })
    }

    /// Classifies one line, already stripped of its trailing newline.
    ///
    /// Shapes are tried in a fixed priority order: failure summary first,
    /// then file status. Returns `None` for unrecognized lines.
    pub(crate) fn classify(&self, line: &str) -> Option<LineRecord> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(FAILED_MARKER) {
            let test_id = rest.trim();
            if test_id.is_empty() {
                return None;
            }
            return Some(LineRecord::FailureSummary {
                test_id: test_id.to_owned(),
            });
        }

        let captures = self.file_status_re.captures(line)?;
        let path = captures[1].to_owned();
        match self.grammar {
            LogGrammar::Dense => Some(LineRecord::DenseFile {
                path,
                statuses: captures[2].to_owned(),
            }),
            LogGrammar::FreeText => Some(LineRecord::FreeTextFile {
                path,
                trailing: captures[2].to_owned(),
            }),
        }
    }
}
