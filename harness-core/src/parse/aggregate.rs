// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folding classified lines into pass/fail/skip sets.

use crate::parse::LineRecord;
use harness_metadata::TestResult;
use std::collections::BTreeSet;

/// Running pass/fail/skip membership sets for one log scan.
///
/// Records are folded in log order; [`finish`](ResultSets::finish) applies
/// the failure-precedence correction and derives the final counts. The
/// three sets are disjoint in the finished result.
#[derive(Clone, Debug, Default)]
pub struct ResultSets {
    passed: BTreeSet<String>,
    failed: BTreeSet<String>,
    skipped: BTreeSet<String>,
}

impl ResultSets {
    /// Creates empty result sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one classified line into the running sets.
    pub fn record(&mut self, record: LineRecord) {
        match record {
            LineRecord::DenseFile { path, statuses } => {
                for (index, status) in statuses.chars().enumerate() {
                    let test_id = format!("{path}::test_{}", index + 1);
                    match status {
                        '.' => {
                            self.passed.insert(test_id);
                        }
                        's' | 'S' => {
                            self.skipped.insert(test_id);
                        }
                        // `F` positions stay unclassified here; the
                        // failure summary line is authoritative for
                        // failure identity.
                        _ => {}
                    }
                }
            }
            LineRecord::FreeTextFile { path, trailing } => {
                let trailing = trailing.trim();
                if trailing.contains('F') {
                    // A failure summary line for this file is expected
                    // later in the log.
                    return;
                }
                if trailing.contains(['s', 'S']) {
                    self.skipped.insert(path);
                } else if !trailing.is_empty() && trailing.chars().all(|c| c == '.') {
                    self.passed.insert(path);
                }
            }
            LineRecord::FailureSummary { test_id } => {
                // A failure summary wins over a provisional file-level
                // pass: a coarse status line can mark a file all-dots even
                // though one of its sub-tests failed.
                if let Some(file) = test_id.split("::").next() {
                    self.passed.remove(file);
                }
                self.failed.insert(test_id);
            }
        }
    }

    /// Finalizes the sets into a [`TestResult`].
    ///
    /// Applies the precedence correction once more so the disjointness
    /// invariant holds even when a failure summary arrived before the
    /// status line it overrides: any identifier reported failed is removed
    /// from the passed and skipped sets, and its file-level component is
    /// removed from the passed set.
    pub fn finish(mut self) -> TestResult {
        for test_id in &self.failed {
            self.passed.remove(test_id);
            self.skipped.remove(test_id);
            if let Some(file) = test_id.split("::").next() {
                self.passed.remove(file);
            }
        }
        TestResult::new(self.passed, self.failed, self.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;
    use pretty_assertions::assert_eq;

    fn dense(path: &str, statuses: &str) -> LineRecord {
        LineRecord::DenseFile {
            path: path.to_owned(),
            statuses: statuses.to_owned(),
        }
    }

    fn free_text(path: &str, trailing: &str) -> LineRecord {
        LineRecord::FreeTextFile {
            path: path.to_owned(),
            trailing: trailing.to_owned(),
        }
    }

    fn failure(test_id: &str) -> LineRecord {
        LineRecord::FailureSummary {
            test_id: test_id.to_owned(),
        }
    }

    #[test]
    fn dense_positions_are_one_indexed() {
        let mut sets = ResultSets::new();
        sets.record(dense("tests/a.py", ".s."));
        let result = sets.finish();
        assert_eq!(
            result.passed_tests,
            btreeset! {"tests/a.py::test_1".to_owned(), "tests/a.py::test_3".to_owned()}
        );
        assert_eq!(
            result.skipped_tests,
            btreeset! {"tests/a.py::test_2".to_owned()}
        );
    }

    #[test]
    fn dense_failure_positions_stay_unclassified() {
        let mut sets = ResultSets::new();
        sets.record(dense("tests/a.py", "F"));
        let result = sets.finish();
        assert!(result.is_empty());
    }

    #[test]
    fn free_text_all_dots_passes_file() {
        let mut sets = ResultSets::new();
        sets.record(free_text("tests/a.py", "........"));
        let result = sets.finish();
        assert_eq!(result.passed_tests, btreeset! {"tests/a.py".to_owned()});
    }

    #[test]
    fn free_text_with_failure_marker_contributes_nothing() {
        let mut sets = ResultSets::new();
        sets.record(free_text("tests/a.py", "..F."));
        let result = sets.finish();
        assert!(result.is_empty());
    }

    #[test]
    fn free_text_skip_marker_skips_file() {
        let mut sets = ResultSets::new();
        sets.record(free_text("tests/a.py", "..s."));
        let result = sets.finish();
        assert_eq!(result.skipped_tests, btreeset! {"tests/a.py".to_owned()});
    }

    #[test]
    fn free_text_other_text_contributes_nothing() {
        let mut sets = ResultSets::new();
        sets.record(free_text("tests/a.py", "3 errored in 0.2"));
        assert!(sets.finish().is_empty());
    }

    #[test]
    fn failure_summary_removes_provisional_file_pass() {
        let mut sets = ResultSets::new();
        sets.record(free_text("tests/a.py", "...."));
        sets.record(failure("tests/a.py::test_x"));
        let result = sets.finish();
        assert!(result.passed_tests.is_empty());
        assert_eq!(
            result.failed_tests,
            btreeset! {"tests/a.py::test_x".to_owned()}
        );
    }

    #[test]
    fn failure_summary_before_status_line_still_wins() {
        // Arrival order reversed; finish() enforces the invariant.
        let mut sets = ResultSets::new();
        sets.record(failure("tests/a.py::test_x"));
        sets.record(free_text("tests/a.py", "...."));
        let result = sets.finish();
        assert!(result.passed_tests.is_empty());
        assert_eq!(
            result.failed_tests,
            btreeset! {"tests/a.py::test_x".to_owned()}
        );
    }

    #[test]
    fn failed_wins_over_passed_for_same_identifier() {
        let mut sets = ResultSets::new();
        sets.record(failure("tests/a.py"));
        sets.record(free_text("tests/a.py", "...."));
        let result = sets.finish();
        assert!(result.passed_tests.is_empty());
        assert_eq!(result.failed_tests, btreeset! {"tests/a.py".to_owned()});
    }

    #[test]
    fn failed_wins_over_skipped_for_same_identifier() {
        let mut sets = ResultSets::new();
        sets.record(dense("tests/a.py", "s"));
        sets.record(failure("tests/a.py::test_1"));
        let result = sets.finish();
        assert!(result.skipped_tests.is_empty());
        assert_eq!(
            result.failed_tests,
            btreeset! {"tests/a.py::test_1".to_owned()}
        );
    }

    #[test]
    fn duplicate_records_do_not_double_count() {
        let mut sets = ResultSets::new();
        sets.record(dense("tests/a.py", ".."));
        sets.record(dense("tests/a.py", ".."));
        let result = sets.finish();
        assert_eq!(result.passed_count, 2);
    }
}
