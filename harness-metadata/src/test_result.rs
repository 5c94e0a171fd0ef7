// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// The outcome of one test-suite run, recovered from its console log.
///
/// A test is identified by a string key: a file path, a `path::name` pair,
/// or a synthesized `path::test_N` identifier when the log only carried a
/// positional status character for it. Identifiers are unique within one
/// log; the three membership sets are mutually disjoint, and each count
/// always equals the size of its set.
///
/// An all-zero result means "no parseable results", which callers must
/// distinguish from "all tests passed" by checking [`total_count`]
/// (`total_count` of zero is not a successful run).
///
/// [`total_count`]: TestResult::total_count
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TestResult {
    /// The number of tests that passed.
    pub passed_count: usize,

    /// The number of tests that failed.
    pub failed_count: usize,

    /// The number of tests that were skipped.
    pub skipped_count: usize,

    /// Identifiers of the tests that passed.
    pub passed_tests: BTreeSet<String>,

    /// Identifiers of the tests that failed.
    pub failed_tests: BTreeSet<String>,

    /// Identifiers of the tests that were skipped.
    pub skipped_tests: BTreeSet<String>,
}

impl TestResult {
    /// Creates a new `TestResult` from the three membership sets, deriving
    /// the counts from the set sizes.
    pub fn new(
        passed_tests: BTreeSet<String>,
        failed_tests: BTreeSet<String>,
        skipped_tests: BTreeSet<String>,
    ) -> Self {
        Self {
            passed_count: passed_tests.len(),
            failed_count: failed_tests.len(),
            skipped_count: skipped_tests.len(),
            passed_tests,
            failed_tests,
            skipped_tests,
        }
    }

    /// Creates an empty `TestResult` with all-zero counts.
    pub fn empty() -> Self {
        Self::new(BTreeSet::new(), BTreeSet::new(), BTreeSet::new())
    }

    /// Returns the total number of tests across all three sets.
    pub fn total_count(&self) -> usize {
        self.passed_count + self.failed_count + self.skipped_count
    }

    /// Returns true if no results were recovered from the log.
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }
}

// Counts are re-derived from the sets on deserialization, so a TestResult
// read back from JSON upholds the count == set size invariant even if the
// serialized counts were tampered with.
impl<'de> Deserialize<'de> for TestResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            passed_tests: BTreeSet<String>,
            failed_tests: BTreeSet<String>,
            skipped_tests: BTreeSet<String>,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(TestResult::new(
            wire.passed_tests,
            wire.failed_tests,
            wire.skipped_tests,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;

    #[test]
    fn counts_derived_from_sets() {
        let result = TestResult::new(
            btreeset! {"tests/a.py::test_1".to_owned(), "tests/a.py::test_2".to_owned()},
            btreeset! {"tests/a.py::test_3".to_owned()},
            btreeset! {},
        );
        assert_eq!(result.passed_count, 2);
        assert_eq!(result.failed_count, 1);
        assert_eq!(result.skipped_count, 0);
        assert_eq!(result.total_count(), 3);
        assert!(!result.is_empty());
    }

    #[test]
    fn empty_result_is_empty() {
        let result = TestResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.total_count(), 0);
    }

    #[test]
    fn json_round_trip() {
        let result = TestResult::new(
            btreeset! {"tests/a.py".to_owned()},
            btreeset! {"tests/b.py::test_x".to_owned()},
            btreeset! {"tests/c.py".to_owned()},
        );
        let json = serde_json::to_string(&result).expect("serialization succeeded");
        let back: TestResult = serde_json::from_str(&json).expect("deserialization succeeded");
        assert_eq!(result, back);
    }

    #[test]
    fn deserialize_rederives_counts() {
        // Counts in the JSON disagree with the sets; the sets win.
        let json = r#"{
            "passed_count": 99,
            "failed_count": 99,
            "skipped_count": 99,
            "passed_tests": ["tests/a.py::test_1"],
            "failed_tests": [],
            "skipped_tests": ["tests/a.py::test_2"]
        }"#;
        let result: TestResult = serde_json::from_str(json).expect("deserialization succeeded");
        assert_eq!(result.passed_count, 1);
        assert_eq!(result.failed_count, 0);
        assert_eq!(result.skipped_count, 1);
    }
}
