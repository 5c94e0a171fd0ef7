// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the log parser over synthetic logs.

use harness_core::parse::{LogGrammar, parse_log};
use proptest::prelude::*;

/// One synthetic log line: a recognizable result line or interleaved noise.
#[derive(Clone, Debug)]
enum LogLine {
    Dense { file: String, statuses: String },
    Failed { file: String, test: String },
    Noise(String),
}

impl LogLine {
    fn render(&self) -> String {
        match self {
            LogLine::Dense { file, statuses } => format!("tests/{file}.py {statuses}"),
            LogLine::Failed { file, test } => format!("FAILED tests/{file}.py::{test}"),
            LogLine::Noise(text) => text.clone(),
        }
    }
}

fn log_line_strategy() -> impl Strategy<Value = LogLine> {
    prop_oneof![
        ("[a-z]{1,8}", "[.FsS]{1,12}")
            .prop_map(|(file, statuses)| LogLine::Dense { file, statuses }),
        ("[a-z]{1,8}", "test_[a-z]{1,8}").prop_map(|(file, test)| LogLine::Failed { file, test }),
        "[A-Za-z =:%-]{0,40}".prop_map(LogLine::Noise),
    ]
}

fn log_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(log_line_strategy(), 0..40).prop_map(|lines| {
        let mut log = String::new();
        for line in &lines {
            log.push_str(&line.render());
            log.push('\n');
        }
        log
    })
}

proptest! {
    #[test]
    fn sets_are_disjoint(log in log_strategy()) {
        let result = parse_log(&log, LogGrammar::Dense);
        prop_assert!(result.passed_tests.is_disjoint(&result.failed_tests));
        prop_assert!(result.passed_tests.is_disjoint(&result.skipped_tests));
        prop_assert!(result.failed_tests.is_disjoint(&result.skipped_tests));
    }

    #[test]
    fn counts_match_set_sizes(log in log_strategy()) {
        for grammar in [LogGrammar::Dense, LogGrammar::FreeText] {
            let result = parse_log(&log, grammar);
            prop_assert_eq!(result.passed_count, result.passed_tests.len());
            prop_assert_eq!(result.failed_count, result.failed_tests.len());
            prop_assert_eq!(result.skipped_count, result.skipped_tests.len());
        }
    }

    #[test]
    fn parsing_is_idempotent(log in log_strategy()) {
        for grammar in [LogGrammar::Dense, LogGrammar::FreeText] {
            prop_assert_eq!(parse_log(&log, grammar), parse_log(&log, grammar));
        }
    }

    #[test]
    fn line_order_of_noise_never_matters(log in log_strategy(), noise in "[a-z =:%-]{0,30}") {
        // Injecting unrecognized noise anywhere leaves the result unchanged.
        let with_noise = format!("{noise}\n{log}{noise}\n");
        prop_assert_eq!(
            parse_log(&log, LogGrammar::Dense),
            parse_log(&with_noise, LogGrammar::Dense)
        );
    }
}
