// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by harness-core.

use crate::parse::LogGrammar;
use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurred while parsing a harness configuration file.
#[derive(Debug, Error)]
#[error("failed to parse harness config at `{config_file}`")]
#[non_exhaustive]
pub struct ConfigParseError {
    config_file: Utf8PathBuf,
    #[source]
    err: serde_json::Error,
}

impl ConfigParseError {
    pub(crate) fn new(config_file: impl Into<Utf8PathBuf>, err: serde_json::Error) -> Self {
        Self {
            config_file: config_file.into(),
            err,
        }
    }

    /// Returns the path to the configuration file that failed to parse.
    pub fn config_file(&self) -> &Utf8PathBuf {
        &self.config_file
    }
}

/// An error that occurred while parsing pull request data.
#[derive(Debug, Error)]
#[error("failed to parse pull request data at `{input_file}`")]
#[non_exhaustive]
pub struct PullRequestParseError {
    input_file: Utf8PathBuf,
    #[source]
    err: serde_json::Error,
}

impl PullRequestParseError {
    pub(crate) fn new(input_file: impl Into<Utf8PathBuf>, err: serde_json::Error) -> Self {
        Self {
            input_file: input_file.into(),
            err,
        }
    }
}

/// Error returned while parsing a [`LogGrammar`] value from a string.
#[derive(Clone, Debug, Error)]
#[error(
    "unrecognized value for log grammar: {input}\n(known values: {})",
    LogGrammar::variants().join(", ")
)]
pub struct LogGrammarParseError {
    input: String,
}

impl LogGrammarParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// An error that occurred while building a log tokenizer from a harness
/// configuration.
///
/// Test-file suffixes come from user configuration; an empty suffix list
/// would make the file-status pattern match nothing meaningful.
#[derive(Clone, Debug, Error)]
#[error("invalid test-file suffix configuration: {reason}")]
pub struct TokenizerBuildError {
    reason: String,
}

impl TokenizerBuildError {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
