// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use harness_core::errors::{ConfigParseError, PullRequestParseError, TokenizerBuildError};
use harness_metadata::HarnessExitCode;
use owo_colors::{OwoColorize, Stream};
use std::error::Error;
use thiserror::Error;

pub(crate) type Result<T, E = ExpectedError> = std::result::Result<T, E>;

/// An error expected during normal operation, mapped to a documented exit
/// code. Unexpected failures (panics) go through color-eyre instead.
#[derive(Debug, Error)]
pub(crate) enum ExpectedError {
    #[error("failed to read `{path}`")]
    InputReadFailed {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error(transparent)]
    ConfigParse(#[from] ConfigParseError),
    #[error(transparent)]
    PullRequestParse(#[from] PullRequestParseError),
    #[error(transparent)]
    TokenizerBuild(#[from] TokenizerBuildError),
    #[error("failed to create output directory `{path}`")]
    OutDirCreateFailed {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to write harness file `{path}`")]
    HarnessFileWriteFailed {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to serialize test result")]
    ResultSerializeFailed {
        #[from]
        err: serde_json::Error,
    },
    #[error("failed to write `{path}`")]
    OutputWriteFailed {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to write to stdout")]
    StdoutWriteFailed {
        #[source]
        err: std::io::Error,
    },
}

impl ExpectedError {
    /// The process exit code for this error, cross-referenced against
    /// [`HarnessExitCode`].
    pub(crate) fn process_exit_code(&self) -> i32 {
        match self {
            Self::InputReadFailed { .. }
            | Self::ConfigParse(_)
            | Self::PullRequestParse(_)
            | Self::TokenizerBuild(_) => HarnessExitCode::SETUP_ERROR,
            Self::OutDirCreateFailed { .. } | Self::HarnessFileWriteFailed { .. } => {
                HarnessExitCode::HARNESS_GENERATION_FAILED
            }
            Self::ResultSerializeFailed { .. }
            | Self::OutputWriteFailed { .. }
            | Self::StdoutWriteFailed { .. } => HarnessExitCode::WRITE_OUTPUT_ERROR,
        }
    }

    /// Displays this error and its source chain to standard error.
    pub(crate) fn display_to_stderr(&self) {
        eprintln!(
            "{}: {}",
            "error".if_supports_color(Stream::Stderr, |text| text.bold()),
            self
        );
        let mut source = self.source();
        while let Some(err) = source {
            eprintln!(
                "{}: {}",
                "  caused by".if_supports_color(Stream::Stderr, |text| text.bold()),
                err
            );
            source = err.source();
        }
    }
}
