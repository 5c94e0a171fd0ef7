// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{ConfigParseError, TokenizerBuildError},
    parse::{DEFAULT_TEST_FILE_SUFFIXES, LogGrammar, LogParser},
};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Configuration for one project's evaluation harness.
///
/// One configuration struct covers everything project-specific: the base
/// image, dependency installation, the test invocation, and the shape of
/// the runner's status lines. Supporting a new project means writing a new
/// configuration, not a new harness implementation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HarnessConfig {
    /// The container base image, e.g. `python:3.10-slim`.
    pub base_image: String,

    /// Commands run while building the image to install project
    /// dependencies, one shell command per entry.
    #[serde(default)]
    pub install_commands: Vec<String>,

    /// The test invocation as an argv list, e.g.
    /// `["python", "-m", "pytest", "-rA", "src/tests/"]`.
    pub test_command: Vec<String>,

    /// The status-line grammar the project's test runner emits.
    #[serde(default)]
    pub log_grammar: LogGrammar,

    /// File suffixes that identify a test file in a status line.
    #[serde(default = "default_test_file_suffixes")]
    pub test_file_suffixes: Vec<String>,
}

fn default_test_file_suffixes() -> Vec<String> {
    DEFAULT_TEST_FILE_SUFFIXES
        .iter()
        .map(|suffix| (*suffix).to_owned())
        .collect()
}

impl HarnessConfig {
    /// Parses a configuration from JSON text. `config_file` names the
    /// source file in error output.
    pub fn from_json(config_file: &Utf8Path, contents: &str) -> Result<Self, ConfigParseError> {
        serde_json::from_str(contents).map_err(|err| ConfigParseError::new(config_file, err))
    }

    /// The test invocation as a single shell command line.
    pub fn test_command_line(&self) -> String {
        shell_words::join(&self.test_command)
    }

    /// Builds the log parser this configuration selects.
    pub fn log_parser(&self) -> Result<LogParser, TokenizerBuildError> {
        LogParser::with_suffixes(self.log_grammar, &self.test_file_suffixes)
    }
}
