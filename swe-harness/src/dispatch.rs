// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI parsing and command dispatch.

use crate::{
    errors::{ExpectedError, Result},
    output::OutputOpts,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use harness_core::{
    parse::{LogGrammar, LogParser},
    pipeline::{HarnessConfig, PullRequest, generate_harness},
};
use harness_metadata::HarnessExitCode;
use std::io::Write;

/// An evaluation-harness generator for pull-request benchmarks.
#[derive(Debug, Parser)]
#[command(version, styles = crate::output::clap_styles::style())]
pub(crate) struct SweHarnessApp {
    #[clap(flatten)]
    output: OutputOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a raw test-runner log into structured results
    Parse {
        /// Path to the captured log file
        log_file: Utf8PathBuf,

        /// Status-line grammar the runner emits (overrides the config)
        #[arg(long, value_name = "GRAMMAR")]
        grammar: Option<LogGrammar>,

        /// Harness configuration file (JSON)
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Option<Utf8PathBuf>,

        /// Write the result JSON here instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<Utf8PathBuf>,
    },

    /// Generate the container build spec and run scripts for a pull request
    Generate {
        /// Harness configuration file (JSON)
        #[arg(long, short = 'c', value_name = "FILE")]
        config: Utf8PathBuf,

        /// Pull request data file (JSON)
        #[arg(long, value_name = "FILE")]
        pr: Utf8PathBuf,

        /// Directory to write the harness files into
        #[arg(long, value_name = "DIR")]
        out_dir: Utf8PathBuf,
    },
}

impl SweHarnessApp {
    /// Executes the selected command, returning the process exit code.
    pub(crate) fn exec(self) -> Result<i32> {
        self.output.init();
        match self.command {
            Command::Parse {
                log_file,
                grammar,
                config,
                output,
            } => {
                let parser = match &config {
                    Some(path) => {
                        let contents = read_input(path)?;
                        let mut config = HarnessConfig::from_json(path, &contents)?;
                        if let Some(grammar) = grammar {
                            config.log_grammar = grammar;
                        }
                        config.log_parser()?
                    }
                    None => LogParser::new(grammar.unwrap_or_default()),
                };
                let log = read_input(&log_file)?;
                let result = parser.parse(&log);
                let json = serde_json::to_string_pretty(&result)?;
                match &output {
                    Some(path) => {
                        std::fs::write(path, json).map_err(|err| {
                            ExpectedError::OutputWriteFailed {
                                path: path.clone(),
                                err,
                            }
                        })?;
                    }
                    None => {
                        let mut stdout = std::io::stdout().lock();
                        writeln!(stdout, "{json}")
                            .map_err(|err| ExpectedError::StdoutWriteFailed { err })?;
                    }
                }
                Ok(HarnessExitCode::OK)
            }
            Command::Generate {
                config,
                pr,
                out_dir,
            } => {
                let config_contents = read_input(&config)?;
                let config = HarnessConfig::from_json(&config, &config_contents)?;
                let pr_contents = read_input(&pr)?;
                let pr = PullRequest::from_json(&pr, &pr_contents)?;

                std::fs::create_dir_all(&out_dir).map_err(|err| {
                    ExpectedError::OutDirCreateFailed {
                        path: out_dir.clone(),
                        err,
                    }
                })?;
                for file in generate_harness(&config, &pr) {
                    let path = out_dir.join(file.name);
                    std::fs::write(&path, file.contents).map_err(|err| {
                        ExpectedError::HarnessFileWriteFailed { path: path.clone(), err }
                    })?;
                    tracing::info!("wrote {path}");
                }
                Ok(HarnessExitCode::OK)
            }
        }
    }
}

fn read_input(path: &Utf8Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| ExpectedError::InputReadFailed {
        path: path.to_owned(),
        err,
    })
}
