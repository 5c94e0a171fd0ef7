// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::PullRequestParseError;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// A pull request under evaluation.
///
/// Carries everything the harness needs to reproduce the change: the
/// repository coordinates, the commit the PR was based on, and the two
/// patches (the fix itself and the tests that exercise it).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    /// The repository owner, e.g. `dssg`.
    pub org: String,

    /// The repository name, e.g. `triage`.
    pub repo: String,

    /// The pull request number.
    pub number: u64,

    /// The commit the pull request is based on.
    pub base: BaseCommit,

    /// The fix patch, in unified diff format.
    pub fix_patch: String,

    /// The test patch, in unified diff format.
    pub test_patch: String,
}

/// The base commit of a pull request.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BaseCommit {
    /// The full commit SHA.
    pub sha: String,
}

impl PullRequest {
    /// Parses pull request data from JSON text. `input_file` names the
    /// source file in error output.
    pub fn from_json(input_file: &Utf8Path, contents: &str) -> Result<Self, PullRequestParseError> {
        serde_json::from_str(contents).map_err(|err| PullRequestParseError::new(input_file, err))
    }

    /// The HTTPS clone URL for the repository.
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.org, self.repo)
    }

    /// The checkout directory inside the container.
    pub fn workdir(&self) -> String {
        format!("/home/{}", self.repo)
    }

    /// The image tag for this pull request.
    pub fn image_tag(&self) -> String {
        format!("pr-{}", self.number)
    }
}
