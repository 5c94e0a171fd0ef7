// Copyright (c) The swe-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::pipeline::{HarnessConfig, PullRequest, RunStage};
use swrite::{SWrite, swriteln};

/// A generated harness file: a name and its full contents.
#[derive(Clone, Debug)]
pub struct HarnessFile {
    /// The file name, relative to the build context root.
    pub name: &'static str,

    /// The full file contents.
    pub contents: String,
}

/// The container build specification for one pull request.
///
/// Rendering is pure string generation; the caller writes the Dockerfile
/// and [`files`](ImageSpec::files) into a build context and drives the
/// container build itself.
#[derive(Clone, Debug)]
pub struct ImageSpec<'a> {
    config: &'a HarnessConfig,
    pr: &'a PullRequest,
}

impl<'a> ImageSpec<'a> {
    /// Creates an image spec for the given configuration and pull request.
    pub fn new(config: &'a HarnessConfig, pr: &'a PullRequest) -> Self {
        Self { config, pr }
    }

    /// The files copied into the image next to the Dockerfile: the two
    /// patches and the three stage scripts.
    pub fn files(&self) -> Vec<HarnessFile> {
        let mut files = vec![
            HarnessFile {
                name: "fix.patch",
                contents: self.pr.fix_patch.clone(),
            },
            HarnessFile {
                name: "test.patch",
                contents: self.pr.test_patch.clone(),
            },
        ];
        for stage in RunStage::ALL {
            files.push(HarnessFile {
                name: stage.script_name(),
                contents: stage.render(self.config, self.pr),
            });
        }
        files
    }

    /// Renders the Dockerfile: base image, dependency installation, a
    /// pinned checkout of the PR's base commit, and COPY lines for every
    /// generated file.
    pub fn dockerfile(&self) -> String {
        let mut out = String::new();
        swriteln!(out, "FROM {}", self.config.base_image);
        swriteln!(out);
        swriteln!(out, "ENV DEBIAN_FRONTEND=noninteractive");
        swriteln!(out, "RUN apt-get update && apt-get install -y git bash");
        for command in &self.config.install_commands {
            swriteln!(out, "RUN {command}");
        }
        swriteln!(out);
        swriteln!(out, "WORKDIR /home/");
        swriteln!(
            out,
            "RUN git clone {} {}",
            self.pr.clone_url(),
            self.pr.workdir()
        );
        swriteln!(out, "WORKDIR {}", self.pr.workdir());
        swriteln!(out, "RUN git reset --hard");
        swriteln!(out, "RUN git checkout {}", self.pr.base.sha);
        swriteln!(out);
        for file in self.files() {
            swriteln!(out, "COPY {} /home/", file.name);
        }
        out
    }
}
