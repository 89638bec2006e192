//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test binaries
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
pub struct JotCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl JotCommand {
    /// Creates a new command for the `jot` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--dir` option to specify the data directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points config lookup at an isolated directory.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        if let Some(config_home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", config_home);
        }
        cmd.env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `add` command.
    pub fn add(self, title: &str, description: &str) -> Self {
        self.args(["add", title, description])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `ls` command with JSON output.
    pub fn ls_json(self) -> Self {
        self.args(["ls", "--format", "json"])
    }

    /// Configures for the `show` command.
    pub fn show(self, index: usize) -> Self {
        self.args(["show".to_string(), index.to_string()])
    }

    /// Configures for the `edit` command.
    pub fn edit(self, index: usize) -> Self {
        self.args(["edit".to_string(), index.to_string()])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, index: usize) -> Self {
        self.args(["rm".to_string(), index.to_string()])
    }

    /// Adds `--title`.
    pub fn with_title(self, title: &str) -> Self {
        self.args(["--title", title])
    }

    /// Adds `--description`.
    pub fn with_description(self, description: &str) -> Self {
        self.args(["--description", description])
    }

    /// Adds `--list`.
    pub fn with_list(self) -> Self {
        self.args(["--list"])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}
