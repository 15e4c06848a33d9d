//! Isolated project directory plus helpers to run the Strata CLI in it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use strata::application::{CheckOptions, CheckUseCase, Report};
use strata::config::RuleSet;
use strata::infrastructure::{GlobMatcher, LocalFs, SourceWalker};

/// Result of running a Strata CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON, one value per non-empty line.
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {line:?}: {e}"))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn mkdir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.project_path(relative)).unwrap();
        self
    }

    /// Run the library check over the whole project with `rules`.
    pub fn check(&self, rules: &RuleSet) -> Report {
        let fs = LocalFs::new();
        let matcher = GlobMatcher::new();
        let use_case = CheckUseCase::new(rules, SourceWalker::default(), &fs, &matcher);
        use_case.execute(&CheckOptions {
            paths: vec![self.root().to_path_buf()],
            base: self.root().to_path_buf(),
        })
    }

    /// Run `strata` with `args` from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_strata"));
        cmd.current_dir(self.root())
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("STRATA_LOG")
            .env_remove("STRATA_SRC")
            .env_remove("STRATA_PRESET");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run strata");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
