//! Shared test utilities for integration tests
//!
//! Provides isolated home/config directories for running the `ddir` binary and for
//! tests that read configuration from the process environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Isolated filesystem layout for one binary invocation sequence.
///
/// `<temp>/home` is `HOME`, `<temp>/config` is `XDG_CONFIG_HOME`, `<temp>/ddir` is
/// `DDIR_HOME` and `<temp>/work` is the working directory.
pub struct DdirEnv {
    temp_dir: TempDir,
}

impl DdirEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        for dir in ["home", "config", "work"] {
            std::fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        }
        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn ddir_home(&self) -> PathBuf {
        self.root().join("ddir")
    }

    pub fn document_path(&self) -> PathBuf {
        self.ddir_home().join("config.json")
    }

    /// Canonical working directory, as the child process sees it.
    pub fn work_dir(&self) -> PathBuf {
        self.root().join("work").canonicalize().unwrap()
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_ddir"));
        command
            .env_clear()
            .env("HOME", self.root().join("home"))
            .env("XDG_CONFIG_HOME", self.root().join("config"))
            .env("DDIR_HOME", self.ddir_home())
            .current_dir(self.root().join("work"))
            .args(args);
        for (key, value) in envs {
            command.env(key, value);
        }
        command.output().unwrap()
    }
}

/// Trimmed stdout of a finished invocation.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Run `f` with `HOME`, `XDG_CONFIG_HOME` and `DDIR_HOME` pointed into `test_dir`,
/// restoring the previous environment afterwards.
pub fn with_ddir_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let vars = ["HOME", "XDG_CONFIG_HOME", "DDIR_HOME"];
    let saved: Vec<Option<std::ffi::OsString>> =
        vars.iter().map(|var| std::env::var_os(var)).collect();

    let home = test_dir.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", test_dir.path().join("config"));
    std::env::set_var("DDIR_HOME", test_dir.path().join("ddir"));

    let result = f();

    for (var, value) in vars.iter().zip(saved) {
        match value {
            Some(v) => std::env::set_var(var, v),
            None => std::env::remove_var(var),
        }
    }

    result
}
