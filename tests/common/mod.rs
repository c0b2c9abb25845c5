//! Fake `init` and `java` binaries for session tests

#![allow(dead_code)]

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use java_kiosk::Config;
use tempfile::TempDir;

/// A sandbox with a recording init binary and an optional java binary
pub struct Sandbox {
    pub dir: TempDir,
    pub log: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("calls.log");
        fs::create_dir(dir.path().join("bin")).unwrap();
        let sandbox = Self { dir, log };
        sandbox.write_script(
            "init",
            &format!("echo \"init $1\" >> '{}'", sandbox.log.display()),
        );
        sandbox
    }

    /// Install a fake java running `body` after recording its arguments
    pub fn with_java(self, body: &str) -> Self {
        let script = format!(
            "echo \"java $*\" >> '{log}'\necho \"env $ENABLE_GLUON_COMMERCIAL_EXTENSIONS\" >> '{log}'\n{body}",
            log = self.log.display(),
            body = body
        );
        self.write_script("bin/java", &script);
        self
    }

    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    pub fn config(&self) -> Config {
        Config {
            javafx_path: PathBuf::from("/opt/javafx-sdk"),
            init_bin: self.dir.path().join("init"),
            search_path: Some(OsString::from(self.bin_dir())),
            verbose: false,
            dry_run: None,
        }
    }

    /// Recorded calls, one per line
    pub fn calls(&self) -> Vec<String> {
        read_lines(&self.log)
    }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(String::from)
        .collect()
}

pub fn to_args(strs: &[&str]) -> Vec<String> {
    strs.iter().map(|s| s.to_string()).collect()
}
