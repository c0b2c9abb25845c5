//! Launch plan: what will be executed and with which environment

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use serde::Serialize;

/// Environment flag enabling the Gluon commercial extensions in the JVM
pub const EXTENSIONS_ENV: &str = "ENABLE_GLUON_COMMERCIAL_EXTENSIONS";

/// Environment handed to the JVM
///
/// A copy of the inherited variables plus overrides. The launcher's own
/// environment is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchEnvironment {
    #[serde(skip)]
    vars: BTreeMap<OsString, OsString>,
    overrides: BTreeMap<String, String>,
}

impl LaunchEnvironment {
    /// Copy of the current process environment with the extensions flag set
    pub fn inherit() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    pub fn from_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let mut env = Self {
            vars: vars.into_iter().collect(),
            overrides: BTreeMap::new(),
        };
        env.set(EXTENSIONS_ENV, "true");
        env
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.into(), value.into());
        self.overrides.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&OsString> {
        self.vars.get(&OsString::from(key))
    }

    /// Variables that differ from the inherited environment
    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides
    }

    /// Replace the command's environment with this one
    pub fn apply(&self, command: &mut Command) {
        command.env_clear().envs(&self.vars);
    }
}

/// Everything needed to start the JVM
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPlan {
    pub java: PathBuf,
    pub args: Vec<String>,
    pub environment: LaunchEnvironment,
}

impl LaunchPlan {
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.java);
        command.args(&self.args);
        self.environment.apply(&mut command);
        command
    }

    /// Shell-style rendering, e.g. `FLAG=true /usr/bin/java --module-path ...`
    pub fn to_command_line(&self) -> String {
        let mut parts: Vec<String> = self
            .environment
            .overrides()
            .iter()
            .map(|(key, value)| format!("{}={}", key, shell_quote(value)))
            .collect();
        parts.push(shell_quote(&self.java.to_string_lossy()));
        parts.extend(self.args.iter().map(|arg| shell_quote(arg)));
        parts.join(" ")
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Quote a word for display in a POSIX shell command line
pub fn shell_quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@%+".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}
