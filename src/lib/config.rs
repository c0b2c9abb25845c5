//! Launcher configuration
//!
//! There is no configuration file. Paths that differ between images are read
//! from environment variables once at startup and handed to the pipeline
//! explicitly, so tests can point it at temporary directories.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default location of the Gluon JavaFX SDK
pub const DEFAULT_JAVAFX_PATH: &str = "/opt/javafx-sdk";

/// Default system init binary used to switch runlevels
pub const DEFAULT_INIT_BIN: &str = "/usr/sbin/init";

/// Name of the JVM binary searched for in PATH
pub const JAVA_BINARY: &str = "java";

/// Search path used when PATH is not set
pub const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin";

/// How the launch plan is reported when running dry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryRunFormat {
    Text,
    Json,
}

impl DryRunFormat {
    /// Parse the value of `KIOSK_DRY_RUN`
    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for a single launcher invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the JavaFX SDK (its `lib` directory is prepended everywhere)
    pub javafx_path: PathBuf,
    /// Init binary invoked with the runlevel as its only argument
    pub init_bin: PathBuf,
    /// Search path used to resolve `java`
    pub search_path: Option<OsString>,
    /// Print progress lines to stderr
    pub verbose: bool,
    /// Print the launch plan instead of running it
    pub dry_run: Option<DryRunFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            javafx_path: PathBuf::from(DEFAULT_JAVAFX_PATH),
            init_bin: PathBuf::from(DEFAULT_INIT_BIN),
            search_path: None,
            verbose: false,
            dry_run: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            javafx_path: env::var_os("KIOSK_JAVAFX_PATH")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_JAVAFX_PATH)),
            init_bin: env::var_os("KIOSK_INIT_BIN")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INIT_BIN)),
            search_path: Some(search_path_or_default(env::var_os("PATH"))),
            verbose: env_bool("KIOSK_VERBOSE"),
            dry_run: env::var("KIOSK_DRY_RUN")
                .ok()
                .and_then(|v| DryRunFormat::from_value(&v)),
        }
    }

    /// The SDK `lib` directory as a string, as it appears in JVM options
    pub fn javafx_lib(&self) -> String {
        self.javafx_path.join("lib").to_string_lossy().to_string()
    }
}

/// The given search path, or the system default when it is unset
pub fn search_path_or_default(path: Option<OsString>) -> OsString {
    path.unwrap_or_else(|| OsString::from(DEFAULT_SEARCH_PATH))
}

fn env_bool(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v == "1" || v == "true")
}

pub(crate) fn is_debug() -> bool {
    env_bool("KIOSK_DEBUG")
}

/// Generate timestamp for verbose output
pub fn get_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

/// Print a progress line when running verbose
pub(crate) fn log_verbose(config: &Config, message: &str) {
    if config.verbose {
        eprintln!("[java-kiosk] {} {}", get_timestamp(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.javafx_path, PathBuf::from("/opt/javafx-sdk"));
        assert_eq!(config.init_bin, PathBuf::from("/usr/sbin/init"));
        assert_eq!(config.javafx_lib(), "/opt/javafx-sdk/lib");
    }

    #[test]
    fn test_unset_search_path_falls_back_to_default() {
        assert_eq!(search_path_or_default(None), OsString::from("/bin:/usr/bin"));
        assert_eq!(
            search_path_or_default(Some(OsString::from("/opt/jdk/bin"))),
            OsString::from("/opt/jdk/bin")
        );
        // Set but empty is not unset
        assert_eq!(search_path_or_default(Some(OsString::new())), OsString::new());
    }

    #[test]
    fn test_dry_run_format_values() {
        assert_eq!(DryRunFormat::from_value("1"), Some(DryRunFormat::Text));
        assert_eq!(DryRunFormat::from_value("true"), Some(DryRunFormat::Text));
        assert_eq!(DryRunFormat::from_value("JSON"), Some(DryRunFormat::Json));
        assert_eq!(DryRunFormat::from_value("0"), None);
        assert_eq!(DryRunFormat::from_value(""), None);
    }

    #[test]
    fn test_get_timestamp_format() {
        let ts = get_timestamp();
        // 2024-01-01 12:00:00.000
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[19..20], ".");
    }
}
