//! java-kiosk library
//!
//! Launches a JavaFX application full screen on the framebuffer: patches the
//! JVM options for Monocle/EGL, stops the display manager by switching to
//! runlevel 3, runs `java` and switches back to runlevel 5 afterwards.

pub mod args_parser;
pub mod config;
pub mod error;
pub mod launcher;
pub mod locator;
pub mod plan;
pub mod privilege;
pub mod settings;
pub mod signal_handler;
pub mod supervisor;

// Re-export commonly used items
pub use args_parser::{parse_args, split_property, ParsedArgs};
pub use config::{
    search_path_or_default, Config, DryRunFormat, DEFAULT_INIT_BIN, DEFAULT_JAVAFX_PATH,
    DEFAULT_SEARCH_PATH, JAVA_BINARY,
};
pub use error::LaunchError;
pub use launcher::{launch, prepare, Outcome};
pub use locator::{find_executable, is_executable};
pub use plan::{LaunchEnvironment, LaunchPlan, EXTENSIONS_ENV};
pub use privilege::{effective_uid, ensure_root};
pub use settings::{default_properties, LaunchSettings, PropertyMap, REQUIRED_MODULE};
pub use signal_handler::{was_interrupted, InterruptGuard};
pub use supervisor::{run_session, supervise, ModeSwitch, Runlevel, SessionReport};
