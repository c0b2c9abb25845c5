//! Kiosk session supervisor
//!
//! Runs the JVM with the display stack stopped:
//!
//! ```text
//! Graphical --init 3--> Restricted --java--> Running --init 5--> Graphical
//! ```
//!
//! None of the commands is checked for success. The switch back to the
//! graphical runlevel happens exactly once, whatever happened before it.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use scopeguard::ScopeGuard;

use crate::config::{is_debug, log_verbose, Config};
use crate::plan::LaunchPlan;
use crate::signal_handler::{was_interrupted, InterruptGuard};

/// SysV runlevels used by the kiosk session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runlevel {
    /// Multi-user without display manager
    Restricted,
    /// Multi-user with display manager
    Graphical,
}

impl Runlevel {
    pub fn as_arg(&self) -> &'static str {
        match self {
            Runlevel::Restricted => "3",
            Runlevel::Graphical => "5",
        }
    }
}

impl std::fmt::Display for Runlevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_arg())
    }
}

/// Switches runlevels through the init binary
#[derive(Debug, Clone)]
pub struct ModeSwitch {
    init_bin: PathBuf,
}

impl ModeSwitch {
    pub fn new(init_bin: impl Into<PathBuf>) -> Self {
        Self {
            init_bin: init_bin.into(),
        }
    }

    pub fn init_bin(&self) -> &Path {
        &self.init_bin
    }

    /// Run `<init> <runlevel>` and wait for it
    ///
    /// Returns `None` if the init binary could not be started.
    pub fn switch(&self, runlevel: Runlevel) -> Option<ExitStatus> {
        run_and_wait(Command::new(&self.init_bin).arg(runlevel.as_arg()))
    }
}

/// Outcome of a kiosk session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Status of the switch to the restricted runlevel
    pub entered: Option<ExitStatus>,
    /// Status of the JVM
    pub application: Option<ExitStatus>,
    /// Status of the switch back to the graphical runlevel
    pub restored: Option<ExitStatus>,
    /// SIGINT reached the launcher during the session
    pub interrupted: bool,
}

fn run_and_wait(command: &mut Command) -> Option<ExitStatus> {
    match command.status() {
        Ok(status) => Some(status),
        Err(e) => {
            if is_debug() {
                eprintln!("[DEBUG] Failed to run {:?}: {}", command.get_program(), e);
            }
            None
        }
    }
}

fn describe(status: Option<ExitStatus>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "failed to start".to_string(),
    }
}

/// Run the JVM in kiosk mode
pub fn run_session(config: &Config, plan: &LaunchPlan) -> SessionReport {
    log_verbose(config, &format!("Launching {}", plan.java.display()));
    supervise(config, || run_and_wait(&mut plan.command()))
}

/// Run `application` between the switch to runlevel 3 and back to 5
///
/// The switch back also happens if `application` panics.
pub fn supervise<F>(config: &Config, application: F) -> SessionReport
where
    F: FnOnce() -> Option<ExitStatus>,
{
    // Declared first so it is dropped after the restore below
    let interrupts = InterruptGuard::install();
    let mode_switch = ModeSwitch::new(&config.init_bin);

    log_verbose(config, "Switching to runlevel 3");
    let entered = mode_switch.switch(Runlevel::Restricted);
    log_verbose(config, &format!("Runlevel 3: {}", describe(entered)));

    // Restores the graphical runlevel on unwind, defused on the normal path
    let restore = scopeguard::guard(mode_switch, |mode_switch| {
        mode_switch.switch(Runlevel::Graphical);
    });

    let application = application();
    log_verbose(config, &format!("Application exited: {}", describe(application)));

    let mode_switch = ScopeGuard::into_inner(restore);
    log_verbose(config, "Switching to runlevel 5");
    let restored = mode_switch.switch(Runlevel::Graphical);
    log_verbose(config, &format!("Runlevel 5: {}", describe(restored)));

    let interrupted = was_interrupted();
    drop(interrupts);

    SessionReport {
        entered,
        application,
        restored,
        interrupted,
    }
}
