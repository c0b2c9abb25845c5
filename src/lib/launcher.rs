//! Launch pipeline
//!
//! parse → merge → locate → privilege → supervise, always in this order so
//! argument problems are reported before a missing JVM, and both before the
//! privilege check. Nothing is executed until every check passed.

use crate::args_parser::{parse_args, ParsedArgs};
use crate::config::{log_verbose, Config, JAVA_BINARY};
use crate::error::LaunchError;
use crate::locator::find_executable;
use crate::plan::{LaunchEnvironment, LaunchPlan};
use crate::privilege::ensure_root;
use crate::settings::LaunchSettings;
use crate::supervisor::{run_session, SessionReport};

/// What the launcher did
#[derive(Debug)]
pub enum Outcome {
    /// `--help` was requested, nothing was resolved or run
    Help,
    /// Dry run: the plan was built but not executed
    Planned(LaunchPlan),
    /// The kiosk session ran
    Ran(SessionReport),
}

/// Build the launch plan from raw arguments without running anything
pub fn prepare(config: &Config, parsed: &ParsedArgs) -> Result<LaunchPlan, LaunchError> {
    let settings = LaunchSettings::merge(parsed, &config.javafx_lib());
    let args = settings.jvm_args(&parsed.passthrough);

    let java = find_executable(JAVA_BINARY, config.search_path.as_deref())
        .ok_or_else(|| LaunchError::ExecutableNotFound(JAVA_BINARY.to_string()))?;
    log_verbose(config, &format!("Using {}", java.display()));

    Ok(LaunchPlan {
        java,
        args,
        environment: LaunchEnvironment::inherit(),
    })
}

/// Run the whole launcher for `args` as the user `euid`
pub fn launch(config: &Config, args: &[String], euid: u32) -> Result<Outcome, LaunchError> {
    let parsed = parse_args(args).map_err(LaunchError::InvalidArguments)?;
    if parsed.help {
        return Ok(Outcome::Help);
    }

    let plan = prepare(config, &parsed)?;
    if config.dry_run.is_some() {
        return Ok(Outcome::Planned(plan));
    }

    ensure_root(euid)?;

    Ok(Outcome::Ran(run_session(config, &plan)))
}
