//! java-kiosk CLI
//!
//! Runs a JavaFX application in kiosk mode:
//! - Patches --module-path, --add-modules and -D options for Monocle/EGL
//! - Stops X11 by switching to runlevel 3 while the JVM runs
//! - Switches back to runlevel 5 afterwards, even on Ctrl+C

use std::env;
use std::process;

use java_kiosk::{effective_uid, launch, Config, DryRunFormat, LaunchPlan, Outcome};

const USAGE: &str = "usage: java-kiosk [-h] [--add-modules ADD_MODULES] [-p MODULE_PATH] [-D PROPERTIES]";

fn main() {
    let config = Config::from_env();
    let args: Vec<String> = env::args().skip(1).collect();

    match launch(&config, &args, effective_uid()) {
        Ok(Outcome::Help) => print_help(),
        Ok(Outcome::Planned(plan)) => print_plan(&plan, config.dry_run.unwrap_or(DryRunFormat::Text)),
        Ok(Outcome::Ran(report)) => {
            if config.verbose && report.interrupted {
                eprintln!("[java-kiosk] Interrupted, runlevel restored");
            }
        }
        Err(e) => {
            eprintln!("{}", USAGE);
            eprintln!("java-kiosk: error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn print_plan(plan: &LaunchPlan, format: DryRunFormat) {
    match format {
        DryRunFormat::Text => println!("{}", plan.to_command_line()),
        DryRunFormat::Json => match serde_json::to_string_pretty(&plan.to_json()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
    }
}

fn print_help() {
    println!(
        r#"{}

Gluon JavaFX Kiosk Launcher

options:
  -h, --help            show this help message and exit
  --add-modules ADD_MODULES
  -p MODULE_PATH, --module-path MODULE_PATH
  -D PROPERTIES

All other arguments are passed to java unchanged.

Environment:
  KIOSK_JAVAFX_PATH     JavaFX SDK directory (default: /opt/javafx-sdk)
  KIOSK_INIT_BIN        init binary used to switch runlevels (default: /usr/sbin/init)
  KIOSK_DRY_RUN         print the java command instead of running it (1, text, json)
  KIOSK_VERBOSE         print progress to stderr
  KIOSK_DEBUG           print debug information"#,
        USAGE
    );
}
