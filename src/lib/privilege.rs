//! Privilege check for the launcher
//!
//! Switching runlevels requires root, so the launcher refuses to start the
//! sequence for anybody else.

use crate::error::LaunchError;

/// Name reported in privilege errors
pub const PROGRAM_NAME: &str = "java-kiosk";

/// Effective user id of the current process
#[cfg(unix)]
pub fn effective_uid() -> u32 {
    unsafe { libc::geteuid() }
}

#[cfg(not(unix))]
pub fn effective_uid() -> u32 {
    // No notion of root here, never elevated
    u32::MAX
}

/// Fail unless `euid` is the superuser
pub fn ensure_root(euid: u32) -> Result<(), LaunchError> {
    if euid == 0 {
        Ok(())
    } else {
        Err(LaunchError::PrivilegeRequired(PROGRAM_NAME.to_string()))
    }
}
