//! SIGINT masking while the kiosk session runs
//!
//! Ctrl+C in the terminal reaches the whole foreground process group, so the
//! JVM still gets it and can shut down. The launcher itself only notes that it
//! happened and keeps going, otherwise the runlevel would never be restored.
//!
//! A no-op handler is installed instead of `SIG_IGN`: ignored signals stay
//! ignored across exec, handled ones are reset to the default in the child.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPT_RECEIVED: AtomicBool = AtomicBool::new(false);

// Signal disposition is process wide, tests that install a guard take this
#[cfg(test)]
pub(crate) static SIGNAL_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Check if SIGINT arrived while a guard was installed
pub fn was_interrupted() -> bool {
    INTERRUPT_RECEIVED.load(Ordering::SeqCst)
}

/// Swallows SIGINT for as long as it is alive
///
/// Dropping the guard puts back whatever handler was installed before.
pub struct InterruptGuard {
    #[cfg(unix)]
    previous: libc::sighandler_t,
}

impl InterruptGuard {
    #[cfg(unix)]
    pub fn install() -> Self {
        INTERRUPT_RECEIVED.store(false, Ordering::SeqCst);
        let previous = unsafe { libc::signal(libc::SIGINT, interrupt_handler as usize) };
        Self { previous }
    }

    #[cfg(not(unix))]
    pub fn install() -> Self {
        // Signal handling not supported on non-Unix platforms
        INTERRUPT_RECEIVED.store(false, Ordering::SeqCst);
        Self {}
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            if self.previous != libc::SIG_ERR {
                unsafe {
                    libc::signal(libc::SIGINT, self.previous);
                }
            }
        }
    }
}

#[cfg(unix)]
extern "C" fn interrupt_handler(_sig: libc::c_int) {
    // Only async-signal-safe work here
    INTERRUPT_RECEIVED.store(true, Ordering::SeqCst);
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_previous_handler() {
        let _lock = SIGNAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let before = unsafe { libc::signal(libc::SIGINT, libc::SIG_DFL) };
        {
            let _guard = InterruptGuard::install();
            let current = unsafe { libc::signal(libc::SIGINT, interrupt_handler as usize) };
            assert_eq!(current, interrupt_handler as usize);
        }
        let after = unsafe { libc::signal(libc::SIGINT, before) };
        assert_eq!(after, libc::SIG_DFL);
    }

    #[test]
    fn test_install_clears_flag() {
        let _lock = SIGNAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        INTERRUPT_RECEIVED.store(true, Ordering::SeqCst);
        let _guard = InterruptGuard::install();
        assert!(!was_interrupted());
    }
}
