//! Exit handling: exit codes, process hardening, and failure reporting.

use std::fmt::Display;

use crate::cli::prompts;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;

/// Keep the password out of core dumps and away from same-user ptrace.
/// Call this early in main().
#[cfg(target_os = "linux")]
pub fn harden_process() {
    let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    if rc != 0 {
        log::warn!("prctl(PR_SET_DUMPABLE) failed: {}", std::io::Error::last_os_error());
    }
}

#[cfg(not(target_os = "linux"))]
pub fn harden_process() {}

/// Report `err` as a single `Error:` line and exit non-zero.
pub fn failure(err: &dyn Display) -> ! {
    prompts::error(err);
    std::process::exit(FAILURE)
}
