//! Clock queries for timing experiments.
//!
//! - [`wall_time`]: seconds since the Unix epoch.
//! - [`cpu_time`]: processor seconds consumed by this process (`getrusage`).
//! - [`human_readable_time`]: current local time, `asctime` layout.
//!
//! Differences of two readings of the same clock give elapsed time.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;

/// Wall-clock time in seconds since the Unix epoch.
///
/// Returns 0.0 if the system clock is set before the epoch.
pub fn wall_time() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64())
}

/// Processor time used by the process (user plus system), in seconds.
///
/// Returns 0.0 if the operating system cannot report processor time.
#[cfg(unix)]
pub fn cpu_time() -> f64 {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: `usage` points to writable memory sized for one `rusage`.
    if unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) } != 0 {
        return 0.0;
    }
    // SAFETY: zero-initialized, then filled in by a successful getrusage.
    let usage = unsafe { usage.assume_init() };
    seconds(usage.ru_utime) + seconds(usage.ru_stime)
}

#[cfg(unix)]
fn seconds(tv: libc::timeval) -> f64 {
    tv.tv_sec as f64 + tv.tv_usec as f64 * 1e-6
}

/// Processor time used by the process, in seconds.
///
/// Not available on this platform; always 0.0.
#[cfg(not(unix))]
pub fn cpu_time() -> f64 {
    0.0
}

/// Local date and time as `"Mon Oct 19 15:53:00 2026"`, without a newline.
pub fn human_readable_time() -> String {
    Local::now().format("%a %b %e %H:%M:%S %Y").to_string()
}
