// A simple module to define the time types used in the project
//
// Policy evaluation is deterministic: `request_tokens` and the
// eligibility queries take their timestamp as an argument and never
// read the system clock themselves. The helpers below exist for
// callers (CLIs, services) that feed wall-clock time into the engine.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Seconds timestamps used to determine it using its type
pub type TimestampSeconds = u64;

#[inline]
pub fn get_current_time() -> Duration {
    let start = SystemTime::now();

    start
        .duration_since(UNIX_EPOCH)
        .expect("Incorrect time returned from get_current_time")
}

// Return timestamp in seconds
// SAFETY: Non-deterministic - uses system time
// Only use to supply `now` from an interactive caller, never inside
// the policy engine itself
pub fn get_current_time_in_seconds() -> TimestampSeconds {
    get_current_time().as_secs()
}
