// Region identifiers
//
// The dashboard page provides all three; a write to an absent region is
// skipped with a warning.
pub const COUNTER_REGION: &str = "counter";
pub const LOG_REGION: &str = "log-container";
pub const CLOCK_REGION: &str = "live-clock";

// Counter behavior
pub const DEFAULT_START_COUNT: u64 = 850;
pub const MAX_COUNTER_STEP: u64 = 4;

// Default task periods (milliseconds)
pub const DEFAULT_COUNTER_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_LOG_INTERVAL_MS: u64 = 4000;
pub const DEFAULT_CLOCK_INTERVAL_MS: u64 = 1000;

pub const DEFAULT_CLOCK_LABEL: &str = "System Time: ";

pub const DEFAULT_MESSAGE_POOL: [&str; 6] = [
    "[INFO] Navigating to Target URL...",
    "[INFO] Intercepting XHR/Fetch request...",
    "[SUCCESS] JSON payload captured.",
    "[INFO] Parsing data with Python logic...",
    "[AWS] Pushing records to PostgreSQL...",
    "[INFO] Waiting for next scheduled interval...",
];

// UI Constants
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
