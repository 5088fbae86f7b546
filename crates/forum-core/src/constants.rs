//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Default forum API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Seconds between background refreshes while the forum is open
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Environment variable overriding the API base URL for the whole process
pub const API_BASE_ENV: &str = "FORUM_API_BASE";

/// Environment variable enabling file logging
pub const LOG_FILE_ENV: &str = "FORUM_LOG_FILE";

// Author classification
/// Username the backend bot posts under
pub const SYSTEM_USERNAME: &str = "CosmicWatchBot";
/// Username stored when the original sender could not be resolved
pub const UNKNOWN_USERNAME: &str = "unknown";
/// Label shown in place of system usernames
pub const SYSTEM_DISPLAY_NAME: &str = "SYSTEM";

/// Status string the backend returns when a thread was created
pub const THREAD_CREATED_STATUS: &str = "thread created";

// API paths
pub mod paths {
    pub const THREADS: &str = "threads";
    pub const THREAD_MESSAGES: [&str; 2] = ["debug", "thread-messages"];
    pub const CREATE_THREAD: [&str; 2] = ["debug", "create-thread"];
    pub const DELETE_THREAD: &str = "thread";
}
