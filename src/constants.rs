//! Constants used throughout the application.
//!
//! Grouped by concern so that storage keys, environment variables and the
//! user-facing copy can be found in one place.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "care";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A weekly CARE journal for your terminal: Compliment, Achievement, Reflection, Emotion";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "care";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

// Configuration Keys & Environment Variables
/// Environment variable for the data directory holding the storage file.
pub const ENV_VAR_CARE_DIR: &str = "CARE_DIR";
/// Environment variable selecting the log format (`text` or `json`).
pub const ENV_VAR_CARE_LOG_FORMAT: &str = "CARE_LOG_FORMAT";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = "Documents/care-journal";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// Key under which the serialized entry list is stored.
pub const STORAGE_KEY_ENTRIES: &str = "careJournalEntries";
/// Name of the key-value file inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";
/// Name of the advisory lock file inside the data directory.
pub const LOCK_FILE_NAME: &str = ".care.lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for the storage file (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Seed data
/// Age in days of the newer example entry written on first run.
pub const SEED_RECENT_DAYS_AGO: i64 = 7;
/// Age in days of the older example entry written on first run.
pub const SEED_OLDER_DAYS_AGO: i64 = 14;

// Archive presentation
/// Maximum characters of each field shown in the archive list.
pub const EXCERPT_MAX_CHARS: usize = 80;
/// Suffix appended to every list excerpt.
pub const EXCERPT_SUFFIX: &str = "...";
/// Long date format used in archive headers. Example: "Monday, January 15, 2024".
pub const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";
/// Date format for the "Week of" line on the home screen. Example: "January 15, 2024".
pub const WEEK_OF_DATE_FORMAT: &str = "%B %-d, %Y";

// Notification copy
/// Title of the confirmation shown after an entry is saved.
pub const SAVED_NOTICE_TITLE: &str = "Journal entry saved!";
/// Description of the confirmation shown after an entry is saved.
pub const SAVED_NOTICE_DESCRIPTION: &str =
    "Your weekly reflection has been added to your growth archive.";
