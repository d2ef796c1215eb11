//! Runtime configuration defaults

/// Directory holding the content and mastery JSON files when none is
/// given on the command line.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Address the HTTP server binds when none is given on the command
/// line.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
