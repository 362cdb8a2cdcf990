/// Client configuration
///
/// # Environment variables
///
/// All options can be set through environment variables (a `.env` file is
/// honored):
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | PIZZERIA_HONOR_KEY_REPEAT | false | Whether held-chord auto-repeat keeps toggling the admin panel |
/// | PIZZERIA_LOG_DIR | (unset) | Directory for daily log files; logging is disabled when unset |
/// | PIZZERIA_LOG_LEVEL | info | Log level: trace, debug, info, warn, error |
#[derive(Debug, Clone)]
pub struct Config {
    /// Forwarded to the admin gate's key-repeat policy
    pub honor_key_repeat: bool,
    /// Directory for log files; `None` disables logging
    pub log_dir: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            honor_key_repeat: std::env::var("PIZZERIA_HONOR_KEY_REPEAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("PIZZERIA_LOG_DIR").ok(),
            log_level: std::env::var("PIZZERIA_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            honor_key_repeat: false,
            log_dir: None,
            log_level: "info".into(),
        }
    }
}
