//! Logging Infrastructure
//!
//! File-backed tracing setup. The client runs on the terminal's alternate
//! screen, so log lines must never reach stdout; without a log directory
//! the subscriber writes to a sink.

use std::path::Path;

use crate::config::Config;

/// Initialize the logger from client configuration
pub fn init(config: &Config) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(
            config
                .log_level
                .parse()
                .unwrap_or(tracing::Level::INFO),
        )
        .with_ansi(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match config.log_dir.as_deref() {
        Some(dir) if Path::new(dir).exists() => {
            let file_appender = tracing_appender::rolling::daily(dir, "pizzeria-tui");
            builder.with_writer(file_appender).init();
        }
        _ => builder.with_writer(std::io::sink).init(),
    }
}
