use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Environment variable selecting the log level (`error`, `warn`, `info`, `debug` or `trace`).
pub const LOG_LEVEL_ENV: &str = "MAZERUN_LOG";
/// File the logs are appended to, in the working directory.
pub const LOG_FILE: &str = "mazerun.log";

/// Parse a log level name, falling back to `INFO` when absent or unknown.
fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Install the global subscriber writing to [`LOG_FILE`].
///
/// The terminal is in raw mode on the alternate screen while the game runs, so nothing is logged
/// to stdout. Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init_tracing() -> WorkerGuard {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" WARN ")), Level::WARN);
        assert_eq!(parse_level(Some("loud")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }
}
