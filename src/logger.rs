//! Application-level logging configuration.

use chrono::{DateTime, Local};
use log::{LevelFilter, SetLoggerError};

/// The application-level logger.
struct UiLogger;

impl log::Log for UiLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] {}: {}",
                format_timestamp(Local::now()),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// The global logging instance.
static LOGGER: UiLogger = UiLogger;

/// Formats an instant as the `HH:MM:SS` log timestamp.
fn format_timestamp(instant: DateTime<Local>) -> String {
    instant.format("%H:%M:%S").to_string()
}

/// Builds the body of a grouped debug entry, indenting the payload under
/// the message when one is given.
fn debug_entry(message: &str, data: Option<&serde_json::Value>) -> String {
    match data {
        Some(data) => format!("{message}\n    {data}"),
        None => message.to_owned(),
    }
}

/// Writes a grouped, timestamped debug entry for a component, with an
/// optional data payload.
pub fn log_debug(component: &str, message: &str, data: Option<&serde_json::Value>) {
    log::debug!(target: component, "{}", debug_entry(message, data));
}

/// Initializes logging.
///
/// # Errors
///
/// This will return an error if the logger has already been initialized.
pub fn init_logger(debug: bool) -> Result<(), SetLoggerError> {
    let max_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

/// Logging tests.
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let morning = Local.with_ymd_and_hms(2026, 8, 6, 7, 5, 9).unwrap();
        assert_eq!(format_timestamp(morning), "07:05:09");

        let evening = Local.with_ymd_and_hms(2026, 8, 6, 23, 59, 58).unwrap();
        assert_eq!(format_timestamp(evening), "23:59:58");
    }

    #[test]
    fn test_debug_entry_without_data() {
        assert_eq!(debug_entry("scan finished", None), "scan finished");
    }

    #[test]
    fn test_debug_entry_with_data() {
        let data = serde_json::json!({ "videos": 3 });
        assert_eq!(
            debug_entry("scan finished", Some(&data)),
            "scan finished\n    {\"videos\":3}"
        );
    }
}
