use std::fmt::{self, Display};

use chrono::{Duration, TimeZone, Utc};

pub trait DurationFormat {
    fn into_formatter(self) -> DurationFormatter;
}

impl DurationFormat for Duration {
    fn into_formatter(self) -> DurationFormatter {
        DurationFormatter(self)
    }
}

pub struct DurationFormatter(Duration);

impl Display for DurationFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed = self.0;
        write!(
            f,
            "{}+{:02}:{:02}.{:03}",
            elapsed.num_hours(),
            elapsed.num_minutes() % 60,
            elapsed.num_seconds() % 60,
            elapsed.num_milliseconds() % 1000,
        )
    }
}

/// Renders a chapter upload time given in epoch milliseconds.
pub struct UploadDate(pub i64);

impl Display for UploadDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("unknown");
        }

        match Utc.timestamp_millis_opt(self.0).single() {
            Some(date) => write!(f, "{}", date.format("%Y-%m-%d %H:%M")),
            None => f.write_str("unknown"),
        }
    }
}
