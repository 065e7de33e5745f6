//! Format utilities (time)

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use crate::config::TimeEncoder;

/// Timer rendering timestamps per the configured time encoder
pub(crate) struct Timestamp(TimeEncoder);

/// Create a timer for the given time encoder
pub(crate) fn make_timer(encoder: TimeEncoder) -> Timestamp {
    Timestamp(encoder)
}

impl FormatTime for Timestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = OffsetDateTime::now_utc();
        match self.0 {
            TimeEncoder::Iso8601 => {
                let text = now.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
                w.write_str(&text)
            }
            TimeEncoder::Epoch => write!(w, "{}", now.unix_timestamp()),
            TimeEncoder::Millis => write!(w, "{}", now.unix_timestamp_nanos() / 1_000_000),
        }
    }
}
