//! Time helpers.
//!
//! All human-facing timestamps (log lines included) are rendered in JST.

use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// JST is UTC+9
const JST_OFFSET_SECS: i32 = 9 * 3600;

fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Convert a UTC instant to JST
pub fn to_jst(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    utc.with_timezone(&jst())
}

/// Format a UTC instant as RFC 3339 in JST, with millisecond precision
pub fn jst_rfc3339(utc: DateTime<Utc>) -> String {
    to_jst(utc).to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Log timer that stamps every event with the current JST time.
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", jst_rfc3339(Utc::now()))
    }
}
