//! `HH:MM:SS:CC` timecodes
//!
//! Used for the start-time prompt and for paragraph stamps in exports.

use crate::error::{EditorError, Result};
use crate::models::Nanos;

const NANOS_PER_CENTISECOND: u64 = 10_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Format as `HH:MM:SS`, or `HH:MM:SS:CC` with centiseconds
pub fn format_timecode(nanos: Nanos, with_centiseconds: bool) -> String {
    let hours = nanos / NANOS_PER_HOUR;
    let minutes = nanos % NANOS_PER_HOUR / NANOS_PER_MINUTE;
    let seconds = nanos % NANOS_PER_MINUTE / NANOS_PER_SECOND;

    if with_centiseconds {
        let centiseconds = nanos % NANOS_PER_SECOND / NANOS_PER_CENTISECOND;
        format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, centiseconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Parse `HH:MM:SS:CC` into nanoseconds
///
/// Exactly four colon-separated non-negative integers are accepted.
pub fn parse_timecode(input: &str) -> Result<Nanos> {
    let invalid = || EditorError::InvalidTimecode(input.to_string());

    let fields = input
        .trim()
        .split(':')
        .map(|field| field.trim().parse::<u64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;

    let [hours, minutes, seconds, centiseconds] = fields[..] else {
        return Err(invalid());
    };

    hours
        .checked_mul(NANOS_PER_HOUR)
        .and_then(|n| n.checked_add(minutes.checked_mul(NANOS_PER_MINUTE)?))
        .and_then(|n| n.checked_add(seconds.checked_mul(NANOS_PER_SECOND)?))
        .and_then(|n| n.checked_add(centiseconds.checked_mul(NANOS_PER_CENTISECOND)?))
        .ok_or_else(invalid)
}
