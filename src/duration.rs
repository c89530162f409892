//! MM:SS duration codec
//!
//! All operator-facing times (quarter length, rest periods, pregame
//! countdown, manual clock edits) travel as `MM:SS` strings: one or more
//! minute digits, a mandatory colon, and exactly two second digits in
//! `00..=59`. Formatting zero-pads minutes to at least two digits, so the
//! canonical form of any valid input round-trips.

use crate::error::ScoreboardError;

/// Parse an `MM:SS` string into total seconds.
///
/// Rejects missing colons, empty or non-numeric components, seconds with a
/// digit count other than two, and seconds outside `00..=59`. Minutes are
/// unbounded (within `u32` totals).
pub fn parse_mmss(mmss: &str) -> Result<u32, ScoreboardError> {
    let trimmed = mmss.trim();
    let invalid = || ScoreboardError::InvalidDurationFormat {
        input: mmss.to_string(),
    };

    let (minutes, seconds) = trimmed.split_once(':').ok_or_else(invalid)?;

    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Exactly two second digits; "5:7" is not a valid scoreboard time.
    if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let m: u32 = minutes.parse().map_err(|_| invalid())?;
    let s: u32 = seconds.parse().map_err(|_| invalid())?;
    if s > 59 {
        return Err(invalid());
    }

    m.checked_mul(60)
        .and_then(|total| total.checked_add(s))
        .ok_or_else(invalid)
}

/// Format total seconds as `MM:SS`.
///
/// Minutes are zero-padded to at least two digits and grow as needed;
/// seconds are always exactly two digits. Totals are unsigned, so a negative
/// time is unrepresentable.
pub fn format_mmss(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
