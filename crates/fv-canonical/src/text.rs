//! String normalization: identifier lowercasing and timestamp rebasing.
//!
//! Three shapes of string carry identity and are rewritten to one spelling:
//! UUIDs and 64-hex digests are lowercased, ISO-8601 timestamps are rebased
//! to UTC with a `Z` suffix. Every other string passes through unchanged.

use chrono::{DateTime, Timelike, Utc};

use crate::error::{CanonError, CanonResult};

/// Apply the string normalization rules, first matching shape wins.
pub fn normalize_string(s: &str) -> CanonResult<String> {
    if is_uuid_shaped(s) {
        return Ok(s.to_ascii_lowercase());
    }
    if is_timestamp_shaped(s) {
        return normalize_timestamp(s);
    }
    if is_hex64_shaped(s) {
        return Ok(s.to_ascii_lowercase());
    }
    Ok(s.to_string())
}

/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` with hex digits of either case.
pub fn is_uuid_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => *b == b'-',
        _ => b.is_ascii_hexdigit(),
    })
}

/// Exactly 64 hex digits of either case.
pub fn is_hex64_shaped(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// `YYYY-MM-DDThh:mm:ss`, optional `.fraction`, then `Z` or `±hh:mm`.
///
/// This is a shape check only; calendar validity is decided during
/// [`normalize_timestamp`].
pub fn is_timestamp_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() < 20 {
        return false;
    }
    let date_time_ok = digits(&b[0..4])
        && b[4] == b'-'
        && digits(&b[5..7])
        && b[7] == b'-'
        && digits(&b[8..10])
        && b[10] == b'T'
        && digits(&b[11..13])
        && b[13] == b':'
        && digits(&b[14..16])
        && b[16] == b':'
        && digits(&b[17..19]);
    if !date_time_ok {
        return false;
    }

    let mut i = 19;
    if b[i] == b'.' {
        i += 1;
        let fraction_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == fraction_start {
            return false;
        }
    }

    match b.get(i) {
        Some(b'Z') => i + 1 == b.len(),
        Some(b'+') | Some(b'-') => {
            b.len() == i + 6 && digits(&b[i + 1..i + 3]) && b[i + 3] == b':' && digits(&b[i + 4..i + 6])
        }
        _ => false,
    }
}

fn digits(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Rebase a timestamp-shaped string to UTC.
///
/// Output is `%Y-%m-%dT%H:%M:%SZ`, with a 3-digit millisecond component
/// inserted only when non-zero. Fractional digits beyond the millisecond are
/// truncated. Text that matches the shape but names an impossible instant
/// (month 13, hour 24, a leap second) is rejected.
pub fn normalize_timestamp(s: &str) -> CanonResult<String> {
    let parsed = DateTime::parse_from_rfc3339(s)
        .map_err(|_| CanonError::InvalidTimestamp(s.to_string()))?;
    // chrono folds a :60 leap second into the nanosecond field
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(CanonError::InvalidTimestamp(s.to_string()));
    }

    let utc = parsed.with_timezone(&Utc);
    let millis = utc.nanosecond() / 1_000_000;
    if millis == 0 {
        Ok(utc.format("%Y-%m-%dT%H:%M:%SZ").to_string())
    } else {
        Ok(format!("{}.{millis:03}Z", utc.format("%Y-%m-%dT%H:%M:%S")))
    }
}
