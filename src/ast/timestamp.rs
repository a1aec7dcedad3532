//! "SS:mmm" timestamp parsing.
//!
//! Flight log samples carry their time offset as a string with two
//! colon-separated integer fields: whole seconds and milliseconds
//! (e.g. `"12:345"`, `"00:050"`).

/// Parse a `"SS:mmm"` timestamp into a total millisecond count.
///
/// Both fields must be plain base-10 integers; the result is
/// `seconds * 1000 + milliseconds`. Returns `None` when the shape does
/// not match (missing colon, extra fields, empty or non-numeric parts).
pub fn parse_timestamp_ms(raw: &str) -> Option<u64> {
    let (secs, millis) = raw.split_once(':')?;

    if millis.contains(':') {
        return None;
    }

    let secs: u64 = secs.parse().ok()?;
    let millis: u64 = millis.parse().ok()?;

    secs.checked_mul(1000)?.checked_add(millis)
}
