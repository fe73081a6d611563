//! Refresh interval parsing
//!
//! Accepts either a duration expression (`"1500ms"`, `"1m30s"`, `"2.5s"`) or a
//! bare number of seconds (`"2"`, `"0.5"`).

use std::time::Duration;

use crate::error::{ConfigError, IntervalSyntaxError, Result};

/// Smallest interval the watcher will accept
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Interval used when `--interval` is not given
pub const DEFAULT_INTERVAL: &str = "2s";

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Parse a user-supplied interval string.
///
/// The duration grammar is tried first, then the whole string as a float
/// number of seconds. Negative values clamp to zero so that the floor check
/// rejects them later.
pub fn parse_interval(input: &str) -> Result<Duration> {
    if let Some(duration) = parse_duration_expr(input) {
        return Ok(duration);
    }

    let malformed = |source: IntervalSyntaxError| ConfigError::MalformedInterval {
        input: input.to_string(),
        source,
    };

    let seconds: f64 = input
        .parse()
        .map_err(|e| malformed(IntervalSyntaxError::Float(e)))?;

    // f64 parsing accepts "inf" and "NaN"
    if !seconds.is_finite() {
        return Err(malformed(IntervalSyntaxError::NotFinite));
    }

    if seconds <= 0.0 {
        return Ok(Duration::ZERO);
    }

    let nanos = (seconds * NANOS_PER_SEC).round();
    if nanos > u64::MAX as f64 {
        return Err(malformed(IntervalSyntaxError::OutOfRange));
    }

    Ok(Duration::from_nanos(nanos as u64))
}

/// Unit suffixes in nanoseconds; the longest matching suffix wins (`ms` over `m`)
const UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Parse `[+-]<decimal><unit>[<decimal><unit>...]`, or a bare `0`.
fn parse_duration_expr(input: &str) -> Option<Duration> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let int_part = &rest[..int_len];
        rest = &rest[int_len..];

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            frac_part = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let (unit, scale) = UNITS
            .iter()
            .filter(|(suffix, _)| rest.starts_with(suffix))
            .max_by_key(|(suffix, _)| suffix.len())?;
        rest = &rest[unit.len()..];

        total = total.checked_add(term_nanos(int_part, frac_part, *scale)?)?;
    }

    if negative {
        return Some(Duration::ZERO);
    }

    u64::try_from(total).ok().map(Duration::from_nanos)
}

/// Nanoseconds contributed by one `<int>.<frac><unit>` term
fn term_nanos(int_part: &str, frac_part: &str, scale: u128) -> Option<u128> {
    let int_value: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let mut nanos = int_value.checked_mul(scale)?;

    // Digits beyond nanosecond precision cannot contribute
    let mut divisor: u128 = 1;
    let mut frac_value: u128 = 0;
    for digit in frac_part.bytes().take(18) {
        frac_value = frac_value * 10 + u128::from(digit - b'0');
        divisor *= 10;
    }
    nanos = nanos.checked_add(frac_value * scale / divisor)?;

    Some(nanos)
}
