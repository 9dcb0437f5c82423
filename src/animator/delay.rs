//! Reveal delay parsing
//!
//! Integer-prefix semantics: leading whitespace is skipped, an optional sign
//! is accepted, and parsing stops at the first non-digit. Anything without
//! digits, and anything negative, means no delay.

/// Largest delay a browser timer honours before it overflows to "now".
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

pub fn parse_delay(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else { return 0 };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return 0;
    }

    digits
        .bytes()
        .try_fold(0u64, |acc, b| {
            let next = acc * 10 + u64::from(b - b'0');
            (next <= u64::from(MAX_DELAY_MS)).then_some(next)
        })
        .map_or(MAX_DELAY_MS, |ms| ms as u32)
}
