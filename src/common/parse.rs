// src/common/parse.rs

/// Prefix of a range report, trailing space included. Case-sensitive.
pub const RANGE_PREFIX: &str = "Range ";

/// Extracts the distance from a telemetry line.
///
/// Surrounding whitespace (including a trailing `\r`) is ignored. Returns
/// `None` for anything that is not a range report; the sensor interleaves
/// other text (`ON`, `OFF`, diagnostics) which callers simply skip.
///
/// The number itself is read leniently with [`parse_int_prefix`], so
/// `"Range 120cm"` yields 120 and `"Range x"` yields 0.
pub fn parse_range_line(line: &str) -> Option<i32> {
    line.trim()
        .strip_prefix(RANGE_PREFIX)
        .map(parse_int_prefix)
}

/// Best-effort base-10 integer scan.
///
/// Skips leading whitespace, accepts one optional sign, then consumes digits
/// up to the first non-digit. No digits gives 0. Values beyond `i32` saturate.
pub fn parse_int_prefix(text: &str) -> i32 {
    let bytes = text.trim_start().as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i64 = 0;
    for &b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
