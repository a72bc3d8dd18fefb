//! Lenient integer parsing for path parameters.
//!
//! Accepts what JavaScript's `parseInt(s)` accepts: leading whitespace, an
//! optional sign, an optional `0x`/`0X` prefix switching to hex, then as many
//! digits as are valid. Anything after the digits is ignored. Returns `None`
//! when no digit could be read or the value does not fit in an `i64`.

pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let value = i64::from_str_radix(digits, radix).ok()?;
    if negative { value.checked_neg() } else { Some(value) }
}
