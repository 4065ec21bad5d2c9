//! Lenient text conversions and printf-style number rendering.
//!
//! Parsing follows C `atoi` / `atof`: leading whitespace is skipped, the
//! longest numeric prefix is used and anything unparsable yields zero.
//! Floats render like `%g` (six significant digits, trailing zeros stripped,
//! exponent form outside `1e-4 ..< 1e6`).

use core::fmt::{self, Write};

/// Outcome of a lenient parse.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lenient<T> {
    /// Parsed value (zero when nothing numeric was found)
    pub value: T,

    /// True when the whole input (ignoring surrounding whitespace) was used
    pub exact: bool,
}

/// Byte length of the integer prefix `[+-]?[0-9]+` at the start of `s`.
fn integer_prefix_len(s: &[u8]) -> usize {
    let mut i = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let digits = s[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 { 0 } else { i + digits }
}

/// Byte length of the float prefix `[+-]?(d+(.d*)?|.d+)([eE][+-]?d+)?`.
fn float_prefix_len(s: &[u8]) -> usize {
    let mut i = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    let int_digits = s[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    i += int_digits;

    let mut frac_digits = 0;
    if s.get(i) == Some(&b'.') {
        frac_digits = s[i + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(s.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(s.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = s[j.min(s.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

/// C `atoi`-style parse into `i64`, saturating on overflow.
pub fn parse_int(text: &str) -> Lenient<i64> {
    let trimmed = text.trim_start();
    let len = integer_prefix_len(trimmed.as_bytes());
    let digits = &trimmed[..len];

    let (negative, body) = match digits.as_bytes().first() {
        Some(b'-') => (true, &digits[1..]),
        Some(b'+') => (false, &digits[1..]),
        _ => (false, digits),
    };

    let mut value: i64 = 0;
    for b in body.bytes() {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }

    Lenient {
        value,
        exact: len > 0 && trimmed[len..].trim().is_empty(),
    }
}

/// C `atof`-style parse into `f64`.
///
/// Also accepts `inf`, `infinity` and `nan` (any case) like `strtod`.
pub fn parse_float(text: &str) -> Lenient<f64> {
    let trimmed = text.trim_start();

    if let Some(special) = parse_special(trimmed) {
        return special;
    }

    let len = float_prefix_len(trimmed.as_bytes());
    let value = trimmed[..len].parse::<f64>().unwrap_or(0.0);
    Lenient {
        value,
        exact: len > 0 && trimmed[len..].trim().is_empty(),
    }
}

fn parse_special(s: &str) -> Option<Lenient<f64>> {
    let (sign, body) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let starts_with = |word: &str| {
        body.len() >= word.len() && body.as_bytes()[..word.len()].eq_ignore_ascii_case(word.as_bytes())
    };

    let (value, used) = if starts_with("infinity") {
        (f64::INFINITY, "infinity".len())
    } else if starts_with("inf") {
        (f64::INFINITY, "inf".len())
    } else if starts_with("nan") {
        (f64::NAN, "nan".len())
    } else {
        return None;
    };

    Some(Lenient {
        value: sign * value,
        exact: body[used..].trim().is_empty(),
    })
}

/// Significant digits used by `%g`.
const G_PRECISION: i32 = 6;

/// Write `value` the way C's `printf("%g")` does.
pub fn write_general(out: &mut dyn Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        return out.write_str(if value.is_sign_negative() { "-nan" } else { "nan" });
    }
    if value.is_infinite() {
        return out.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return out.write_str(if value.is_sign_negative() { "-0" } else { "0" });
    }

    // Exponent after rounding to the target precision
    let mut sci: heapless::String<40> = heapless::String::new();
    write!(sci, "{:.*e}", (G_PRECISION - 1) as usize, value)?;
    let (mantissa, exponent) = sci.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if exponent < -4 || exponent >= G_PRECISION {
        out.write_str(strip_fraction_zeros(mantissa))?;
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(out, "e{}{:02}", sign, exponent.unsigned_abs())
    } else {
        let decimals = (G_PRECISION - 1 - exponent) as usize;
        let mut fixed: heapless::String<40> = heapless::String::new();
        write!(fixed, "{:.*}", decimals, value)?;
        out.write_str(strip_fraction_zeros(&fixed))
    }
}

/// Drop trailing zeros of a fractional part, and the dot if nothing remains.
fn strip_fraction_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
