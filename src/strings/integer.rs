//! Integer parsing that falls back to a default
//!
//! Accepted input is optional leading whitespace, an optional `+` or `-`
//! sign and one or more ASCII digits, with nothing after the digits.
//! Anything else yields the caller's default. Values outside the target
//! range saturate rather than falling back.

/// Integer types that [`parse_int_or_default_as`] can saturate into
pub trait Bounded: Copy {
    const MIN: Self;
    const MAX: Self;
}

macro_rules! impl_bounded {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Parses `text` as a decimal `i64`, returning `default` if it is not one.
///
/// Leading whitespace is skipped, trailing whitespace is not. Overflow
/// saturates to `i64::MAX` or `i64::MIN`.
///
/// # Examples
///
/// ```
/// use strkit::parse_int_or_default;
///
/// assert_eq!(parse_int_or_default("  -7", 0), -7);
/// assert_eq!(parse_int_or_default("7x", 0), 0);
/// assert_eq!(parse_int_or_default("99999999999999999999", 0), i64::MAX);
/// ```
pub fn parse_int_or_default(text: &str, default: i64) -> i64 {
    parse_saturating(text).unwrap_or(default)
}

/// Same as [`parse_int_or_default`] but for narrower integer types.
///
/// The text is parsed as an `i64` first, then clamped into `T`, so `u64`
/// and `usize` top out at `i64::MAX`.
pub fn parse_int_or_default_as<T>(text: &str, default: T) -> T
where
    T: Bounded + TryFrom<i64>,
{
    match parse_saturating(text) {
        Some(value) => T::try_from(value).unwrap_or(if value < 0 { T::MIN } else { T::MAX }),
        None => default,
    }
}

// Matches C isspace(), which includes vertical tab.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn parse_saturating(text: &str) -> Option<i64> {
    let bytes = text.as_bytes();
    let mut pos = bytes.iter().take_while(|b| is_space(**b)).count();

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let digits = &bytes[pos..];
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    // Accumulate towards the sign so that i64::MIN is reachable.
    let mut value: i64 = 0;
    for &b in digits {
        let digit = i64::from(b - b'0');
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        match next {
            Some(v) => value = v,
            None => return Some(if negative { i64::MIN } else { i64::MAX }),
        }
    }

    Some(value)
}
