/*!
Parsing and printing of human readable durations like `1h30m500ms`.

This is independent of the date format dialects. The grammar is a flat
sequence of `<value><unit>` pairs in any order, where a value may be
fractional and `_` may be used to group digits. Whitespace can separate the
pairs, but every value must then name its unit: `1 day 2 hours` is fine,
`1 30m` is not.

Totals are tracked in nanoseconds, following the convention that a duration
of `1` is one nanosecond.
*/

use crate::error::{err, Error};

/// Parses a duration expression into a total number of nanoseconds.
///
/// # Errors
///
/// This returns an error when the expression contains a rune that is not a
/// digit, letter or separator, when a unit label is unknown and when a
/// value is given with no unit at all.
///
/// # Example
///
/// ```
/// assert_eq!(datefmt::duration::parse("1h30m").unwrap(), 5.4e12);
/// ```
pub fn parse(expr: &str) -> Result<f64, Error> {
    let mut value = String::new();
    let mut unit = String::new();
    let mut total = 0.0;
    // Set when a space follows a bare value. A unit label clears it; another
    // value or the end of the expression is an error, since we refuse to
    // guess default units.
    let mut needs_unit = false;

    for ch in expr.chars() {
        match ch {
            '0'..='9' | '.' => {
                if !unit.is_empty() {
                    total += commit(&value, &unit)?;
                    value.clear();
                    unit.clear();
                    needs_unit = false;
                } else if needs_unit && !value.is_empty() {
                    return Err(err!(
                        "Units are required for space-separated durations",
                    ));
                }
                value.push(ch);
            }
            'A'..='Z' | 'a'..='z' => {
                unit.push(ch);
                needs_unit = false;
            }
            ' ' => {
                if !value.is_empty() && unit.is_empty() {
                    needs_unit = true;
                }
            }
            '_' => {}
            _ => return Err(err!("Invalid character: {ch:?}")),
        }
    }

    if needs_unit {
        return Err(err!(
            "Units are required for space-separated durations",
        ));
    }
    if !value.is_empty() || !unit.is_empty() {
        total += commit(&value, &unit)?;
    }
    Ok(total)
}

/// Converts a nanosecond total into the given output unit, optionally
/// flooring the result to an integer.
pub fn convert(nanos: f64, unit: &str, floor: bool) -> Result<f64, Error> {
    let scaled = nanos / unit_nanos(unit)? as f64;
    Ok(if floor { scaled.floor() } else { scaled })
}

/// Returns the number of nanoseconds in one of the named unit.
///
/// Unit labels may be abbreviated (`h`), singular (`hour`) or plural
/// (`hours`).
pub fn unit_nanos(unit: &str) -> Result<i64, Error> {
    Ok(match unit {
        "d" | "day" | "days" => 86_400_000_000_000,
        "h" | "hour" | "hours" => 3_600_000_000_000,
        "m" | "minute" | "minutes" => 60_000_000_000,
        "s" | "second" | "seconds" => 1_000_000_000,
        "ms" | "millisecond" | "milliseconds" => 1_000_000,
        "ns" | "nanosecond" | "nanoseconds" => 1,
        _ => return Err(err!("Invalid unit: {unit:?}")),
    })
}

/// Renders a value with `separator` inserted every three digits, counting
/// leftward from the decimal point. Only the integer part is grouped.
pub fn format_with_separator(value: f64, separator: &str) -> String {
    let mut output = value.to_string();
    let point = output.find('.').unwrap_or(output.len());
    for idx in (1..point).rev() {
        if (point - idx) % 3 == 0 {
            output.insert_str(idx, separator);
        }
    }
    output
}

/// Commits one `<value><unit>` pair.
fn commit(value: &str, unit: &str) -> Result<f64, Error> {
    let quantity: f64 = value
        .parse()
        .map_err(|_| err!("Invalid duration value {value:?}"))?;
    Ok(quantity * unit_nanos(unit)? as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        assert_eq!(parse("1h30m500ms").unwrap(), 5_400_500_000_000.0);
        assert_eq!(parse("1.5h").unwrap(), 5_400_000_000_000.0);
        assert_eq!(parse("2d").unwrap(), 172_800_000_000_000.0);
        assert_eq!(parse("1 day 2 hours").unwrap(), 93_600_000_000_000.0);
        // Order of pairs doesn't matter.
        assert_eq!(parse("30m1h").unwrap(), parse("1h30m").unwrap());
    }

    #[test]
    fn digit_separators_are_invisible() {
        assert_eq!(parse("1_000_000ns").unwrap(), 1_000_000.0);
        assert_eq!(parse("1_000_000ns").unwrap(), parse("1000000ns").unwrap());
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse("1h&").unwrap_err().to_string(),
            "Invalid character: '&'",
        );
        assert_eq!(
            parse("5parsecs").unwrap_err().to_string(),
            "Invalid unit: \"parsecs\"",
        );
        assert_eq!(
            parse("100").unwrap_err().to_string(),
            "Invalid unit: \"\"",
        );
        assert_eq!(
            parse("1 30m").unwrap_err().to_string(),
            "Units are required for space-separated durations",
        );
        // A bare value with a trailing space never names a unit either.
        assert_eq!(
            parse("1 ").unwrap_err().to_string(),
            "Units are required for space-separated durations",
        );
        assert_eq!(
            parse("1.2.3s").unwrap_err().to_string(),
            "Invalid duration value \"1.2.3\"",
        );
    }

    #[test]
    fn conversion() {
        let nanos = parse("1h30m500ms").unwrap();
        assert_eq!(convert(nanos, "ms", false).unwrap(), 5_400_500.0);
        let nanos = parse("1.5h").unwrap();
        assert_eq!(convert(nanos, "s", true).unwrap(), 5400.0);
        let nanos = parse("90s").unwrap();
        assert_eq!(convert(nanos, "m", false).unwrap(), 1.5);
        assert_eq!(convert(nanos, "m", true).unwrap(), 1.0);
    }

    #[test]
    fn separators() {
        assert_eq!(format_with_separator(1_000.0, "_"), "1_000");
        assert_eq!(format_with_separator(5_400_500.0, "_"), "5_400_500");
        assert_eq!(format_with_separator(100.0, "_"), "100");
        assert_eq!(format_with_separator(1234.5, ","), "1,234.5");
        assert_eq!(format_with_separator(-1000.0, "_"), "-1_000");
    }
}
