/*!
The Go reference-time dialect.

Go layouts spell each component as it would render for the reference time
`Mon Jan 2 15:04:05 MST 2006`. There is no prefix and no escape machinery;
the reference table itself drives longest-match recognition, and anything
that isn't a reference component is literal text.

Both directions are supported for the common components, which is what
backs the default `parse` behavior (Go's `2006-01-02 15:04:05.999999999
-0700 MST` rendering) as well as the `rfc` and `iso` layouts.
*/

use jiff::{civil::Weekday, tz::Offset, Zoned};

use crate::{
    dateutil,
    error::{err, Error, ErrorContext},
    fmt::{
        hour12, month_abbrev, month_name, offset_colon, offset_hhmm,
        token::{
            describe, expand_aliases, Meridiem, Pieces, TokenEntry,
            TokenGraph, TokenMap,
        },
        weekday_abbrev, weekday_name,
    },
    locale::Locale,
};

/// The layout Go renders a `time.Time` with by default, used when parsing
/// with an empty dialect name.
pub(crate) const DEFAULT_LAYOUT: &str =
    "2006-01-02 15:04:05.999999999 -0700 MST";

/// The RFC 3339 layout.
pub(crate) const RFC3339_LAYOUT: &str = "2006-01-02T15:04:05.999999999Z07:00";

/// The ISO 8601 layout used by the `iso` dialect, with millisecond
/// precision.
pub(crate) const ISO8601_LAYOUT: &str = "2006-01-02T15:04:05.999Z07:00";

/// The Go reference dialect.
///
/// Unlike the bare engine, recognition here is an anchored scan: at each
/// pattern position the longest reference component is taken, and on a
/// miss exactly one rune is treated as literal before rescanning. This is
/// what makes `2006-01-02` split as `2006`, `-`, `01`, `-`, `02` rather
/// than letting the `-0700` component swallow the hyphen and a digit.
#[derive(Debug)]
pub(crate) struct GoDialect {
    tokens: TokenMap,
    graph: TokenGraph,
}

impl GoDialect {
    /// Assembles the dialect, building its reference table eagerly.
    ///
    /// # Panics
    ///
    /// A duplicate component in the reference table aborts startup.
    pub(crate) fn new() -> GoDialect {
        let tokens = tokens();
        let graph = match TokenGraph::new(expand_aliases(&tokens)) {
            Ok(graph) => graph,
            Err(err) => panic!("loading 'go' dictionary: {err}"),
        };
        debug!(
            "built reference table for dialect 'go' ({} components)",
            tokens.len(),
        );
        GoDialect { tokens, graph }
    }

    /// Formats `zdt` according to the Go layout `pattern`.
    pub(crate) fn format(
        &self,
        zdt: &Zoned,
        locale: Locale,
        pattern: &str,
    ) -> Result<String, Error> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut at = 0;
        while at < chars.len() {
            match self.longest_match(&chars, at) {
                Some((entry, end)) => {
                    out.push_str(&(entry.expand)(zdt, locale)?);
                    at = end;
                }
                None => {
                    out.push(chars[at]);
                    at += 1;
                }
            }
        }
        Ok(out)
    }

    /// Parses `input` against the Go layout `pattern`.
    ///
    /// Reference components consume input through their parse actions;
    /// layout runes outside any component must match the input exactly,
    /// as Go's `time.Parse` requires.
    pub(crate) fn parse(
        &self,
        pattern: &str,
        input: &str,
    ) -> Result<Zoned, Error> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut pieces = Pieces::new();
        let mut inp = input;
        let mut at = 0;
        while at < chars.len() {
            match self.longest_match(&chars, at) {
                Some((entry, end)) => {
                    let spelling: String = chars[at..end].iter().collect();
                    let Some(parse) = entry.parse else {
                        return Err(err!(
                            "parsing is not yet supported for layout \
                             component {spelling:?}",
                        ));
                    };
                    let consumed = parse(&mut pieces, inp)
                        .with_context(|| err!("{spelling:?} failed"))?;
                    inp = &inp[consumed..];
                    at = end;
                }
                None => {
                    inp = expect_literal(inp, chars[at])?;
                    at += 1;
                }
            }
        }
        pieces.into_zoned()
    }

    /// Component listing in sorted order.
    pub(crate) fn describe(&self) -> String {
        describe(&self.tokens, None)
    }

    /// The longest reference component starting at `chars[at]`, with the
    /// position just past it.
    fn longest_match(
        &self,
        chars: &[char],
        at: usize,
    ) -> Option<(TokenEntry, usize)> {
        let mut node = self.graph.root();
        let mut best = None;
        let mut end = at;
        while end < chars.len() {
            let Some(child) = node.child(chars[end]) else { break };
            node = child;
            end += 1;
            if let Some(&entry) = node.value() {
                best = Some((entry, end));
            }
        }
        best
    }
}

/// Consumes one rune of input that must equal `ch`.
fn expect_literal(inp: &str, ch: char) -> Result<&str, Error> {
    let mut chars = inp.chars();
    match chars.next() {
        Some(got) if got == ch => Ok(chars.as_str()),
        Some(got) => Err(err!(
            "expected literal {ch:?} from layout, found {got:?} in input",
        )),
        None => Err(err!(
            "expected literal {ch:?} from layout, found end of input",
        )),
    }
}

pub(crate) fn tokens() -> TokenMap {
    vec![
        ("1", TokenEntry::new(
            "Month number (1-12)",
            |dt, _| Ok(dt.month().to_string()),
        ).parse(|p, inp| {
            let (month, n) = digits(inp, 1, 2).context("month")?;
            set_month(p, month)?;
            Ok(n)
        })),
        ("01", TokenEntry::new(
            "Month number zero padded to two characters (01-12)",
            |dt, _| Ok(format!("{:02}", dt.month())),
        ).parse(|p, inp| {
            let (month, n) = digits(inp, 2, 2).context("month")?;
            set_month(p, month)?;
            Ok(n)
        })),
        ("2", TokenEntry::new(
            "Day of month (1-31)",
            |dt, _| Ok(dt.day().to_string()),
        ).parse(|p, inp| {
            let (day, n) = digits(inp, 1, 2).context("day")?;
            set_day(p, day)?;
            Ok(n)
        })),
        ("_2", TokenEntry::new(
            "Day of month space padded to two characters ( 1-31)",
            |dt, _| Ok(format!("{:>2}", dt.day())),
        ).parse(|p, inp| {
            let skipped = usize::from(inp.starts_with(' '));
            let (day, n) = digits(&inp[skipped..], 1, 2).context("day")?;
            set_day(p, day)?;
            Ok(skipped + n)
        })),
        ("02", TokenEntry::new(
            "Day of month zero padded to two characters (01-31)",
            |dt, _| Ok(format!("{:02}", dt.day())),
        ).parse(|p, inp| {
            let (day, n) = digits(inp, 2, 2).context("day")?;
            set_day(p, day)?;
            Ok(n)
        })),
        ("__2", TokenEntry::new(
            "Day of year space padded to three characters (  1-366)",
            |dt, _| Ok(format!("{:>3}", dt.date().day_of_year())),
        )),
        ("002", TokenEntry::new(
            "Day of year zero padded to three characters (001-366)",
            |dt, _| Ok(format!("{:03}", dt.date().day_of_year())),
        )),
        ("3", TokenEntry::new(
            "Hour in 12 hour format (1-12)",
            |dt, _| Ok(hour12(dt.hour()).to_string()),
        ).parse(|p, inp| {
            let (hour, n) = digits(inp, 1, 2).context("hour")?;
            set_hour(p, hour)?;
            Ok(n)
        })),
        ("03", TokenEntry::new(
            "Hour in 12 hour format zero padded to two characters (01-12)",
            |dt, _| Ok(format!("{:02}", hour12(dt.hour()))),
        ).parse(|p, inp| {
            let (hour, n) = digits(inp, 2, 2).context("hour")?;
            set_hour(p, hour)?;
            Ok(n)
        })),
        ("15", TokenEntry::new(
            "Hour in 24 hour format zero padded to two characters (00-23)",
            |dt, _| Ok(format!("{:02}", dt.hour())),
        ).parse(|p, inp| {
            let (hour, n) = digits(inp, 1, 2).context("hour")?;
            set_hour(p, hour)?;
            Ok(n)
        })),
        ("4", TokenEntry::new(
            "Minute (0-59)",
            |dt, _| Ok(dt.minute().to_string()),
        ).parse(|p, inp| {
            let (minute, n) = digits(inp, 1, 2).context("minute")?;
            set_minute(p, minute)?;
            Ok(n)
        })),
        ("04", TokenEntry::new(
            "Minute zero padded to two characters (00-59)",
            |dt, _| Ok(format!("{:02}", dt.minute())),
        ).parse(|p, inp| {
            let (minute, n) = digits(inp, 2, 2).context("minute")?;
            set_minute(p, minute)?;
            Ok(n)
        })),
        ("5", TokenEntry::new(
            "Second (0-59)",
            |dt, _| Ok(dt.second().to_string()),
        ).parse(|p, inp| {
            let (second, n) = digits(inp, 1, 2).context("second")?;
            set_second(p, second)?;
            Ok(n)
        })),
        ("05", TokenEntry::new(
            "Second zero padded to two characters (00-59)",
            |dt, _| Ok(format!("{:02}", dt.second())),
        ).parse(|p, inp| {
            let (second, n) = digits(inp, 2, 2).context("second")?;
            set_second(p, second)?;
            Ok(n)
        })),
        ("06", TokenEntry::new(
            "Year number to two characters (00-99)",
            |dt, _| Ok(format!("{:02}", dt.year().rem_euclid(100))),
        ).parse(|p, inp| {
            let (year, n) = digits(inp, 2, 2).context("year")?;
            // Go's fixed pivot: 69-99 are the 1900s.
            let year = if year >= 69 { 1900 + year } else { 2000 + year };
            set_year(p, year)?;
            Ok(n)
        })),
        ("2006", TokenEntry::new(
            "Year number to four characters (0000-9999)",
            |dt, _| Ok(format!("{:04}", dt.year())),
        ).parse(|p, inp| {
            let (year, n) = digits(inp, 4, 4).context("year")?;
            set_year(p, year)?;
            Ok(n)
        })),
        ("-0700", TokenEntry::new(
            "Time zone offset as '±hhmm'",
            |dt, _| Ok(offset_hhmm(dt)),
        ).parse(|p, inp| parse_offset(p, inp, false))),
        ("-07:00", TokenEntry::new(
            "Time zone offset as '±hh:mm'",
            |dt, _| Ok(offset_colon(dt)),
        ).parse(|p, inp| parse_offset(p, inp, true))),
        ("-07", TokenEntry::new(
            "Time zone offset as '±hh'",
            |dt, _| Ok(offset_hours(dt.offset().seconds())),
        ).parse(parse_offset_hours)),
        ("-070000", TokenEntry::new(
            "Time zone offset as '±hhmmss'",
            |dt, _| Ok(offset_full(dt.offset().seconds(), false)),
        )),
        ("-07:00:00", TokenEntry::new(
            "Time zone offset as '±hh:mm:ss'",
            |dt, _| Ok(offset_full(dt.offset().seconds(), true)),
        )),
        ("Z0700", TokenEntry::new(
            "ISO 8601 'Z' for UTC or an offset formatted '±hhmm'",
            |dt, _| {
                Ok(if dt.offset().seconds() == 0 {
                    "Z".to_string()
                } else {
                    offset_hhmm(dt)
                })
            },
        ).parse(|p, inp| {
            if inp.starts_with('Z') {
                p.offset = Some(Offset::UTC);
                return Ok(1);
            }
            parse_offset(p, inp, false)
        })),
        ("Z07:00", TokenEntry::new(
            "ISO 8601 'Z' for UTC or an offset formatted '±hh:mm'",
            |dt, _| {
                Ok(if dt.offset().seconds() == 0 {
                    "Z".to_string()
                } else {
                    offset_colon(dt)
                })
            },
        ).parse(|p, inp| {
            if inp.starts_with('Z') {
                p.offset = Some(Offset::UTC);
                return Ok(1);
            }
            parse_offset(p, inp, true)
        })),
        ("Z07", TokenEntry::new(
            "ISO 8601 'Z' for UTC or an offset formatted '±hh'",
            |dt, _| {
                Ok(if dt.offset().seconds() == 0 {
                    "Z".to_string()
                } else {
                    offset_hours(dt.offset().seconds())
                })
            },
        ).parse(|p, inp| {
            if inp.starts_with('Z') {
                p.offset = Some(Offset::UTC);
                return Ok(1);
            }
            parse_offset_hours(p, inp)
        })),
        ("Z070000", TokenEntry::new(
            "ISO 8601 'Z' for UTC or an offset formatted '±hhmmss'",
            |dt, _| {
                Ok(if dt.offset().seconds() == 0 {
                    "Z".to_string()
                } else {
                    offset_full(dt.offset().seconds(), false)
                })
            },
        )),
        ("Z07:00:00", TokenEntry::new(
            "ISO 8601 'Z' for UTC or an offset formatted '±hh:mm:ss'",
            |dt, _| {
                Ok(if dt.offset().seconds() == 0 {
                    "Z".to_string()
                } else {
                    offset_full(dt.offset().seconds(), true)
                })
            },
        )),
        ("January", TokenEntry::new(
            "Month name",
            |dt, _| Ok(month_name(dt.month()).to_string()),
        ).parse(|p, inp| {
            let (month, n) = match_name(inp, &MONTH_NAMES)
                .ok_or_else(|| err!("unrecognized month name"))?;
            set_month(p, month as i64 + 1)?;
            Ok(n)
        })),
        ("Jan", TokenEntry::new(
            "Month name shortened to three characters",
            |dt, _| Ok(month_abbrev(dt.month()).to_string()),
        ).parse(|p, inp| {
            let (month, n) = match_name(inp, &MONTH_ABBREVS)
                .ok_or_else(|| err!("unrecognized month name"))?;
            set_month(p, month as i64 + 1)?;
            Ok(n)
        })),
        ("Monday", TokenEntry::new(
            "Day of week name",
            |dt, _| Ok(weekday_name(dt.weekday()).to_string()),
        ).parse(|p, inp| {
            let (weekday, n) = match_name(inp, &WEEKDAY_NAMES)
                .ok_or_else(|| err!("unrecognized weekday name"))?;
            p.weekday = Some(WEEKDAYS[weekday]);
            Ok(n)
        })),
        ("Mon", TokenEntry::new(
            "Day of week name shortened to three characters",
            |dt, _| Ok(weekday_abbrev(dt.weekday()).to_string()),
        ).parse(|p, inp| {
            let (weekday, n) = match_name(inp, &WEEKDAY_ABBREVS)
                .ok_or_else(|| err!("unrecognized weekday name"))?;
            p.weekday = Some(WEEKDAYS[weekday]);
            Ok(n)
        })),
        ("PM", TokenEntry::new(
            "AM/PM label",
            |dt, _| Ok(if dt.hour() < 12 { "AM" } else { "PM" }.to_string()),
        ).parse(parse_meridiem)),
        ("pm", TokenEntry::new(
            "am/pm label in lowercase",
            |dt, _| Ok(if dt.hour() < 12 { "am" } else { "pm" }.to_string()),
        ).parse(parse_meridiem)),
        ("MST", TokenEntry::new(
            "Abbreviated time zone name - 'GMT', 'CEST'",
            |dt, _| Ok(dateutil::tz_abbreviation(dt)),
        ).parse(|_, inp| {
            // Abbreviations are ambiguous, so the letters are consumed and
            // otherwise ignored. A parsed offset token is authoritative.
            let n = inp
                .bytes()
                .take(5)
                .take_while(|byte| byte.is_ascii_uppercase())
                .count();
            if n == 0 {
                return Err(err!("expected a time zone abbreviation"));
            }
            Ok(n)
        })),
        (".999", TokenEntry::new(
            "Fractional seconds to millisecond precision, trailing zeros \
             and the separator omitted when zero",
            |dt, _| Ok(fraction_trimmed(dt.subsec_nanosecond(), 3)),
        ).parse(parse_fraction_optional)),
        (".999999", TokenEntry::new(
            "Fractional seconds to microsecond precision, trailing zeros \
             and the separator omitted when zero",
            |dt, _| Ok(fraction_trimmed(dt.subsec_nanosecond(), 6)),
        ).parse(parse_fraction_optional)),
        (".999999999", TokenEntry::new(
            "Fractional seconds to nanosecond precision, trailing zeros \
             and the separator omitted when zero",
            |dt, _| Ok(fraction_trimmed(dt.subsec_nanosecond(), 9)),
        ).parse(parse_fraction_optional)),
        (".000", TokenEntry::new(
            "Fractional seconds to millisecond precision, always emitted",
            |dt, _| Ok(fraction_fixed(dt.subsec_nanosecond(), 3)),
        ).parse(parse_fraction_required)),
        (".000000", TokenEntry::new(
            "Fractional seconds to microsecond precision, always emitted",
            |dt, _| Ok(fraction_fixed(dt.subsec_nanosecond(), 6)),
        ).parse(parse_fraction_required)),
        (".000000000", TokenEntry::new(
            "Fractional seconds to nanosecond precision, always emitted",
            |dt, _| Ok(fraction_fixed(dt.subsec_nanosecond(), 9)),
        ).parse(parse_fraction_required)),
    ]
}

static MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];
static MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
    "Nov", "Dec",
];
static WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
    "Saturday",
];
static WEEKDAY_ABBREVS: [&str; 7] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
static WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Consumes between `min` and `max` ASCII digits, longest first.
fn digits(inp: &str, min: usize, max: usize) -> Result<(i64, usize), Error> {
    let count = inp
        .bytes()
        .take(max)
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if count < min {
        return Err(err!(
            "expected at least {min} digit(s), found {count}",
        ));
    }
    let value = inp[..count]
        .parse::<i64>()
        .map_err(|_| err!("invalid number {got:?}", got = &inp[..count]))?;
    Ok((value, count))
}

/// Case-insensitively matches one of `names` at the start of the input,
/// returning its index and length.
fn match_name(inp: &str, names: &[&str]) -> Option<(usize, usize)> {
    for (index, name) in names.iter().enumerate() {
        if inp.len() >= name.len()
            && inp[..name.len()].eq_ignore_ascii_case(name)
        {
            return Some((index, name.len()));
        }
    }
    None
}

fn set_year(p: &mut Pieces, year: i64) -> Result<(), Error> {
    p.dt = p.dt.with().year(year as i16).build().context("year")?;
    p.date_set = true;
    Ok(())
}

fn set_month(p: &mut Pieces, month: i64) -> Result<(), Error> {
    p.dt = p.dt.with().month(month as i8).build().context("month")?;
    p.date_set = true;
    Ok(())
}

fn set_day(p: &mut Pieces, day: i64) -> Result<(), Error> {
    p.dt = p.dt.with().day(day as i8).build().context("day")?;
    p.date_set = true;
    Ok(())
}

fn set_hour(p: &mut Pieces, hour: i64) -> Result<(), Error> {
    p.dt = p.dt.with().hour(hour as i8).build().context("hour")?;
    Ok(())
}

fn set_minute(p: &mut Pieces, minute: i64) -> Result<(), Error> {
    p.dt = p.dt.with().minute(minute as i8).build().context("minute")?;
    Ok(())
}

fn set_second(p: &mut Pieces, second: i64) -> Result<(), Error> {
    p.dt = p.dt.with().second(second as i8).build().context("second")?;
    Ok(())
}

fn parse_meridiem(p: &mut Pieces, inp: &str) -> Result<usize, Error> {
    let label = inp.get(..2).ok_or_else(|| err!("expected AM or PM"))?;
    if label.eq_ignore_ascii_case("am") {
        p.meridiem = Some(Meridiem::Am);
    } else if label.eq_ignore_ascii_case("pm") {
        p.meridiem = Some(Meridiem::Pm);
    } else {
        return Err(err!("expected AM or PM, found {label:?}"));
    }
    Ok(2)
}

/// Parses `±hhmm` (or `±hh:mm` with `colon`).
fn parse_offset(
    p: &mut Pieces,
    inp: &str,
    colon: bool,
) -> Result<usize, Error> {
    let (sign, mut consumed) = parse_sign(inp)?;
    let (hours, n) = digits(&inp[consumed..], 2, 2).context("offset hours")?;
    consumed += n;
    if colon {
        if !inp[consumed..].starts_with(':') {
            return Err(err!("expected ':' in time zone offset"));
        }
        consumed += 1;
    }
    let (minutes, n) =
        digits(&inp[consumed..], 2, 2).context("offset minutes")?;
    consumed += n;
    let seconds = sign * (hours * 3600 + minutes * 60) as i32;
    p.offset = Some(Offset::from_seconds(seconds).context("offset")?);
    Ok(consumed)
}

/// Parses `±hh`.
fn parse_offset_hours(p: &mut Pieces, inp: &str) -> Result<usize, Error> {
    let (sign, consumed) = parse_sign(inp)?;
    let (hours, n) = digits(&inp[consumed..], 2, 2).context("offset hours")?;
    let seconds = sign * (hours * 3600) as i32;
    p.offset = Some(Offset::from_seconds(seconds).context("offset")?);
    Ok(consumed + n)
}

fn parse_sign(inp: &str) -> Result<(i32, usize), Error> {
    match inp.as_bytes().first() {
        Some(b'+') => Ok((1, 1)),
        Some(b'-') => Ok((-1, 1)),
        _ => Err(err!("expected '+' or '-' sign for time zone offset")),
    }
}

/// Parses a `.digits` fraction if one is present.
fn parse_fraction_optional(
    p: &mut Pieces,
    inp: &str,
) -> Result<usize, Error> {
    if !inp.starts_with('.') {
        return Ok(0);
    }
    parse_fraction_required(p, inp)
}

fn parse_fraction_required(
    p: &mut Pieces,
    inp: &str,
) -> Result<usize, Error> {
    if !inp.starts_with('.') {
        return Err(err!("expected fractional seconds"));
    }
    let (_, count) = digits(&inp[1..], 1, 9).context("fractional seconds")?;
    let digits_str = &inp[1..1 + count];
    let mut nanos: i32 = 0;
    for byte in digits_str.bytes() {
        nanos = nanos * 10 + i32::from(byte - b'0');
    }
    nanos *= 10_i32.pow(9 - count as u32);
    p.dt = p
        .dt
        .with()
        .subsec_nanosecond(nanos)
        .build()
        .context("fractional seconds")?;
    Ok(1 + count)
}

/// `±hh`.
fn offset_hours(offset_seconds: i32) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    format!("{sign}{:02}", offset_seconds.abs() / 3600)
}

/// `±hhmmss` or `±hh:mm:ss`.
fn offset_full(offset_seconds: i32, colon: bool) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.abs();
    let (h, m, s) = (abs / 3600, abs % 3600 / 60, abs % 60);
    if colon {
        format!("{sign}{h:02}:{m:02}:{s:02}")
    } else {
        format!("{sign}{h:02}{m:02}{s:02}")
    }
}

/// The fraction of a second to `precision` digits with trailing zeros
/// trimmed; empty (no separator) when the fraction is zero.
fn fraction_trimmed(nanos: i32, precision: u32) -> String {
    let value = nanos / 10_i32.pow(9 - precision);
    if value == 0 {
        return String::new();
    }
    let mut digits = format!("{value:0width$}", width = precision as usize);
    while digits.ends_with('0') {
        digits.pop();
    }
    format!(".{digits}")
}

/// The fraction of a second to exactly `precision` digits.
fn fraction_fixed(nanos: i32, precision: u32) -> String {
    let value = nanos / 10_i32.pow(9 - precision);
    format!(".{value:0width$}", width = precision as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions() {
        assert_eq!(fraction_trimmed(123_000_000, 3), ".123");
        assert_eq!(fraction_trimmed(120_000_000, 3), ".12");
        assert_eq!(fraction_trimmed(0, 3), "");
        assert_eq!(fraction_trimmed(123_456_789, 9), ".123456789");
        assert_eq!(fraction_fixed(0, 3), ".000");
        assert_eq!(fraction_fixed(500_000_000, 3), ".500");
    }

    #[test]
    fn digit_runs() {
        assert_eq!(digits("2024-", 4, 4).unwrap(), (2024, 4));
        assert_eq!(digits("7/", 1, 2).unwrap(), (7, 1));
        assert!(digits("x", 1, 2).is_err());
        assert!(digits("2x", 2, 2).is_err());
    }

    #[test]
    fn name_matching() {
        assert_eq!(match_name("July 4", &MONTH_NAMES), Some((6, 4)));
        assert_eq!(match_name("jul", &MONTH_ABBREVS), Some((6, 3)));
        assert_eq!(match_name("Frittata", &WEEKDAY_ABBREVS), Some((5, 3)));
        assert_eq!(match_name("Noday", &WEEKDAY_NAMES), None);
    }
}
