/*!
Formatting and parsing of instants across format dialects.

A *dialect* is a named token convention: `strftime`'s `%`-prefixed
conversions, Go's reference-time components, moment.js and Luxon's bare
token words, plus the atomic `unix`/`rfc`/`iso` forms that take no pattern
at all. Each dialect contributes a token dictionary; the recognition
machinery (the `token`, `bare` and `prefix` modules) is shared.

The functions in this module are the public face: [`format`], [`parse`],
[`describe`] and the dialect listings. Dialects are addressed by name, with
the same aliases the command line accepts (`momentjs` for `moment`, `c`
for `strftime`, `ts` for `unix`, ...).
*/

use std::sync::LazyLock;

use jiff::{civil::Weekday, tz::TimeZone, Timestamp, Zoned};

use crate::{
    error::{err, Error, ErrorContext},
    locale::Locale,
};

use self::{
    bare::{BareDialect, EscapePolicy},
    goref::GoDialect,
    prefix::PrefixDialect,
};

mod bare;
mod goref;
mod luxon;
mod moment;
mod prefix;
mod strftime;
pub(crate) mod token;

static MOMENT: LazyLock<BareDialect> = LazyLock::new(|| {
    BareDialect::new("moment", EscapePolicy::paired('[', ']'), moment::tokens())
});

static LUXON: LazyLock<BareDialect> = LazyLock::new(|| {
    BareDialect::new("luxon", EscapePolicy::quoted('\''), luxon::tokens())
});

static STRFTIME: LazyLock<PrefixDialect> =
    LazyLock::new(|| PrefixDialect::new("strftime", '%', strftime::tokens()));

static GO: LazyLock<GoDialect> = LazyLock::new(GoDialect::new);

/// The dialects a name can resolve to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DialectKind {
    Unix,
    Rfc3339,
    Iso8601,
    Go,
    Moment,
    Luxon,
    Strftime,
    GoStrftime,
}

/// One registry row: the canonical dialect name, its aliases and whether
/// it can act as an input (parsing) dialect.
#[derive(Debug)]
struct DialectInfo {
    name: &'static str,
    aliases: &'static [&'static str],
    kind: DialectKind,
    parseable: bool,
}

static DIALECTS: &[DialectInfo] = &[
    DialectInfo {
        name: "unix",
        aliases: &["timestamp", "ts"],
        kind: DialectKind::Unix,
        parseable: true,
    },
    DialectInfo {
        name: "rfc",
        aliases: &["rfc3339"],
        kind: DialectKind::Rfc3339,
        parseable: true,
    },
    DialectInfo {
        name: "iso",
        aliases: &["iso8601"],
        kind: DialectKind::Iso8601,
        parseable: true,
    },
    DialectInfo {
        name: "go",
        aliases: &[],
        kind: DialectKind::Go,
        parseable: true,
    },
    DialectInfo {
        name: "moment",
        aliases: &["momentjs"],
        kind: DialectKind::Moment,
        parseable: false,
    },
    DialectInfo {
        name: "luxon",
        aliases: &[],
        kind: DialectKind::Luxon,
        parseable: false,
    },
    DialectInfo {
        name: "strftime",
        aliases: &["c", "strptime"],
        kind: DialectKind::Strftime,
        parseable: true,
    },
    DialectInfo {
        name: "go:strftime",
        aliases: &["go:strptime"],
        kind: DialectKind::GoStrftime,
        parseable: true,
    },
];

fn resolve(name: &str) -> Option<DialectKind> {
    let name = name.to_lowercase();
    for info in DIALECTS.iter() {
        if info.name == name || info.aliases.contains(&&*name) {
            return Some(info.kind);
        }
    }
    None
}

/// Formats an instant with the named dialect.
///
/// An empty dialect name yields the host's default instant rendering. The
/// pattern-driven dialects (`moment`, `luxon`, `strftime`) require a
/// non-empty pattern; the atomic dialects ignore the pattern entirely.
///
/// # Errors
///
/// This returns an error when the dialect name is unknown, when a required
/// pattern is missing and when a token's expansion fails.
pub fn format(
    zdt: &Zoned,
    locale: Locale,
    formatter: &str,
    pattern: &str,
) -> Result<String, Error> {
    if formatter.is_empty() {
        return Ok(zdt.to_string());
    }
    let Some(kind) = resolve(formatter) else {
        return Err(err!("'{formatter}' is not a supported formatter"));
    };
    trace!("formatting with dialect {kind:?}, pattern {pattern:?}");
    match kind {
        DialectKind::Unix => Ok(zdt.timestamp().as_second().to_string()),
        DialectKind::Rfc3339 => Ok(format_rfc3339(zdt)),
        DialectKind::Iso8601 => Ok(format_iso8601(zdt)),
        DialectKind::Go => GO.format(zdt, locale, pattern),
        DialectKind::Moment => {
            require_pattern(pattern)?;
            MOMENT.format(zdt, locale, pattern)
        }
        DialectKind::Luxon => {
            require_pattern(pattern)?;
            LUXON.format(zdt, locale, pattern)
        }
        DialectKind::Strftime | DialectKind::GoStrftime => {
            require_pattern(pattern)?;
            STRFTIME.format(zdt, locale, pattern)
        }
    }
}

/// Parses an instant out of `input` with the named dialect.
///
/// An empty dialect name defaults to the Go reference dialect with Go's
/// default rendering as the layout. The strftime family requires a
/// pattern; the `go` dialect accepts one and otherwise uses the default
/// layout; the atomic dialects take none.
///
/// The instant returned is in UTC, or pinned to a fixed offset when the
/// input carried one. Callers wanting a real time zone convert afterwards.
///
/// # Errors
///
/// This returns an error when the dialect name is unknown or not
/// parseable, when the input doesn't match, and when the pattern uses a
/// token with no parse support.
pub fn parse(
    formatter: &str,
    input: &str,
    pattern: Option<&str>,
) -> Result<Zoned, Error> {
    let kind = if formatter.is_empty() {
        DialectKind::Go
    } else {
        match resolve(formatter) {
            Some(kind) => kind,
            None => {
                return Err(err!(
                    "'{formatter}' is not a supported parser",
                ))
            }
        }
    };
    trace!("parsing with dialect {kind:?}");
    match kind {
        DialectKind::Unix => {
            let seconds: i64 = input.parse().map_err(|_| {
                err!("Unable to parse '{input}' as a unix timestamp")
            })?;
            let ts = Timestamp::from_second(seconds).with_context(|| {
                err!("Unable to parse '{input}' as a unix timestamp")
            })?;
            Ok(ts.to_zoned(TimeZone::UTC))
        }
        DialectKind::Rfc3339 => GO
            .parse(goref::RFC3339_LAYOUT, input)
            .with_context(|| {
                err!("Unable to parse '{input}' as an RFC 3339 string")
            }),
        DialectKind::Iso8601 => GO
            .parse(goref::ISO8601_LAYOUT, input)
            .with_context(|| {
                err!("Unable to parse '{input}' as an ISO 8601 string")
            }),
        DialectKind::Go => GO
            .parse(pattern.unwrap_or(goref::DEFAULT_LAYOUT), input)
            .with_context(|| {
                err!("Unable to parse '{input}' as a Go format string")
            }),
        DialectKind::Strftime | DialectKind::GoStrftime => {
            let pattern =
                pattern.ok_or_else(|| err!("No format string provided"))?;
            STRFTIME.parse(pattern, input)
        }
        DialectKind::Moment | DialectKind::Luxon => Err(err!(
            "parsing is not yet supported for the '{formatter}' formatter",
        )),
    }
}

/// Renders the token dictionary listing for the named dialect.
///
/// Only the dictionary dialects have tokens to list; the atomic dialects
/// report an error, as does an empty name.
pub fn describe(formatter: &str) -> Result<String, Error> {
    if formatter.is_empty() {
        return Err(err!("No formatter specified"));
    }
    match resolve(formatter) {
        Some(DialectKind::Moment) => Ok(MOMENT.describe()),
        Some(DialectKind::Luxon) => Ok(LUXON.describe()),
        Some(DialectKind::Strftime) | Some(DialectKind::GoStrftime) => {
            Ok(STRFTIME.describe())
        }
        Some(DialectKind::Go) => Ok(GO.describe()),
        _ => Err(err!("Formatter {formatter:?} is not supported")),
    }
}

/// Lists every dialect name with its aliases.
pub fn list_formatters() -> String {
    render_listing(DIALECTS.iter())
}

/// Lists the dialects usable for parsing, with their aliases.
pub fn list_parsers() -> String {
    render_listing(DIALECTS.iter().filter(|info| info.parseable))
}

fn render_listing<'a, I>(dialects: I) -> String
where
    I: Iterator<Item = &'a DialectInfo>,
{
    let mut out = String::new();
    for info in dialects {
        out.push_str(info.name);
        out.push('\n');
        if !info.aliases.is_empty() {
            out.push_str("  aliases:");
            for alias in info.aliases.iter() {
                out.push(' ');
                out.push_str(alias);
            }
            out.push('\n');
        }
    }
    out
}

fn require_pattern(pattern: &str) -> Result<(), Error> {
    if pattern.is_empty() {
        return Err(err!("No format string provided"));
    }
    Ok(())
}

/// The canonical RFC 3339 rendering, with `Z` for a zero offset.
fn format_rfc3339(zdt: &Zoned) -> String {
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}",
        zdt.year(),
        zdt.month(),
        zdt.day(),
        zdt.hour(),
        zdt.minute(),
        zdt.second(),
        offset_or_z(zdt.offset().seconds()),
    )
}

/// `YYYY-MM-DDTHH:MM:SS[.fff]` plus `Z` or `±HH:MM`, milliseconds trimmed
/// of trailing zeros and omitted when zero.
fn format_iso8601(zdt: &Zoned) -> String {
    let mut out = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        zdt.year(),
        zdt.month(),
        zdt.day(),
        zdt.hour(),
        zdt.minute(),
        zdt.second(),
    );
    let millis = zdt.subsec_nanosecond() / 1_000_000;
    if millis != 0 {
        let mut digits = format!("{millis:03}");
        while digits.ends_with('0') {
            digits.pop();
        }
        out.push('.');
        out.push_str(&digits);
    }
    out.push_str(&offset_or_z(zdt.offset().seconds()));
    out
}

fn offset_or_z(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "Z".to_string();
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.abs();
    format!("{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60)
}

// Shared helpers for the token dictionaries.

/// Converts a 24-hour clock value to a 12-hour one, mapping 0 to 12.
pub(crate) fn hour12(hour: i8) -> i8 {
    let hour = hour % 12;
    if hour == 0 {
        12
    } else {
        hour
    }
}

/// The first `len` characters of `s`. Character based, so multi-byte
/// names like `février` truncate cleanly.
pub(crate) fn truncate_chars(s: &str, len: usize) -> String {
    s.chars().take(len).collect()
}

/// Renders a number with its English ordinal suffix: `1st`, `22nd`,
/// `13th`.
pub(crate) fn ordinal(n: i64) -> String {
    // 11, 12 and 13 keep "th" despite their final digit.
    if matches!(n % 100, 11..=13) {
        return format!("{n}th");
    }
    match n % 10 {
        1 => format!("{n}st"),
        2 => format!("{n}nd"),
        3 => format!("{n}rd"),
        _ => format!("{n}th"),
    }
}

/// The English month name, with `month` in the range `1..=12`.
pub(crate) fn month_name(month: i8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        unk => unreachable!("invalid month {unk}"),
    }
}

/// The abbreviated English month name, with `month` in the range `1..=12`.
pub(crate) fn month_abbrev(month: i8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        unk => unreachable!("invalid month {unk}"),
    }
}

/// The English weekday name.
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sunday",
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
    }
}

/// The abbreviated English weekday name.
pub(crate) fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

/// The instant's offset as `±hhmm`.
pub(crate) fn offset_hhmm(zdt: &Zoned) -> String {
    let seconds = zdt.offset().seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("{sign}{:02}{:02}", abs / 3600, abs % 3600 / 60)
}

/// The instant's offset as `±hh:mm`.
pub(crate) fn offset_colon(zdt: &Zoned) -> String {
    let seconds = zdt.offset().seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.abs();
    format!("{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn zoned(y: i16, m: i8, d: i8, tz: &str) -> Zoned {
        date(y, m, d)
            .at(0, 0, 0, 0)
            .to_zoned(TimeZone::get(tz).unwrap())
            .unwrap()
    }

    #[test]
    fn ok_strftime_dates() {
        let zdt = zoned(1989, 12, 31, "Europe/London");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "strftime", pattern).unwrap()
        };
        insta::assert_snapshot!(f("%Y-%m-%d"), @"1989-12-31");
        insta::assert_snapshot!(f("%A %B %e"), @"Sunday December 31");
        insta::assert_snapshot!(f("%D"), @"12/31/89");
        insta::assert_snapshot!(f("%F %T"), @"1989-12-31 00:00:00");

        let zdt = zoned(2007, 1, 1, "UTC");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "strftime", pattern).unwrap()
        };
        insta::assert_snapshot!(f("%Y-%m-%d %H:%M:%S"), @"2007-01-01 00:00:00");
        insta::assert_snapshot!(f("%j %u %w"), @"001 1 1");
        insta::assert_snapshot!(f("%G %g %V"), @"2007 07 01");
    }

    #[test]
    fn ok_strftime_literals_and_unknowns() {
        let zdt = zoned(2007, 1, 1, "UTC");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "strftime", pattern).unwrap()
        };
        // Alternating literal and doubled prefixes.
        insta::assert_snapshot!(f("%%%%%%%S"), @"%%%00");
        insta::assert_snapshot!(f("%n%n%n"), @"\n\n\n");
        insta::assert_snapshot!(
            f("%toutput: %G%M%%%S%v"),
            @"\toutput: 200700%00 1-Jan-2007",
        );
        // Unknown or incomplete tokens pass through with their prefix.
        insta::assert_snapshot!(f("% %V%% %t %t"), @"% 01% \t \t");
        insta::assert_snapshot!(f("%Q"), @"%Q");
        insta::assert_snapshot!(f("100%"), @"100%");
        insta::assert_snapshot!(f("%Oz"), @"%Oz");
    }

    #[test]
    fn ok_strftime_week_numbers() {
        // 2007-01-01 is a Monday, so %W counts it as week 1 while %U
        // still sits in week 0.
        let zdt = zoned(2007, 1, 1, "UTC");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "strftime", pattern).unwrap()
        };
        insta::assert_snapshot!(f("%U"), @"00");
        insta::assert_snapshot!(f("%W"), @"01");

        // 2024-01-07 is the first Sunday of 2024.
        let zdt = zoned(2024, 1, 7, "UTC");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "strftime", pattern).unwrap()
        };
        insta::assert_snapshot!(f("%U"), @"01");
        insta::assert_snapshot!(f("%W"), @"01");
    }

    #[test]
    fn ok_moment_escapes() {
        let zdt = zoned(1997, 1, 4, "America/Los_Angeles");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "moment", pattern).unwrap()
        };
        insta::assert_snapshot!(f("[HH:mm] HH:mm"), @"HH:mm 00:00");
        insta::assert_snapshot!(f("YYYY-MM-DD"), @"1997-01-04");
        insta::assert_snapshot!(f("dddd Do MMMM"), @"Saturday 4th January");
        insta::assert_snapshot!(f("Q Qo DDD"), @"1 1st 4");
        insta::assert_snapshot!(f("h:mm a"), @"12:00 am");
    }

    #[test]
    fn ok_moment_aliases() {
        let zdt = zoned(1997, 1, 4, "America/Los_Angeles");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "moment", pattern).unwrap()
        };
        // `y` is an alias of `Y`, `GGGG` of `YYYY`, `zz` of `z`.
        assert_eq!(f("y"), f("Y"));
        assert_eq!(f("GGGG"), f("YYYY"));
        assert_eq!(f("zz"), f("z"));
        assert_eq!(f("NNN"), f("N"));
    }

    #[test]
    fn ok_luxon() {
        let zdt = zoned(2024, 1, 7, "Europe/Paris");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "luxon", pattern).unwrap()
        };
        insta::assert_snapshot!(
            f("yyyy-LL-dd'T'HH:mm:ssZZ"),
            @"2024-01-07T00:00:00+01:00",
        );
        insta::assert_snapshot!(f("cccc, DDD"), @"Sunday, 7 January 2024");
        insta::assert_snapshot!(f("EEEE"), @"Sunday");
        insta::assert_snapshot!(f("'HH:mm' HH:mm"), @"HH:mm 00:00");
        insta::assert_snapshot!(f("h:mmd/L/yyyy"), @"12:007/1/2024");
        insta::assert_snapshot!(f("ZZZ z"), @"+0100 Europe/Paris");
    }

    #[test]
    fn ok_longest_match_wins() {
        let zdt = zoned(2024, 1, 7, "UTC");
        let f = |pattern| {
            format(&zdt, Locale::EnGb, "moment", pattern).unwrap()
        };
        // With both `M` and `MM` defined, `MM` must win.
        insta::assert_snapshot!(f("MM"), @"01");
        // `MMM` has no entry of its own... it *is* a token (month name
        // truncated), so the full spelling expands.
        insta::assert_snapshot!(f("MMM"), @"Jan");
        // A broken spelling falls back to the deepest valued prefix and
        // literal leftovers: `YYY` is `YY` + a literal `Y`.
        insta::assert_snapshot!(f("YYY"), @"24Y");
    }

    #[test]
    fn ok_go_reference() {
        let zdt = zoned(1997, 1, 4, "UTC");
        let f =
            |pattern| format(&zdt, Locale::EnGb, "go", pattern).unwrap();
        insta::assert_snapshot!(f("2006-01-02"), @"1997-01-04");
        insta::assert_snapshot!(
            f("Mon Jan _2 15:04:05 2006"),
            @"Sat Jan  4 00:00:00 1997",
        );
        insta::assert_snapshot!(f("Monday, January 2, 2006"), @"Saturday, January 4, 1997");
        insta::assert_snapshot!(f("3:04PM"), @"12:00AM");
        insta::assert_snapshot!(f("02/01/06"), @"04/01/97");

        let zdt = zoned(2024, 1, 7, "Europe/Paris");
        let f =
            |pattern| format(&zdt, Locale::EnGb, "go", pattern).unwrap();
        insta::assert_snapshot!(f("-0700"), @"+0100");
        insta::assert_snapshot!(f("Z07:00"), @"+01:00");
        let zdt = zoned(2024, 1, 7, "UTC");
        let f =
            |pattern| format(&zdt, Locale::EnGb, "go", pattern).unwrap();
        insta::assert_snapshot!(f("Z07:00"), @"Z");
    }

    #[test]
    fn ok_atomic_dialects() {
        let zdt = zoned(2024, 1, 7, "Europe/Paris");
        let f = |name| format(&zdt, Locale::EnGb, name, "").unwrap();
        insta::assert_snapshot!(f("unix"), @"1704582000");
        insta::assert_snapshot!(f("rfc"), @"2024-01-07T00:00:00+01:00");
        insta::assert_snapshot!(f("iso"), @"2024-01-07T00:00:00+01:00");
        // Aliases resolve to the same dialect.
        assert_eq!(f("ts"), f("unix"));
        assert_eq!(f("rfc3339"), f("rfc"));
        assert_eq!(f("iso8601"), f("iso"));

        let zdt = zoned(2024, 1, 7, "UTC");
        let f = |name| format(&zdt, Locale::EnGb, name, "").unwrap();
        insta::assert_snapshot!(f("rfc"), @"2024-01-07T00:00:00Z");
        insta::assert_snapshot!(f(""), @"2024-01-07T00:00:00+00:00[UTC]");
    }

    #[test]
    fn ok_iso_millis_are_trimmed() {
        let zdt = date(2024, 1, 7)
            .at(12, 30, 45, 123_000_000)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        assert_eq!(
            format(&zdt, Locale::EnGb, "iso", "").unwrap(),
            "2024-01-07T12:30:45.123Z",
        );
        let zdt = date(2024, 1, 7)
            .at(12, 30, 45, 500_000_000)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        assert_eq!(
            format(&zdt, Locale::EnGb, "iso", "").unwrap(),
            "2024-01-07T12:30:45.5Z",
        );
    }

    #[test]
    fn ok_parse_strftime() {
        let zdt = parse("strftime", "04/01/97", Some("%d/%m/%y")).unwrap();
        assert_eq!(zdt.to_string(), "1997-01-04T00:00:00+00:00[UTC]");

        // %e accepts a space- or zero-padded day.
        let zdt = parse("strftime", " 4/01/97", Some("%e/%m/%y")).unwrap();
        assert_eq!(zdt.date(), date(1997, 1, 4));
        let zdt = parse("strftime", "04/01/97", Some("%e/%m/%y")).unwrap();
        assert_eq!(zdt.date(), date(1997, 1, 4));

        // The `go:strptime` spelling reaches the same parser.
        let zdt =
            parse("go:strptime", "31/12/89", Some("%d/%m/%y")).unwrap();
        assert_eq!(zdt.date(), date(1989, 12, 31));
    }

    #[test]
    fn ok_parse_strftime_round_trip() {
        let zdt = zoned(1997, 1, 4, "UTC");
        for pattern in ["%d/%m/%y", "%e.%m.%y", "%y%m%d"] {
            let rendered =
                format(&zdt, Locale::EnGb, "strftime", pattern).unwrap();
            let parsed =
                parse("strftime", &rendered, Some(pattern)).unwrap();
            assert_eq!(parsed.date(), zdt.date(), "pattern {pattern}");
        }
    }

    #[test]
    fn err_parse_strftime() {
        let err =
            parse("strftime", "1997-01-04", Some("%Y-%m-%d")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parsing is not yet supported for token '%Y'",
        );
        let err = parse("strftime", "xx/01/97", Some("%d/%m/%y"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("Unable to parse date"), "got: {err}");
        let err = parse("strftime", "04/01/97", None).unwrap_err();
        assert_eq!(err.to_string(), "No format string provided");
    }

    #[test]
    fn ok_parse_atomic() {
        let zdt = parse("unix", "1704582000", None).unwrap();
        assert_eq!(zdt.to_string(), "2024-01-06T23:00:00+00:00[UTC]");

        let zdt = parse("rfc", "2024-01-07T00:00:00+01:00", None).unwrap();
        assert_eq!(zdt.timestamp().as_second(), 1704582000);
        assert_eq!(zdt.offset().seconds(), 3600);

        let zdt = parse("iso", "2024-01-07T00:00:00.123Z", None).unwrap();
        assert_eq!(zdt.subsec_nanosecond(), 123_000_000);

        // Go's default rendering is the default parse layout.
        let zdt =
            parse("", "2024-01-07 00:00:00 +0100 CET", None).unwrap();
        assert_eq!(zdt.timestamp().as_second(), 1704582000);
        let zdt = parse(
            "go",
            "2024-01-07 00:00:00.25 +0100 CET",
            None,
        )
        .unwrap();
        assert_eq!(zdt.subsec_nanosecond(), 250_000_000);
    }

    #[test]
    fn err_parse_atomic() {
        assert_eq!(
            parse("unix", "123x", None).unwrap_err().to_string(),
            "Unable to parse '123x' as a unix timestamp",
        );
        let err = parse("rfc", "not-a-date", None).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Unable to parse 'not-a-date' as an RFC 3339"));
        assert_eq!(
            parse("moment", "whenever", None).unwrap_err().to_string(),
            "parsing is not yet supported for the 'moment' formatter",
        );
        assert_eq!(
            parse("klingon", "x", None).unwrap_err().to_string(),
            "'klingon' is not a supported parser",
        );
    }

    #[test]
    fn err_unknown_formatter() {
        let zdt = zoned(2024, 1, 7, "UTC");
        assert_eq!(
            format(&zdt, Locale::EnGb, "klingon", "")
                .unwrap_err()
                .to_string(),
            "'klingon' is not a supported formatter",
        );
        assert_eq!(
            format(&zdt, Locale::EnGb, "moment", "")
                .unwrap_err()
                .to_string(),
            "No format string provided",
        );
    }

    #[test]
    fn describe_is_deterministic_and_sorted() {
        for name in ["moment", "luxon", "strftime", "go"] {
            let first = describe(name).unwrap();
            assert_eq!(first, describe(name).unwrap(), "dialect {name}");
            let keys: Vec<&str> = first
                .lines()
                .filter(|line| !line.starts_with(' '))
                .map(|line| line.split(": ").next().unwrap())
                .collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted, "dialect {name}");
        }
        assert!(describe("moment")
            .unwrap()
            .contains("MM: Month number zero padded to two digits"));
        assert!(describe("strftime").unwrap().contains("%b: Month name"));
        assert!(describe("strftime")
            .unwrap()
            .contains("  aliases: h"));
    }

    #[test]
    fn err_describe() {
        assert_eq!(
            describe("").unwrap_err().to_string(),
            "No formatter specified",
        );
        assert_eq!(
            describe("unix").unwrap_err().to_string(),
            "Formatter \"unix\" is not supported",
        );
    }

    #[test]
    fn listings_are_stable() {
        insta::assert_snapshot!(list_formatters(), @r###"
        unix
          aliases: timestamp ts
        rfc
          aliases: rfc3339
        iso
          aliases: iso8601
        go
        moment
          aliases: momentjs
        luxon
        strftime
          aliases: c strptime
        go:strftime
          aliases: go:strptime
        "###);
        assert!(!list_parsers().contains("moment"));
        assert!(!list_parsers().contains("luxon"));
        assert!(list_parsers().contains("go:strftime"));
    }
}
