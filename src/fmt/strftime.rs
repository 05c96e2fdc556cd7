/*!
The strftime/strptime token dictionary.

Formatting covers the usual C conversions plus the `%E*`/`%O*` alternative
families (which fall back to their base conversions, since the locale
catalogue carries no alternative numbering systems). Parsing covers a
declared subset: `%%`, `%d`, `%e`, `%m` and `%y`; everything else reports
that parsing isn't supported rather than guessing.
*/

use jiff::{civil::Weekday, Zoned};

use crate::{
    dateutil,
    error::{err, Error, ErrorContext},
    fmt::{
        hour12, month_abbrev, month_name, offset_hhmm,
        token::{Pieces, TokenEntry, TokenMap},
        truncate_chars,
    },
};

pub(crate) fn tokens() -> TokenMap {
    vec![
        ("%", TokenEntry::new(
            "'%' character literal",
            |_, _| Ok("%".to_string()),
        ).parse(parse_percent)),
        ("A", TokenEntry::new(
            "Weekday name - 'Monday', 'Tuesday'",
            |dt, locale| Ok(locale.weekday_wide(dt.weekday()).to_string()),
        )),
        ("a", TokenEntry::new(
            "Weekday name truncated to three characters - 'Mon', 'Tue'",
            |dt, locale| {
                Ok(locale.weekday_abbreviated(dt.weekday()).to_string())
            },
        )),
        ("B", TokenEntry::new(
            "Month name - 'January', 'February'",
            |dt, _| Ok(month_name(dt.month()).to_string()),
        )),
        ("b", TokenEntry::new(
            "Month name truncated to three characters - 'Jan', 'Feb'",
            |dt, _| Ok(month_abbrev(dt.month()).to_string()),
        ).aliases(&["h"])),
        ("c", TokenEntry::new(
            "Date and time for the current locale (hardcoded to UK format \
             currently)",
            |dt, _| {
                Ok(format!(
                    "{} {:>2} {} {:02}:{:02}:{:02} {}",
                    weekday_abbrev_en(dt.weekday()),
                    dt.day(),
                    month_abbrev(dt.month()),
                    dt.hour(),
                    dt.minute(),
                    dt.second(),
                    dt.year(),
                ))
            },
        )),
        ("C", TokenEntry::new(
            "The century number (0-99)",
            |dt, _| Ok((dt.year() / 100).to_string()),
        )),
        ("d", TokenEntry::new(
            "Day of month zero padded to two digits (01-31)",
            |dt, _| Ok(format!("{:02}", dt.day())),
        ).parse(parse_day)),
        ("D", TokenEntry::new(
            "American style date (month first) equivalent to '%m/%d/%y' \
             where the year is truncated to the last two digits - \
             '01/31/97', '02/28/01'",
            |dt, _| {
                Ok(format!(
                    "{:02}/{:02}/{:02}",
                    dt.month(),
                    dt.day(),
                    dt.year().rem_euclid(100),
                ))
            },
        )),
        ("e", TokenEntry::new(
            "Day of month space padded to two characters ( 1-31)",
            |dt, _| Ok(format!("{:>2}", dt.day())),
        ).parse(parse_day_loose)),
        ("F", TokenEntry::new(
            "Date in year-month-day format equivalent to '%Y-%m-%d' - \
             '2024-01-04', '1997-10-31'",
            |dt, _| {
                Ok(format!(
                    "{}-{:02}-{:02}",
                    dt.year(),
                    dt.month(),
                    dt.day(),
                ))
            },
        )),
        ("g", TokenEntry::new(
            "ISO week year shortened to the last two digits (00-99)",
            |dt, _| {
                let year = dt.date().iso_week_date().year();
                Ok(format!("{:02}", year.rem_euclid(100)))
            },
        )),
        ("G", TokenEntry::new(
            "ISO week year - '1999', '2007'",
            |dt, _| Ok(dt.date().iso_week_date().year().to_string()),
        )),
        ("H", TokenEntry::new(
            "Hour in 24 hour format zero padded to two digits (00-23)",
            |dt, _| Ok(format!("{:02}", dt.hour())),
        )),
        ("I", TokenEntry::new(
            "Hour in 12 hour format zero padded to two digits (01-12)",
            |dt, _| Ok(format!("{:02}", hour12(dt.hour()))),
        )),
        ("j", TokenEntry::new(
            "Day of year zero padded to three digits (001-366)",
            |dt, _| Ok(format!("{:03}", dt.date().day_of_year())),
        )),
        ("k", TokenEntry::new(
            "Hour in 24 hour format space padded to two digits ( 0-23)",
            |dt, _| Ok(format!("{:>2}", dt.hour())),
        )),
        ("l", TokenEntry::new(
            "Hour in 12 hour format space padded to two digits ( 1-12)",
            |dt, _| Ok(format!("{:>2}", hour12(dt.hour()))),
        )),
        ("m", TokenEntry::new(
            "Month number zero padded to two digits (01-12)",
            |dt, _| Ok(format!("{:02}", dt.month())),
        ).parse(parse_month)),
        ("M", TokenEntry::new(
            "Minutes zero padded to two digits (00-59)",
            |dt, _| Ok(format!("{:02}", dt.minute())),
        )),
        ("n", TokenEntry::new(
            "Newline whitespace - '\\n'",
            |_, _| Ok("\n".to_string()),
        )),
        ("p", TokenEntry::new(
            "The locale's equivalent of AM or PM (hardcoded to English \
             am/pm)",
            |dt, _| {
                Ok(if dt.hour() < 12 { "am" } else { "pm" }.to_string())
            },
        )),
        ("r", TokenEntry::new(
            "12 hour time represented as hours, minutes, seconds and am/pm \
             equivalent to \"%I:%M:%S %p\" (hardcoded to English am/pm) - \
             '11:24:52 pm', '04:09:20 am'",
            |dt, _| {
                let meridiem = if dt.hour() < 12 { "am" } else { "pm" };
                Ok(format!(
                    "{:02}:{:02}:{:02} {meridiem}",
                    hour12(dt.hour()),
                    dt.minute(),
                    dt.second(),
                ))
            },
        )),
        ("R", TokenEntry::new(
            "Time represented as hours and minutes equivalent to %H:%M - \
             '12:24', '04:09'",
            |dt, _| Ok(format!("{:02}:{:02}", dt.hour(), dt.minute())),
        )),
        ("s", TokenEntry::new(
            "Seconds since the unix epoch 1970-01-01 00:00:00 +0000 (UTC)",
            |dt, _| Ok(dt.timestamp().as_second().to_string()),
        )),
        ("S", TokenEntry::new(
            "Seconds zero padded to two digits (00-60; 60 may occur for \
             leap seconds)",
            |dt, _| Ok(format!("{:02}", dt.second())),
        )),
        ("t", TokenEntry::new(
            "Tab whitespace - '\\t'",
            |_, _| Ok("\t".to_string()),
        )),
        ("T", TokenEntry::new(
            "Time represented as hours, minutes and seconds equivalent to \
             %H:%M:%S - '12:34:03', '04:09:59'",
            |dt, _| {
                Ok(format!(
                    "{:02}:{:02}:{:02}",
                    dt.hour(),
                    dt.minute(),
                    dt.second(),
                ))
            },
        )),
        ("u", TokenEntry::new(
            "Day of week where Monday = 1 and Sunday = 7 (1-7)",
            |dt, _| Ok(dt.weekday().to_monday_one_offset().to_string()),
        )),
        ("U", TokenEntry::new(
            "Week number of the year where the first Sunday of January is \
             considered week 1 - (00-53)",
            |dt, _| {
                Ok(format!("{:02}", week_from_first(Weekday::Sunday, dt)?))
            },
        )),
        ("v", TokenEntry::new(
            "Date with space padded day; truncated month name and year \
             equivalent to %d-%b-%Y - ' 4-Jan-1997'",
            |dt, locale| {
                Ok(format!(
                    "{:>2}-{}-{}",
                    dt.day(),
                    truncate_chars(locale.month_wide(dt.month()), 3),
                    dt.year(),
                ))
            },
        )),
        ("V", TokenEntry::new(
            "ISO8601 week number of the year zero padded to two digits - \
             (01-53)",
            |dt, _| {
                Ok(format!("{:02}", dt.date().iso_week_date().week()))
            },
        )),
        ("w", TokenEntry::new(
            "Day of week number (0-6) where Sunday is 0 and Saturday is 6",
            |dt, _| Ok(dt.weekday().to_sunday_zero_offset().to_string()),
        )),
        ("W", TokenEntry::new(
            "Week number of the year where the first Monday of January is \
             considered week 1 - (00-53)",
            |dt, _| {
                Ok(format!("{:02}", week_from_first(Weekday::Monday, dt)?))
            },
        )),
        ("x", TokenEntry::new(
            "Locale date format - '04/12/1999', '11/02/2007'",
            |dt, locale| Ok(locale.fmt_date_short(dt)),
        )),
        ("X", TokenEntry::new(
            "Locale time including seconds - '03:57:22', '18:08:01'",
            |dt, locale| Ok(locale.fmt_time_medium(dt)),
        )),
        ("y", TokenEntry::new(
            "The year within the century zero padded to two digits (00-99)",
            |dt, _| Ok(format!("{:02}", dt.year().rem_euclid(100))),
        ).parse(parse_year_2digit)),
        ("Y", TokenEntry::new(
            "Year number - '1999', '2007'",
            |dt, _| Ok(dt.year().to_string()),
        )),
        ("z", TokenEntry::new(
            "Time zone offset in +hhmm format - '-0400', '+0530'",
            |dt, _| Ok(offset_hhmm(dt)),
        )),
        ("Z", TokenEntry::new(
            "Abbreviated time zone offset - 'GMT', 'CEST', '+0530'",
            |dt, _| Ok(dateutil::tz_abbreviation(dt)),
        )),
        ("Ec", TokenEntry::new(
            "Alternative representation for date and time for the current \
             locale (hardcoded to UK format currently)",
            |dt, _| {
                Ok(format!(
                    "{} {:>2} {} {:02}:{:02}:{:02} {}",
                    weekday_abbrev_en(dt.weekday()),
                    dt.day(),
                    month_abbrev(dt.month()),
                    dt.hour(),
                    dt.minute(),
                    dt.second(),
                    dt.year(),
                ))
            },
        )),
        ("EC", TokenEntry::new(
            "Base year/period - (0-99)",
            |dt, _| Ok((dt.year() / 100).to_string()),
        )),
        ("Ex", TokenEntry::new(
            "Short date format in the specified locale",
            |dt, locale| Ok(locale.fmt_date_short(dt)),
        )),
        ("EX", TokenEntry::new(
            "Time format in the specified locale",
            |dt, locale| Ok(locale.fmt_time_medium(dt)),
        )),
        ("Ey", TokenEntry::new(
            "Year to two digits - '97', '07'",
            |dt, _| Ok(format!("{:02}", dt.year().rem_euclid(100))),
        )),
        ("EY", TokenEntry::new(
            "Alternative year number - '1997', '2007'",
            |dt, _| Ok(dt.year().to_string()),
        )),
        ("Od", TokenEntry::new(
            "Day of the month using the locale's alternative numeric \
             symbols, zero padded - (01-31)",
            |dt, _| Ok(format!("{:02}", dt.day())),
        )),
        ("Oe", TokenEntry::new(
            "Day of the month using the locale's alternative numeric \
             symbols, space padded - ( 1-31)",
            |dt, _| Ok(format!("{:>2}", dt.day())),
        )),
        ("OH", TokenEntry::new(
            "Hour in 24 hour format using the locale's alternative numeric \
             symbols, zero padded - (00-23)",
            |dt, _| Ok(format!("{:02}", dt.hour())),
        )),
        ("OI", TokenEntry::new(
            "Hour in 12 hour format using the locale's alternative numeric \
             symbols, zero padded - (01-12)",
            |dt, _| Ok(format!("{:02}", hour12(dt.hour()))),
        )),
        ("Om", TokenEntry::new(
            "Month number using the locale's alternative numeric symbols, \
             zero padded (01-12)",
            |dt, _| Ok(format!("{:02}", dt.month())),
        )),
        ("OM", TokenEntry::new(
            "Minutes using the locale's alternative numeric symbols, zero \
             padded (00-59)",
            |dt, _| Ok(format!("{:02}", dt.minute())),
        )),
        ("OS", TokenEntry::new(
            "Seconds using the locale's alternative numeric symbols, zero \
             padded (00-60; 60 may occur for leap seconds)",
            |dt, _| Ok(format!("{:02}", dt.second())),
        )),
        ("OU", TokenEntry::new(
            "Week number of the year using the locale's alternative \
             numeric symbols where the first Sunday of January is \
             considered week 1 - (00-53)",
            |dt, _| {
                Ok(format!("{:02}", week_from_first(Weekday::Sunday, dt)?))
            },
        )),
        ("Ow", TokenEntry::new(
            "Day of week number (0-6) using the locale's alternative \
             numeric symbols where Sunday is 0 and Saturday is 6",
            |dt, _| Ok(dt.weekday().to_sunday_zero_offset().to_string()),
        )),
        ("OW", TokenEntry::new(
            "Week number of the year using the locale's alternative \
             numeric symbols where the first Monday of January is \
             considered week 1 - (00-53)",
            |dt, _| {
                Ok(format!("{:02}", week_from_first(Weekday::Monday, dt)?))
            },
        )),
        ("Oy", TokenEntry::new(
            "Year number offset from the century using the locale's \
             alternative numeric symbols - '99', '07'",
            |dt, _| Ok(format!("{:02}", dt.year().rem_euclid(100))),
        )),
    ]
}

/// Week-of-year where week 1 starts at the first `weekday` of January.
/// Days before that marker land in week 0.
fn week_from_first(weekday: Weekday, zdt: &Zoned) -> Result<i64, Error> {
    let midnight = dateutil::day_start(zdt)?;
    let jan1 = dateutil::year_start(&midnight)?;
    let first = dateutil::next_weekday(weekday, &jan1)?;
    Ok((dateutil::weeks_between(&midnight, &first) + 1.0) as i64)
}

/// English weekday abbreviation, for the conversions that are hardcoded to
/// the UK/C locale.
fn weekday_abbrev_en(weekday: Weekday) -> &'static str {
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

// The parse actions below make up the declared strptime subset. Each one
// consumes from the front of the input and writes a field into the
// accumulator.

/// %%
fn parse_percent(_: &mut Pieces, inp: &str) -> Result<usize, Error> {
    if !inp.starts_with('%') {
        return Err(err!("expected literal '%' in input"));
    }
    Ok(1)
}

/// %d
fn parse_day(pieces: &mut Pieces, inp: &str) -> Result<usize, Error> {
    let (day, consumed) =
        two_digits(inp, false).context("Unable to parse date")?;
    pieces.dt = pieces
        .dt
        .with()
        .day(day)
        .build()
        .context("Unable to parse date")?;
    pieces.date_set = true;
    Ok(consumed)
}

/// %e, which accepts both ` 4` and `04`.
fn parse_day_loose(pieces: &mut Pieces, inp: &str) -> Result<usize, Error> {
    let (day, consumed) =
        two_digits(inp, true).context("Unable to parse date")?;
    pieces.dt = pieces
        .dt
        .with()
        .day(day)
        .build()
        .context("Unable to parse date")?;
    pieces.date_set = true;
    Ok(consumed)
}

/// %m
fn parse_month(pieces: &mut Pieces, inp: &str) -> Result<usize, Error> {
    let (month, consumed) =
        two_digits(inp, false).context("Unable to parse month")?;
    pieces.dt = pieces
        .dt
        .with()
        .month(month)
        .build()
        .context("Unable to parse month")?;
    pieces.date_set = true;
    Ok(consumed)
}

/// %y, with the two-digit-year pivot: values above the current year mod
/// 100 belong to the 1900s, the rest to the 2000s.
fn parse_year_2digit(
    pieces: &mut Pieces,
    inp: &str,
) -> Result<usize, Error> {
    let (year, consumed) =
        two_digits(inp, false).context("Unable to parse year")?;
    let year = i16::from(year);
    let pivot = Zoned::now().year().rem_euclid(100);
    let year = if year > pivot { 1900 + year } else { 2000 + year };
    pieces.dt = pieces
        .dt
        .with()
        .year(year)
        .build()
        .context("Unable to parse year")?;
    pieces.date_set = true;
    Ok(consumed)
}

/// Reads exactly two characters as a number. With `space_ok`, a leading
/// space counts as a zero tens digit.
fn two_digits(inp: &str, space_ok: bool) -> Result<(i8, usize), Error> {
    let bytes = inp.as_bytes();
    if bytes.len() < 2 {
        return Err(err!(
            "expected two characters, but found {} remaining",
            bytes.len(),
        ));
    }
    let tens = match bytes[0] {
        b' ' if space_ok => 0,
        byte if byte.is_ascii_digit() => byte - b'0',
        byte => {
            return Err(err!(
                "expected a digit, found {:?}",
                char::from(byte),
            ))
        }
    };
    if !bytes[1].is_ascii_digit() {
        return Err(err!(
            "expected a digit, found {:?}",
            char::from(bytes[1]),
        ));
    }
    Ok(((tens * 10 + (bytes[1] - b'0')) as i8, 2))
}
