/*!
The Luxon token dictionary.

Tokens are bare words recognized by longest match; literal text is escaped
with single quotes (`'T'`). This dialect is format-only.

Missing relative to Luxon proper: `ZZZZZ` (full offset name), `TTTT`
(localised 24 hour time with the full zone name) and the `f`/`F` localised
date-time families, all of which need zone names the locale catalogue
doesn't carry.
*/

use jiff::{civil::Weekday, Zoned};

use crate::{
    dateutil,
    error::Error,
    fmt::{
        hour12, offset_colon, offset_hhmm,
        token::{TokenEntry, TokenMap},
        truncate_chars,
    },
};

pub(crate) fn tokens() -> TokenMap {
    vec![
        ("a", TokenEntry::new(
            "Meridiem - 'AM'",
            |dt, _| Ok(if dt.hour() < 12 { "AM" } else { "PM" }.to_string()),
        )),
        ("c", TokenEntry::new(
            "Day of week where Monday = 1 and Sunday = 7 (1-7)",
            |dt, _| Ok(dt.weekday().to_monday_one_offset().to_string()),
        ).aliases(&["E"])),
        ("ccc", TokenEntry::new(
            "Day of week name truncated to three characters - 'Sun', 'Mon'",
            |dt, locale| {
                Ok(truncate_chars(locale.weekday_wide(dt.weekday()), 3))
            },
        ).aliases(&["EEE"])),
        ("cccc", TokenEntry::new(
            "Day of week name - 'Sunday', 'Monday'",
            |dt, locale| Ok(locale.weekday_wide(dt.weekday()).to_string()),
        ).aliases(&["EEEE"])),
        ("ccccc", TokenEntry::new(
            "Day of week name truncated to one character - 'S', 'M'",
            |dt, locale| Ok(locale.weekday_narrow(dt.weekday()).to_string()),
        ).aliases(&["EEEEE"])),
        ("d", TokenEntry::new(
            "Day of month (1-31)",
            |dt, _| Ok(dt.day().to_string()),
        )),
        ("dd", TokenEntry::new(
            "Day of month zero padded to two digits (01-31)",
            |dt, _| Ok(format!("{:02}", dt.day())),
        )),
        ("D", TokenEntry::new(
            "Localised numerical date - '08/11/24'",
            |dt, locale| Ok(locale.fmt_date_short(dt)),
        )),
        ("DD", TokenEntry::new(
            "Localised date with abbreviated month name - 'Nov 8, 2024'",
            |dt, locale| Ok(locale.fmt_date_medium(dt)),
        )),
        ("DDD", TokenEntry::new(
            "Localised date with month name - 'November 8, 2024'",
            |dt, locale| Ok(locale.fmt_date_long(dt)),
        )),
        ("DDDD", TokenEntry::new(
            "Localised date with weekday and month name - 'Friday, \
             November 8, 2024'",
            |dt, locale| Ok(locale.fmt_date_full(dt)),
        )),
        ("G", TokenEntry::new(
            "Era name abbreviated - 'BC', 'AD'",
            |dt, _| Ok(if dt.year() < 0 { "BC" } else { "AD" }.to_string()),
        )),
        ("GG", TokenEntry::new(
            "Era name in full - 'Before Christ', 'Anno Domini'",
            |dt, _| {
                Ok(if dt.year() < 0 {
                    "Before Christ"
                } else {
                    "Anno Domini"
                }
                .to_string())
            },
        )),
        ("GGGGG", TokenEntry::new(
            "Era name abbreviated to one character - 'B', 'A'",
            |dt, _| Ok(if dt.year() < 0 { "B" } else { "A" }.to_string()),
        )),
        ("H", TokenEntry::new(
            "Hour in 24 hour format (0-23)",
            |dt, _| Ok(dt.hour().to_string()),
        )),
        ("HH", TokenEntry::new(
            "Hour in 24 hour format zero padded to two digits (00-23)",
            |dt, _| Ok(format!("{:02}", dt.hour())),
        )),
        ("h", TokenEntry::new(
            "Hour in 12 hour format (1-12)",
            |dt, _| Ok(hour12(dt.hour()).to_string()),
        )),
        ("hh", TokenEntry::new(
            "Hour in 12 hour format zero padded to two digits (01-12)",
            |dt, _| Ok(format!("{:02}", hour12(dt.hour()))),
        )),
        ("kk", TokenEntry::new(
            "ISO week year shortened to the last two digits - '99', '07'",
            |dt, _| {
                let year = dt.date().iso_week_date().year();
                Ok(format!("{:02}", year.rem_euclid(100)))
            },
        )),
        ("kkkk", TokenEntry::new(
            "ISO week year zero padded to four digits - '1999', '2007'",
            |dt, _| {
                Ok(format!("{:04}", dt.date().iso_week_date().year()))
            },
        )),
        ("L", TokenEntry::new(
            "Month number (1-12)",
            |dt, _| Ok(dt.month().to_string()),
        ).aliases(&["M"])),
        ("LL", TokenEntry::new(
            "Month number zero padded to two digits - (01-12)",
            |dt, _| Ok(format!("{:02}", dt.month())),
        ).aliases(&["MM"])),
        ("LLL", TokenEntry::new(
            "Month name truncated to three characters - 'Jan', 'Feb'",
            |dt, locale| {
                Ok(truncate_chars(locale.month_wide(dt.month()), 3))
            },
        ).aliases(&["MMM"])),
        ("LLLL", TokenEntry::new(
            "Month name - 'January', 'February'",
            |dt, locale| Ok(locale.month_wide(dt.month()).to_string()),
        ).aliases(&["MMMM"])),
        ("LLLLL", TokenEntry::new(
            "Month name truncated to one character - 'J', 'F'",
            |dt, locale| Ok(locale.month_narrow(dt.month()).to_string()),
        ).aliases(&["MMMMM"])),
        ("m", TokenEntry::new(
            "Minutes (0-59)",
            |dt, _| Ok(dt.minute().to_string()),
        )),
        ("mm", TokenEntry::new(
            "Minutes zero padded to two digits (00-59)",
            |dt, _| Ok(format!("{:02}", dt.minute())),
        )),
        ("n", TokenEntry::new(
            "Week of year where the week containing January 1st is \
             considered week one (1-53)",
            |dt, _| Ok(week_of_year(dt)?.to_string()),
        )),
        ("nn", TokenEntry::new(
            "Week of year where the week containing January 1st is \
             considered week one, zero padded to two digits (01-53)",
            |dt, _| Ok(format!("{:02}", week_of_year(dt)?)),
        )),
        ("o", TokenEntry::new(
            "Ordinal day of year (1-366)",
            |dt, _| Ok(dt.date().day_of_year().to_string()),
        )),
        ("ooo", TokenEntry::new(
            "Ordinal day of year zero padded to three digits (001-366)",
            |dt, _| Ok(format!("{:03}", dt.date().day_of_year())),
        )),
        ("q", TokenEntry::new(
            "Quarter of year (1-4)",
            |dt, _| Ok(dateutil::year_quarter(dt).to_string()),
        )),
        ("qq", TokenEntry::new(
            "Quarter of year zero padded to two digits (01-04)",
            |dt, _| Ok(format!("{:02}", dateutil::year_quarter(dt))),
        )),
        ("s", TokenEntry::new(
            "Seconds (0-59)",
            |dt, _| Ok(dt.second().to_string()),
        )),
        ("ss", TokenEntry::new(
            "Seconds zero padded to two digits (00-59)",
            |dt, _| Ok(format!("{:02}", dt.second())),
        )),
        ("S", TokenEntry::new(
            "Milliseconds (0-999)",
            |dt, _| Ok((dt.subsec_nanosecond() / 1_000_000).to_string()),
        )),
        ("SSS", TokenEntry::new(
            "Milliseconds zero padded to three digits (000-999)",
            |dt, _| {
                Ok(format!("{:03}", dt.subsec_nanosecond() / 1_000_000))
            },
        )),
        ("t", TokenEntry::new(
            "Localised time - '9:07 AM'",
            |dt, locale| Ok(locale.fmt_time_short(dt)),
        )),
        ("tt", TokenEntry::new(
            "Localised time with seconds - '9:07:53 AM'",
            |dt, locale| Ok(locale.fmt_time_medium(dt)),
        )),
        ("ttt", TokenEntry::new(
            "Localised time with seconds and abbreviated offset name - \
             '9:07:53 AM EDT'",
            |dt, locale| Ok(locale.fmt_time_long(dt)),
        )),
        ("tttt", TokenEntry::new(
            "Localised time with seconds and offset name - '9:07:53 AM \
             Eastern Daylight Time'",
            |dt, locale| Ok(locale.fmt_time_full(dt)),
        )),
        ("T", TokenEntry::new(
            "Localised 24 hour time - '13:07'",
            |dt, _| Ok(format!("{:02}:{:02}", dt.hour(), dt.minute())),
        )),
        ("TT", TokenEntry::new(
            "Localised 24 hour time with seconds - '13:07:04'",
            |dt, _| {
                Ok(format!(
                    "{:02}:{:02}:{:02}",
                    dt.hour(),
                    dt.minute(),
                    dt.second(),
                ))
            },
        )),
        ("TTT", TokenEntry::new(
            "Localised 24 hour time with seconds and abbreviated offset - \
             '13:07:04 CST'",
            |dt, _| {
                Ok(format!(
                    "{}:{:02}:{:02} {}",
                    dt.hour(),
                    dt.minute(),
                    dt.second(),
                    dateutil::tz_abbreviation(dt),
                ))
            },
        )),
        ("W", TokenEntry::new(
            "ISO week (1-53)",
            |dt, _| Ok(dt.date().iso_week_date().week().to_string()),
        )),
        ("WW", TokenEntry::new(
            "ISO week zero padded to two digits (01-53)",
            |dt, _| Ok(format!("{:02}", dt.date().iso_week_date().week())),
        )),
        ("u", TokenEntry::new(
            "Fractional seconds zero padded to three digits (000-999)",
            |dt, _| {
                Ok(format!("{:03}", dt.subsec_nanosecond() / 1_000_000))
            },
        )),
        ("uu", TokenEntry::new(
            "Fractional seconds zero padded to two digits (00-99)",
            |dt, _| {
                Ok(format!("{:02}", dt.subsec_nanosecond() / 10_000_000))
            },
        )),
        ("uuu", TokenEntry::new(
            "Fractional seconds between 0 and 9 (0-9)",
            |dt, _| Ok((dt.subsec_nanosecond() / 100_000_000).to_string()),
        )),
        ("X", TokenEntry::new(
            "Unix timestamp in seconds",
            |dt, _| Ok(dt.timestamp().as_second().to_string()),
        )),
        ("x", TokenEntry::new(
            "Unix timestamp in milliseconds",
            |dt, _| Ok(dt.timestamp().as_millisecond().to_string()),
        )),
        ("y", TokenEntry::new(
            "Year number - '1999', '2007'",
            |dt, _| Ok(dt.year().to_string()),
        )),
        ("yy", TokenEntry::new(
            "Year number truncated to last two digits - '99', '07'",
            |dt, _| Ok(format!("{:02}", dt.year().rem_euclid(100))),
        ).aliases(&["ii"])),
        ("yyyy", TokenEntry::new(
            "Year number zero padded to four digits - '1999', '0007'",
            |dt, _| Ok(format!("{:04}", dt.year())),
        ).aliases(&["iiii"])),
        ("z", TokenEntry::new(
            "IANA canonical time zone string - 'Europe/London'",
            |dt, _| {
                Ok(match dt.time_zone().iana_name() {
                    Some(name) => name.to_string(),
                    None => dateutil::tz_abbreviation(dt),
                })
            },
        )),
        ("Z", TokenEntry::new(
            "Time zone offset shortened to one digit - '+5', '-3'",
            |dt, _| Ok(format!("{:+}", dt.offset().seconds() / 3600)),
        )),
        ("ZZ", TokenEntry::new(
            "Time zone offset - '+05:30', '-03:00'",
            |dt, _| Ok(offset_colon(dt)),
        )),
        ("ZZZ", TokenEntry::new(
            "Time zone offset formatted without the dividing ':' - \
             '+0530', '-0300'",
            |dt, _| Ok(offset_hhmm(dt)),
        )),
        ("ZZZZ", TokenEntry::new(
            "Abbreviated time zone offset - 'GMT', 'CEST', '+0530'",
            |dt, _| Ok(dateutil::tz_abbreviation(dt)),
        )),
    ]
}

/// Week-of-year where week one is the week containing January 1st, taking
/// weeks to begin on Sunday.
fn week_of_year(zdt: &Zoned) -> Result<i64, Error> {
    let midnight = dateutil::day_start(zdt)?;
    let jan1 = dateutil::year_start(&midnight)?;
    let weeks_in_year =
        dateutil::weeks_between(&dateutil::year_end(zdt)?, &jan1) as i64;
    let last_sunday = dateutil::next_weekday(Weekday::Sunday, &jan1)?;
    let diff = dateutil::weeks_between(&midnight, &last_sunday) as i64;
    Ok(diff % weeks_in_year + 1)
}
