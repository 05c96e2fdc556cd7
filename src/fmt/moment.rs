/*!
The moment.js token dictionary.

Tokens are bare words recognized by longest match; literal text is escaped
with square brackets (`[today] YYYY`). This dialect is format-only.
*/

use jiff::{civil::Weekday, Zoned};

use crate::{
    dateutil,
    error::Error,
    fmt::{
        hour12, offset_colon, offset_hhmm, ordinal,
        token::{TokenEntry, TokenMap},
        truncate_chars,
    },
};

pub(crate) fn tokens() -> TokenMap {
    vec![
        ("a", TokenEntry::new(
            "Meridiem - 'am'",
            |dt, _| Ok(if dt.hour() < 12 { "am" } else { "pm" }.to_string()),
        )),
        ("A", TokenEntry::new(
            "Meridiem capitalised - 'AM'",
            |dt, _| Ok(if dt.hour() < 12 { "AM" } else { "PM" }.to_string()),
        )),
        ("M", TokenEntry::new(
            "Month number (1-12)",
            |dt, _| Ok(dt.month().to_string()),
        )),
        ("Mo", TokenEntry::new(
            "Month number suffixed - '1st', '13th', '22nd'",
            |dt, _| Ok(ordinal(i64::from(dt.month()))),
        )),
        ("MM", TokenEntry::new(
            "Month number zero padded to two digits - (01-12)",
            |dt, _| Ok(format!("{:02}", dt.month())),
        )),
        ("MMM", TokenEntry::new(
            "Month name truncated to three characters - 'Jan', 'Feb'",
            |dt, locale| {
                Ok(truncate_chars(locale.month_wide(dt.month()), 3))
            },
        )),
        ("MMMM", TokenEntry::new(
            "Month name - 'January', 'February'",
            |dt, locale| Ok(locale.month_wide(dt.month()).to_string()),
        )),
        ("N", TokenEntry::new(
            "Era name abbreviated - 'BC', 'AD'",
            |dt, _| Ok(if dt.year() < 0 { "BC" } else { "AD" }.to_string()),
        ).aliases(&["NN", "NNN", "NNNNN"])),
        ("NNNN", TokenEntry::new(
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
        ("Q", TokenEntry::new(
            "Quarter of year (1-4)",
            |dt, _| Ok(dateutil::year_quarter(dt).to_string()),
        )),
        ("Qo", TokenEntry::new(
            "Quarter of year suffixed - '1st', '2nd', '3rd', '4th'",
            |dt, _| Ok(ordinal(i64::from(dateutil::year_quarter(dt)))),
        )),
        ("D", TokenEntry::new(
            "Day of month (1-31)",
            |dt, _| Ok(dt.day().to_string()),
        )),
        ("Do", TokenEntry::new(
            "Day of month suffixed (1st-31st)",
            |dt, _| Ok(ordinal(i64::from(dt.day()))),
        )),
        ("DD", TokenEntry::new(
            "Day of month zero padded to two digits (01-31)",
            |dt, _| Ok(format!("{:02}", dt.day())),
        )),
        ("DDD", TokenEntry::new(
            "Day of year (1-366)",
            |dt, _| Ok(dt.date().day_of_year().to_string()),
        )),
        ("DDDo", TokenEntry::new(
            "Day of year suffixed (1st-366th)",
            |dt, _| Ok(ordinal(i64::from(dt.date().day_of_year()))),
        )),
        ("DDDD", TokenEntry::new(
            "Day of year zero padded to three digits (001-366)",
            |dt, _| Ok(format!("{:03}", dt.date().day_of_year())),
        )),
        ("d", TokenEntry::new(
            "Day of week where Sunday = 0 and Saturday = 6 (0-6)",
            |dt, _| Ok(dt.weekday().to_sunday_zero_offset().to_string()),
        )),
        ("do", TokenEntry::new(
            "Day of week suffixed where Sunday = 0th and Saturday = 6th \
             (0th-6th)",
            |dt, _| {
                Ok(ordinal(i64::from(dt.weekday().to_sunday_zero_offset())))
            },
        )),
        ("dd", TokenEntry::new(
            "Day of week name truncated to two characters - 'Su', 'Mo'",
            |dt, locale| Ok(locale.weekday_short(dt.weekday()).to_string()),
        )),
        ("ddd", TokenEntry::new(
            "Day of week name truncated to three characters - 'Sun', 'Mon'",
            |dt, locale| {
                Ok(truncate_chars(locale.weekday_wide(dt.weekday()), 3))
            },
        )),
        ("dddd", TokenEntry::new(
            "Day of week name - 'Sunday', 'Monday'",
            |dt, locale| Ok(locale.weekday_wide(dt.weekday()).to_string()),
        )),
        ("e", TokenEntry::new(
            "Day of week where Sunday = 0 and Saturday = 6 - (0-6)",
            |dt, _| Ok(dt.weekday().to_sunday_zero_offset().to_string()),
        )),
        ("E", TokenEntry::new(
            "Day of week where Monday = 1 and Sunday = 7 - (1-7)",
            |dt, _| Ok(dt.weekday().to_monday_one_offset().to_string()),
        )),
        ("gg", TokenEntry::new(
            "Year of week where the last Sunday of the current week is \
             used, truncated and zero padded to the last two digits - \
             '97', '07'",
            |dt, _| {
                let week_end = dateutil::next_weekday(Weekday::Sunday, dt)?;
                Ok(format!("{:02}", week_end.year().rem_euclid(100)))
            },
        )),
        ("gggg", TokenEntry::new(
            "Year of week where the last Sunday of the current week is \
             used - '1997', '2007'",
            |dt, _| {
                let week_end = dateutil::next_weekday(Weekday::Sunday, dt)?;
                Ok(week_end.year().to_string())
            },
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
        ("k", TokenEntry::new(
            "Hour in 24 hour format starting from 1 (1-24)",
            |dt, _| {
                let hour = if dt.hour() == 0 { 24 } else { dt.hour() as i16 };
                Ok(hour.to_string())
            },
        )),
        ("kk", TokenEntry::new(
            "Hour in 24 hour format starting from 1 zero padded to two \
             digits (01-24)",
            |dt, _| {
                let hour = if dt.hour() == 0 { 24 } else { dt.hour() as i16 };
                Ok(format!("{hour:02}"))
            },
        )),
        ("w", TokenEntry::new(
            "Week of year where the first Sunday before January 1st is \
             considered week one (1-53)",
            |dt, _| Ok(week_of_year(dt)?.to_string()),
        )),
        ("wo", TokenEntry::new(
            "Week of year suffixed where the first Sunday before January \
             1st is considered week one (1st-53rd)",
            |dt, _| Ok(ordinal(week_of_year(dt)?)),
        )),
        ("ww", TokenEntry::new(
            "Week of year where the first Sunday before January 1st is \
             considered week one padded to two digits (01-53)",
            |dt, _| Ok(format!("{:02}", week_of_year(dt)?)),
        )),
        ("W", TokenEntry::new(
            "ISO week of year (1-53)",
            |dt, _| Ok(dt.date().iso_week_date().week().to_string()),
        )),
        ("Wo", TokenEntry::new(
            "ISO week of year suffixed (1st-53rd)",
            |dt, _| {
                Ok(ordinal(i64::from(dt.date().iso_week_date().week())))
            },
        )),
        ("WW", TokenEntry::new(
            "ISO week of year zero padded (01-53)",
            |dt, _| Ok(format!("{:02}", dt.date().iso_week_date().week())),
        )),
        ("Y", TokenEntry::new(
            "Year number - '1999', '2007'",
            |dt, _| Ok(dt.year().to_string()),
        ).aliases(&["y"])),
        ("YY", TokenEntry::new(
            "Year number truncated to last two digits - '99', '07'",
            |dt, _| Ok(format!("{:02}", dt.year().rem_euclid(100))),
        ).aliases(&["GG"])),
        ("YYYY", TokenEntry::new(
            "Year number - '1999', '2007'",
            |dt, _| Ok(dt.year().to_string()),
        ).aliases(&["GGGG"])),
        ("YYYYYY", TokenEntry::new(
            "Year number zero padded to 6 digits - '+001999', '+002007'",
            |dt, _| Ok(format!("{:+07}", dt.year())),
        )),
        ("m", TokenEntry::new(
            "Minutes (0-59)",
            |dt, _| Ok(dt.minute().to_string()),
        )),
        ("mm", TokenEntry::new(
            "Minutes zero padded to two digits (00-59)",
            |dt, _| Ok(format!("{:02}", dt.minute())),
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
            "Fractional seconds to one digit (0-9)",
            |dt, _| Ok((dt.subsec_nanosecond() / 100_000_000).to_string()),
        )),
        ("SS", TokenEntry::new(
            "Fractional seconds to two digits (00-99)",
            |dt, _| {
                Ok(format!("{:02}", dt.subsec_nanosecond() / 10_000_000))
            },
        )),
        ("SSS", TokenEntry::new(
            "Fractional seconds to three digits (000-999)",
            |dt, _| {
                Ok(format!("{:03}", dt.subsec_nanosecond() / 1_000_000))
            },
        )),
        ("SSSS", TokenEntry::new(
            "Fractional seconds to four digits (0000-9999)",
            |dt, _| Ok(format!("{:04}", dt.subsec_nanosecond() / 100_000)),
        )),
        ("SSSSS", TokenEntry::new(
            "Fractional seconds to five digits (00000-99999)",
            |dt, _| Ok(format!("{:05}", dt.subsec_nanosecond() / 10_000)),
        )),
        ("SSSSSS", TokenEntry::new(
            "Fractional seconds to six digits (000000-999999)",
            |dt, _| Ok(format!("{:06}", dt.subsec_nanosecond() / 1_000)),
        )),
        ("SSSSSSS", TokenEntry::new(
            "Fractional seconds to seven digits (0000000-9999999)",
            |dt, _| Ok(format!("{:07}", dt.subsec_nanosecond() / 100)),
        )),
        ("SSSSSSSS", TokenEntry::new(
            "Fractional seconds to eight digits (00000000-99999999)",
            |dt, _| Ok(format!("{:08}", dt.subsec_nanosecond() / 10)),
        )),
        ("SSSSSSSSS", TokenEntry::new(
            "Fractional seconds to nine digits (000000000-999999999)",
            |dt, _| Ok(format!("{:09}", dt.subsec_nanosecond())),
        )),
        ("X", TokenEntry::new(
            "Unix timestamp in seconds",
            |dt, _| Ok(dt.timestamp().as_second().to_string()),
        )),
        ("x", TokenEntry::new(
            "Unix timestamp in milliseconds",
            |dt, _| Ok(dt.timestamp().as_millisecond().to_string()),
        )),
        ("z", TokenEntry::new(
            "Abbreviated time zone offset - 'GMT', 'CEST', '+0530'",
            |dt, _| Ok(dateutil::tz_abbreviation(dt)),
        ).aliases(&["zz"])),
        ("Z", TokenEntry::new(
            "Time zone offset - '+05:30', '-03:00'",
            |dt, _| Ok(offset_colon(dt)),
        )),
        ("ZZ", TokenEntry::new(
            "Time zone offset formatted without the dividing ':' - \
             '+0530', '-0300'",
            |dt, _| Ok(offset_hhmm(dt)),
        )),
    ]
}

/// Week-of-year where week one begins at the Sunday on or before January
/// 1st, wrapped into the year's week count.
fn week_of_year(zdt: &Zoned) -> Result<i64, Error> {
    let midnight = dateutil::day_start(zdt)?;
    let jan1 = dateutil::year_start(&midnight)?;
    let weeks_in_year =
        dateutil::weeks_between(&dateutil::year_end(zdt)?, &jan1) as i64;
    let first_sunday = dateutil::previous_weekday(Weekday::Sunday, &jan1)?;
    let diff = dateutil::weeks_between(&midnight, &first_sunday) as i64;
    Ok(diff % weeks_in_year + 1)
}
