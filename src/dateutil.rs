/*!
Small calendar helpers used by the token dictionaries.

These are pure functions of the instant they're given. They all preserve the
instant's time zone, so "midnight" always means midnight in the zone the
caller is already working in.
*/

use jiff::{civil::Weekday, Span, Zoned};

use crate::error::Error;

/// Returns midnight of January 1st for the year of the given instant.
pub fn year_start(zdt: &Zoned) -> Result<Zoned, Error> {
    let start = jiff::civil::date(zdt.year(), 1, 1).at(0, 0, 0, 0);
    Ok(start.to_zoned(zdt.time_zone().clone())?)
}

/// Returns the last representable nanosecond of December 31st for the year
/// of the given instant.
pub fn year_end(zdt: &Zoned) -> Result<Zoned, Error> {
    let end = jiff::civil::date(zdt.year(), 12, 31).at(23, 59, 59, 999_999_999);
    Ok(end.to_zoned(zdt.time_zone().clone())?)
}

/// Returns midnight of the given instant's calendar day.
pub fn day_start(zdt: &Zoned) -> Result<Zoned, Error> {
    let start = zdt.date().at(0, 0, 0, 0);
    Ok(start.to_zoned(zdt.time_zone().clone())?)
}

/// Returns the nearest instant on or after the one given whose weekday is
/// `weekday`, preserving the time of day.
///
/// When the given instant already falls on `weekday`, it is returned
/// unchanged.
pub fn next_weekday(weekday: Weekday, zdt: &Zoned) -> Result<Zoned, Error> {
    let current = zdt.weekday().to_sunday_zero_offset();
    let target = weekday.to_sunday_zero_offset();
    let days = i64::from((7 - current + target).rem_euclid(7));
    if days == 0 {
        return Ok(zdt.clone());
    }
    step_days(zdt, days)
}

/// Returns the nearest instant on or before the one given whose weekday is
/// `weekday`, preserving the time of day.
///
/// When the given instant already falls on `weekday`, it is returned
/// unchanged.
pub fn previous_weekday(
    weekday: Weekday,
    zdt: &Zoned,
) -> Result<Zoned, Error> {
    let current = zdt.weekday().to_sunday_zero_offset();
    let target = weekday.to_sunday_zero_offset();
    let days = i64::from((current - target).rem_euclid(7));
    if days == 0 {
        return Ok(zdt.clone());
    }
    step_days(zdt, -days)
}

/// Quarter of the given instant's year, in the range `1..=4`.
///
/// The quarter is derived proportionally from the day of the year, with the
/// final day clamped into the fourth quarter.
pub fn year_quarter(zdt: &Zoned) -> i8 {
    let days_in_year = f64::from(zdt.date().days_in_year());
    let mut quarter_zeroed =
        f64::from(zdt.date().day_of_year()) / days_in_year * 4.0;
    if quarter_zeroed == 4.0 {
        quarter_zeroed = 3.0;
    }
    (quarter_zeroed + 1.0) as i8
}

/// The (possibly fractional) number of weeks from `earlier` to `later`.
///
/// Measured in real elapsed time, so a DST transition inside the window
/// shifts the fraction, exactly like dividing wall-clock hours by 24 and 7.
pub(crate) fn weeks_between(later: &Zoned, earlier: &Zoned) -> f64 {
    let seconds =
        later.timestamp().as_second() - earlier.timestamp().as_second();
    seconds as f64 / 3600.0 / 24.0 / 7.0
}

/// The abbreviation of the instant's time zone at that instant, e.g., `GMT`
/// or `CEST`. Fixed-offset zones render as their offset.
pub(crate) fn tz_abbreviation(zdt: &Zoned) -> String {
    let info = zdt.time_zone().to_offset_info(zdt.timestamp());
    info.abbreviation().to_string()
}

/// Moves the instant by whole calendar days, preserving the time of day.
fn step_days(zdt: &Zoned, days: i64) -> Result<Zoned, Error> {
    let date = zdt.date().checked_add(Span::new().days(days))?;
    let dt = jiff::civil::DateTime::from_parts(date, zdt.time());
    Ok(dt.to_zoned(zdt.time_zone().clone())?)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    use super::*;

    fn utc(y: i16, m: i8, d: i8) -> Zoned {
        date(y, m, d).at(12, 30, 0, 0).to_zoned(TimeZone::UTC).unwrap()
    }

    #[test]
    fn year_bounds() {
        let zdt = utc(1997, 6, 15);
        assert_eq!(
            year_start(&zdt).unwrap().to_string(),
            "1997-01-01T00:00:00+00:00[UTC]",
        );
        assert_eq!(
            year_end(&zdt).unwrap().to_string(),
            "1997-12-31T23:59:59.999999999+00:00[UTC]",
        );
        assert_eq!(
            day_start(&zdt).unwrap().to_string(),
            "1997-06-15T00:00:00+00:00[UTC]",
        );
    }

    #[test]
    fn weekday_stepping() {
        // 2024-01-07 is a Sunday.
        let sunday = utc(2024, 1, 7);
        assert_eq!(next_weekday(Weekday::Sunday, &sunday).unwrap(), sunday);
        assert_eq!(
            previous_weekday(Weekday::Sunday, &sunday).unwrap(),
            sunday,
        );
        assert_eq!(
            next_weekday(Weekday::Wednesday, &sunday).unwrap().date(),
            date(2024, 1, 10),
        );
        assert_eq!(
            previous_weekday(Weekday::Wednesday, &sunday).unwrap().date(),
            date(2024, 1, 3),
        );
        // The time of day rides along.
        assert_eq!(
            next_weekday(Weekday::Friday, &sunday).unwrap().hour(),
            12,
        );
    }

    #[test]
    fn quarters() {
        assert_eq!(year_quarter(&utc(2024, 1, 7)), 1);
        assert_eq!(year_quarter(&utc(2024, 5, 1)), 2);
        assert_eq!(year_quarter(&utc(2024, 8, 1)), 3);
        assert_eq!(year_quarter(&utc(2024, 11, 1)), 4);
        // The final day stays in the fourth quarter.
        assert_eq!(year_quarter(&utc(2024, 12, 31)), 4);
        assert_eq!(year_quarter(&utc(2023, 12, 31)), 4);
    }
}
