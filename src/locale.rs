/*!
The locale translator capability consumed by the format dialects.

A [`Locale`] answers the questions a token dictionary can ask of it: day and
month names in several widths, and short/medium/long/full date and time
presentations. The data here is a small static catalogue covering the
locales this tool registers; it is an input to the dialect engine, not an
attempt at a full CLDR implementation.
*/

use jiff::{civil::Weekday, Zoned};

use crate::{
    dateutil,
    error::{err, Error},
};

/// A locale translator.
///
/// The default locale is `en_GB`, which is also what every locale-blind
/// token dictionary entry assumes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Locale {
    /// English (United Kingdom). The default.
    #[default]
    EnGb,
    /// English (United States).
    EnUs,
    /// Spanish.
    Es,
    /// Spanish (United States).
    EsUs,
    /// French.
    Fr,
}

impl Locale {
    /// Look up a locale by identifier.
    ///
    /// Aliases are accepted for the English locales, e.g., `en`, `us`, `gb`
    /// and `uk`. Lookup is case insensitive.
    ///
    /// # Errors
    ///
    /// This returns an error when the identifier is not in the catalogue.
    pub fn new(name: &str) -> Result<Locale, Error> {
        match &*name.to_lowercase() {
            "en_gb" | "gb" | "uk" => Ok(Locale::EnGb),
            "en_us" | "en" | "us" => Ok(Locale::EnUs),
            "es" => Ok(Locale::Es),
            "es_us" => Ok(Locale::EsUs),
            "fr" => Ok(Locale::Fr),
            _ => Err(err!("unsupported locale: '{name}'")),
        }
    }

    /// Returns the canonical identifier for this locale.
    pub fn name(self) -> &'static str {
        match self {
            Locale::EnGb => "en_GB",
            Locale::EnUs => "en_US",
            Locale::Es => "es",
            Locale::EsUs => "es_US",
            Locale::Fr => "fr",
        }
    }

    /// The full month name, with `month` in the range `1..=12`.
    pub fn month_wide(self, month: i8) -> &'static str {
        self.months_wide()[usize::from(month as u8) - 1]
    }

    /// The abbreviated month name, with `month` in the range `1..=12`.
    pub fn month_abbreviated(self, month: i8) -> &'static str {
        self.months_abbreviated()[usize::from(month as u8) - 1]
    }

    /// The month name shortened to one character (sometimes ambiguous, as
    /// in CLDR), with `month` in the range `1..=12`.
    pub fn month_narrow(self, month: i8) -> &'static str {
        self.months_narrow()[usize::from(month as u8) - 1]
    }

    /// The full weekday name.
    pub fn weekday_wide(self, weekday: Weekday) -> &'static str {
        self.weekdays_wide()[weekday_index(weekday)]
    }

    /// The abbreviated (usually three character) weekday name.
    pub fn weekday_abbreviated(self, weekday: Weekday) -> &'static str {
        self.weekdays_abbreviated()[weekday_index(weekday)]
    }

    /// The weekday name shortened to two characters.
    pub fn weekday_short(self, weekday: Weekday) -> &'static str {
        self.weekdays_short()[weekday_index(weekday)]
    }

    /// The weekday name shortened to one character.
    pub fn weekday_narrow(self, weekday: Weekday) -> &'static str {
        self.weekdays_narrow()[weekday_index(weekday)]
    }

    /// The meridiem label for this locale.
    pub fn meridiem(self, pm: bool) -> &'static str {
        match self {
            Locale::EnGb | Locale::EnUs => {
                if pm {
                    "pm"
                } else {
                    "am"
                }
            }
            Locale::Es | Locale::EsUs => {
                if pm {
                    "p. m."
                } else {
                    "a. m."
                }
            }
            Locale::Fr => {
                if pm {
                    "PM"
                } else {
                    "AM"
                }
            }
        }
    }

    /// The numeric short date presentation, e.g., `07/01/2024` for `en_GB`.
    pub fn fmt_date_short(self, zdt: &Zoned) -> String {
        let (y, m, d) = (zdt.year(), zdt.month(), zdt.day());
        match self {
            Locale::EnGb => format!("{d:02}/{m:02}/{y}"),
            Locale::EnUs | Locale::EsUs => {
                format!("{m}/{d}/{:02}", y.rem_euclid(100))
            }
            Locale::Es => format!("{d}/{m}/{:02}", y.rem_euclid(100)),
            Locale::Fr => format!("{d:02}/{m:02}/{y}"),
        }
    }

    /// The medium date presentation, e.g., `7 Jan 2024` for `en_GB`.
    pub fn fmt_date_medium(self, zdt: &Zoned) -> String {
        let (y, d) = (zdt.year(), zdt.day());
        let mon = self.month_abbreviated(zdt.month());
        match self {
            Locale::EnGb => format!("{d} {mon} {y}"),
            Locale::EnUs => format!("{mon} {d}, {y}"),
            Locale::Es | Locale::EsUs => format!("{d} {mon} {y}"),
            Locale::Fr => format!("{d} {mon} {y}"),
        }
    }

    /// The long date presentation, e.g., `7 January 2024` for `en_GB`.
    pub fn fmt_date_long(self, zdt: &Zoned) -> String {
        let (y, d) = (zdt.year(), zdt.day());
        let mon = self.month_wide(zdt.month());
        match self {
            Locale::EnGb => format!("{d} {mon} {y}"),
            Locale::EnUs => format!("{mon} {d}, {y}"),
            Locale::Es | Locale::EsUs => format!("{d} de {mon} de {y}"),
            Locale::Fr => format!("{d} {mon} {y}"),
        }
    }

    /// The full date presentation, including the weekday name, e.g.,
    /// `Sunday, 7 January 2024` for `en_GB`.
    pub fn fmt_date_full(self, zdt: &Zoned) -> String {
        let (y, d) = (zdt.year(), zdt.day());
        let mon = self.month_wide(zdt.month());
        let wd = self.weekday_wide(zdt.weekday());
        match self {
            Locale::EnGb => format!("{wd}, {d} {mon} {y}"),
            Locale::EnUs => format!("{wd}, {mon} {d}, {y}"),
            Locale::Es | Locale::EsUs => format!("{wd}, {d} de {mon} de {y}"),
            Locale::Fr => format!("{wd} {d} {mon} {y}"),
        }
    }

    /// The short time presentation, e.g., `00:09` for `en_GB` and
    /// `12:09 am` for `en_US`.
    pub fn fmt_time_short(self, zdt: &Zoned) -> String {
        let (hour, minute) = (zdt.hour(), zdt.minute());
        match self {
            Locale::EnGb | Locale::Fr => format!("{hour:02}:{minute:02}"),
            Locale::EnUs | Locale::EsUs => {
                let meridiem = self.meridiem(hour >= 12);
                format!("{}:{minute:02} {meridiem}", hour_12(hour))
            }
            Locale::Es => format!("{hour}:{minute:02}"),
        }
    }

    /// The medium time presentation, adding seconds to the short one.
    pub fn fmt_time_medium(self, zdt: &Zoned) -> String {
        let (hour, minute, second) = (zdt.hour(), zdt.minute(), zdt.second());
        match self {
            Locale::EnGb | Locale::Fr => {
                format!("{hour:02}:{minute:02}:{second:02}")
            }
            Locale::EnUs | Locale::EsUs => {
                let meridiem = self.meridiem(hour >= 12);
                format!(
                    "{}:{minute:02}:{second:02} {meridiem}",
                    hour_12(hour)
                )
            }
            Locale::Es => format!("{hour}:{minute:02}:{second:02}"),
        }
    }

    /// The long time presentation, adding the time zone abbreviation to the
    /// medium one.
    pub fn fmt_time_long(self, zdt: &Zoned) -> String {
        format!("{} {}", self.fmt_time_medium(zdt), dateutil::tz_abbreviation(zdt))
    }

    /// The full time presentation.
    ///
    /// CLDR would use the expanded zone name here ("Central European
    /// Time"); this catalogue only carries abbreviations, so the full form
    /// matches the long one.
    pub fn fmt_time_full(self, zdt: &Zoned) -> String {
        self.fmt_time_long(zdt)
    }

    fn months_wide(self) -> &'static [&'static str; 12] {
        match self {
            Locale::EnGb | Locale::EnUs => &MONTHS_EN,
            Locale::Es | Locale::EsUs => &MONTHS_ES,
            Locale::Fr => &MONTHS_FR,
        }
    }

    fn months_abbreviated(self) -> &'static [&'static str; 12] {
        match self {
            Locale::EnGb | Locale::EnUs => &MONTHS_ABBREV_EN,
            Locale::Es | Locale::EsUs => &MONTHS_ABBREV_ES,
            Locale::Fr => &MONTHS_ABBREV_FR,
        }
    }

    fn months_narrow(self) -> &'static [&'static str; 12] {
        match self {
            Locale::EnGb | Locale::EnUs => &MONTHS_NARROW_EN,
            Locale::Es | Locale::EsUs => &MONTHS_NARROW_ES,
            Locale::Fr => &MONTHS_NARROW_FR,
        }
    }

    fn weekdays_wide(self) -> &'static [&'static str; 7] {
        match self {
            Locale::EnGb | Locale::EnUs => &WEEKDAYS_EN,
            Locale::Es | Locale::EsUs => &WEEKDAYS_ES,
            Locale::Fr => &WEEKDAYS_FR,
        }
    }

    fn weekdays_abbreviated(self) -> &'static [&'static str; 7] {
        match self {
            Locale::EnGb | Locale::EnUs => &WEEKDAYS_ABBREV_EN,
            Locale::Es | Locale::EsUs => &WEEKDAYS_ABBREV_ES,
            Locale::Fr => &WEEKDAYS_ABBREV_FR,
        }
    }

    fn weekdays_short(self) -> &'static [&'static str; 7] {
        match self {
            Locale::EnGb | Locale::EnUs => &WEEKDAYS_SHORT_EN,
            Locale::Es | Locale::EsUs => &WEEKDAYS_SHORT_ES,
            Locale::Fr => &WEEKDAYS_SHORT_FR,
        }
    }

    fn weekdays_narrow(self) -> &'static [&'static str; 7] {
        match self {
            Locale::EnGb | Locale::EnUs => &WEEKDAYS_NARROW_EN,
            Locale::Es | Locale::EsUs => &WEEKDAYS_NARROW_ES,
            Locale::Fr => &WEEKDAYS_NARROW_FR,
        }
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts a 12-hour clock value from a 24-hour one, mapping 0 to 12.
fn hour_12(hour: i8) -> i8 {
    let hour = hour % 12;
    if hour == 0 {
        12
    } else {
        hour
    }
}

/// Weekday table index, Sunday first.
fn weekday_index(weekday: Weekday) -> usize {
    usize::from(weekday.to_sunday_zero_offset() as u8)
}

static MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];
static MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
    "septiembre", "octubre", "noviembre", "diciembre",
];
static MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
    "septembre", "octobre", "novembre", "décembre",
];

static MONTHS_ABBREV_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct",
    "Nov", "Dec",
];
static MONTHS_ABBREV_ES: [&str; 12] = [
    "ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sept.",
    "oct.", "nov.", "dic.",
];
static MONTHS_ABBREV_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août",
    "sept.", "oct.", "nov.", "déc.",
];

static MONTHS_NARROW_EN: [&str; 12] =
    ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
static MONTHS_NARROW_ES: [&str; 12] =
    ["E", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
static MONTHS_NARROW_FR: [&str; 12] =
    ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

static WEEKDAYS_EN: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
    "Saturday",
];
static WEEKDAYS_ES: [&str; 7] = [
    "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
];
static WEEKDAYS_FR: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

static WEEKDAYS_ABBREV_EN: [&str; 7] =
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
static WEEKDAYS_ABBREV_ES: [&str; 7] =
    ["dom.", "lun.", "mar.", "mié.", "jue.", "vie.", "sáb."];
static WEEKDAYS_ABBREV_FR: [&str; 7] =
    ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."];

static WEEKDAYS_SHORT_EN: [&str; 7] =
    ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
static WEEKDAYS_SHORT_ES: [&str; 7] =
    ["DO", "LU", "MA", "MI", "JU", "VI", "SA"];
static WEEKDAYS_SHORT_FR: [&str; 7] =
    ["di", "lu", "ma", "me", "je", "ve", "sa"];

static WEEKDAYS_NARROW_EN: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
static WEEKDAYS_NARROW_ES: [&str; 7] = ["D", "L", "M", "X", "J", "V", "S"];
static WEEKDAYS_NARROW_FR: [&str; 7] = ["D", "L", "M", "M", "J", "V", "S"];

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn zoned(y: i16, m: i8, d: i8) -> Zoned {
        date(y, m, d)
            .at(0, 9, 53, 0)
            .to_zoned(jiff::tz::TimeZone::UTC)
            .unwrap()
    }

    #[test]
    fn lookup_aliases() {
        assert_eq!(Locale::new("UK").unwrap(), Locale::EnGb);
        assert_eq!(Locale::new("en").unwrap(), Locale::EnUs);
        assert_eq!(Locale::new("es_US").unwrap(), Locale::EsUs);
        assert_eq!(
            Locale::new("tlh").unwrap_err().to_string(),
            "unsupported locale: 'tlh'",
        );
    }

    #[test]
    fn date_presentations() {
        let zdt = zoned(2024, 1, 7);
        insta::assert_snapshot!(
            Locale::EnGb.fmt_date_short(&zdt), @"07/01/2024");
        insta::assert_snapshot!(
            Locale::EnUs.fmt_date_short(&zdt), @"1/7/24");
        insta::assert_snapshot!(
            Locale::EnGb.fmt_date_medium(&zdt), @"7 Jan 2024");
        insta::assert_snapshot!(
            Locale::EnGb.fmt_date_full(&zdt), @"Sunday, 7 January 2024");
        insta::assert_snapshot!(
            Locale::Fr.fmt_date_full(&zdt), @"dimanche 7 janvier 2024");
        insta::assert_snapshot!(
            Locale::Es.fmt_date_long(&zdt), @"7 de enero de 2024");
    }

    #[test]
    fn time_presentations() {
        let zdt = zoned(2024, 1, 7);
        insta::assert_snapshot!(Locale::EnGb.fmt_time_short(&zdt), @"00:09");
        insta::assert_snapshot!(
            Locale::EnGb.fmt_time_medium(&zdt), @"00:09:53");
        insta::assert_snapshot!(
            Locale::EnUs.fmt_time_medium(&zdt), @"12:09:53 am");
        insta::assert_snapshot!(Locale::Es.fmt_time_short(&zdt), @"0:09");
    }

    #[test]
    fn weekday_tables_are_sunday_first() {
        assert_eq!(Locale::EnGb.weekday_wide(Weekday::Sunday), "Sunday");
        assert_eq!(Locale::EnGb.weekday_short(Weekday::Monday), "Mo");
        assert_eq!(Locale::Es.weekday_narrow(Weekday::Wednesday), "X");
    }
}
