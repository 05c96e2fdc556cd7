/*!
Cross-dialect tests driving the public facade.

The same calendar dates are pushed through every dialect in a few time
zones, checking that spellings of the same thing agree with each other and
with fixed expected strings.
*/

use datefmt::{fmt, locale::Locale};
use jiff::{civil::date, tz::TimeZone, Zoned};

const DATES: &[(i16, i8, i8)] =
    &[(2024, 1, 7), (1997, 1, 4), (1989, 12, 31), (2007, 1, 1)];

const ZONES: &[&str] =
    &["America/Los_Angeles", "Europe/London", "Europe/Paris"];

fn zoned(y: i16, m: i8, d: i8, tz: &str) -> Zoned {
    date(y, m, d)
        .at(0, 0, 0, 0)
        .to_zoned(TimeZone::get(tz).unwrap())
        .unwrap()
}

fn fmt_with(zdt: &Zoned, dialect: &str, pattern: &str) -> String {
    fmt::format(zdt, Locale::EnGb, dialect, pattern).unwrap()
}

#[test]
fn dialects_agree_on_dates() {
    for &(y, m, d) in DATES {
        for tz in ZONES {
            let zdt = zoned(y, m, d, tz);
            let want = format!("{y:04}-{m:02}-{d:02}");
            assert_eq!(fmt_with(&zdt, "strftime", "%Y-%m-%d"), want);
            assert_eq!(fmt_with(&zdt, "moment", "YYYY-MM-DD"), want);
            assert_eq!(fmt_with(&zdt, "luxon", "yyyy-LL-dd"), want);
            assert_eq!(fmt_with(&zdt, "go", "2006-01-02"), want);
        }
    }
}

#[test]
fn dialects_agree_on_weekdays() {
    for &(y, m, d) in DATES {
        for tz in ZONES {
            let zdt = zoned(y, m, d, tz);
            let want = fmt_with(&zdt, "strftime", "%A");
            assert_eq!(fmt_with(&zdt, "moment", "dddd"), want);
            assert_eq!(fmt_with(&zdt, "luxon", "cccc"), want);
            assert_eq!(fmt_with(&zdt, "go", "Monday"), want);
        }
    }
}

#[test]
fn dialects_agree_on_unix_seconds() {
    for &(y, m, d) in DATES {
        for tz in ZONES {
            let zdt = zoned(y, m, d, tz);
            let want = zdt.timestamp().as_second().to_string();
            assert_eq!(fmt_with(&zdt, "unix", ""), want);
            assert_eq!(fmt_with(&zdt, "timestamp", ""), want);
            assert_eq!(fmt_with(&zdt, "ts", ""), want);
            assert_eq!(fmt_with(&zdt, "strftime", "%s"), want);
            assert_eq!(fmt_with(&zdt, "moment", "X"), want);
            assert_eq!(fmt_with(&zdt, "luxon", "X"), want);
        }
    }
}

#[test]
fn offsets_and_abbreviations() {
    let zdt = zoned(2024, 1, 7, "Europe/Paris");
    assert_eq!(fmt_with(&zdt, "strftime", "%z"), "+0100");
    assert_eq!(fmt_with(&zdt, "strftime", "%Z"), "CET");
    assert_eq!(fmt_with(&zdt, "moment", "Z"), "+01:00");
    assert_eq!(fmt_with(&zdt, "moment", "ZZ"), "+0100");
    assert_eq!(fmt_with(&zdt, "luxon", "ZZ"), "+01:00");
    assert_eq!(fmt_with(&zdt, "luxon", "Z"), "+1");

    let zdt = zoned(1989, 12, 31, "America/Los_Angeles");
    assert_eq!(fmt_with(&zdt, "strftime", "%z"), "-0800");
    assert_eq!(fmt_with(&zdt, "strftime", "%Z"), "PST");
    assert_eq!(fmt_with(&zdt, "luxon", "Z"), "-8");

    let zdt = zoned(1989, 12, 31, "Europe/London");
    assert_eq!(fmt_with(&zdt, "strftime", "%z"), "+0000");
    assert_eq!(fmt_with(&zdt, "strftime", "%Z"), "GMT");
}

#[test]
fn alias_spellings_agree() {
    for &(y, m, d) in DATES {
        let zdt = zoned(y, m, d, "Europe/London");
        for (dialect, alias, canonical) in [
            ("moment", "y", "Y"),
            ("moment", "GG", "YY"),
            ("moment", "GGGG", "YYYY"),
            ("moment", "zz", "z"),
            ("moment", "NNNNN", "N"),
            ("luxon", "E", "c"),
            ("luxon", "EEEE", "cccc"),
            ("luxon", "MMM", "LLL"),
            ("luxon", "MMMMM", "LLLLL"),
            ("luxon", "ii", "yy"),
            ("luxon", "iiii", "yyyy"),
            ("strftime", "%h", "%b"),
        ] {
            assert_eq!(
                fmt_with(&zdt, dialect, alias),
                fmt_with(&zdt, dialect, canonical),
                "{dialect}: {alias} vs {canonical}",
            );
        }
    }
}

#[test]
fn literal_text_survives() {
    let zdt = zoned(1997, 1, 4, "Europe/London");
    // Runes that spell no token pass through untouched.
    assert_eq!(fmt_with(&zdt, "strftime", "(=^.^=)"), "(=^.^=)");
    assert_eq!(fmt_with(&zdt, "moment", "&? !"), "&? !");
    // Inside an escape region, even token spellings are literal.
    assert_eq!(
        fmt_with(&zdt, "moment", "[YYYY-MM-DD]"),
        "YYYY-MM-DD",
    );
    assert_eq!(fmt_with(&zdt, "luxon", "'yyyy-LL-dd'"), "yyyy-LL-dd");
}

#[test]
fn strftime_round_trips_declared_subset() {
    // The declared parse subset: %d, %e, %m, %y (and %% literals).
    for &(y, m, d) in DATES {
        let zdt = zoned(y, m, d, "Europe/London");
        for pattern in ["%d/%m/%y", "%e-%m-%y", "%d%m%y", "%y%%%m%%%d"] {
            let rendered = fmt_with(&zdt, "strftime", pattern);
            let parsed =
                fmt::parse("strftime", &rendered, Some(pattern)).unwrap();
            assert_eq!(
                parsed.date(),
                zdt.date(),
                "pattern {pattern:?} via {rendered:?}",
            );
        }
    }
}

#[test]
fn two_digit_year_pivot() {
    let parsed = fmt::parse("strftime", "04/01/97", Some("%d/%m/%y")).unwrap();
    assert_eq!(parsed.date(), date(1997, 1, 4));
    let parsed = fmt::parse("strftime", "04/01/04", Some("%d/%m/%y")).unwrap();
    assert_eq!(parsed.date(), date(2004, 1, 4));
}

#[test]
fn parse_formats_back_out() {
    // Parse an RFC 3339 string and re-emit it through other dialects, as
    // `datefmt parse -f` does.
    let zdt = fmt::parse("rfc", "1997-01-04T00:00:00Z", None).unwrap();
    assert_eq!(fmt_with(&zdt, "unix", ""), "852336000");
    assert_eq!(fmt_with(&zdt, "iso", ""), "1997-01-04T00:00:00Z");

    let zdt = fmt::parse("unix", "852336000", None).unwrap();
    assert_eq!(fmt_with(&zdt, "rfc", ""), "1997-01-04T00:00:00Z");

    // Full instant round trip through the Go default rendering.
    let zdt = zoned(2007, 1, 1, "Europe/Paris");
    let rendered =
        fmt_with(&zdt, "go", "2006-01-02 15:04:05.999999999 -0700 MST");
    assert_eq!(rendered, "2007-01-01 00:00:00 +0100 CET");
    let parsed = fmt::parse("", &rendered, None).unwrap();
    assert_eq!(parsed.timestamp(), zdt.timestamp());
}

#[test]
fn localised_output() {
    let zdt = zoned(2024, 1, 7, "Europe/Paris");
    let f = |locale: &str, dialect, pattern| {
        fmt::format(
            &zdt,
            Locale::new(locale).unwrap(),
            dialect,
            pattern,
        )
        .unwrap()
    };
    assert_eq!(f("fr", "moment", "dddd"), "dimanche");
    assert_eq!(f("fr", "moment", "MMMM"), "janvier");
    assert_eq!(f("fr", "moment", "MMM"), "jan");
    assert_eq!(f("es", "luxon", "cccc"), "domingo");
    assert_eq!(f("es", "luxon", "ccccc"), "D");
    assert_eq!(f("en_GB", "strftime", "%x"), "07/01/2024");
    assert_eq!(f("en_US", "strftime", "%x"), "1/7/24");
    // The Go reference components are English by definition.
    assert_eq!(f("fr", "go", "Monday January"), "Sunday January");
}

#[test]
fn describe_listings_are_byte_identical_across_runs() {
    for dialect in ["moment", "momentjs", "luxon", "strftime", "c", "go"] {
        let a = fmt::describe(dialect).unwrap();
        let b = fmt::describe(dialect).unwrap();
        assert_eq!(a, b, "dialect {dialect}");
        assert!(!a.is_empty());
    }
    // Aliased names resolve to the same listing.
    assert_eq!(
        fmt::describe("moment").unwrap(),
        fmt::describe("momentjs").unwrap(),
    );
    assert_eq!(
        fmt::describe("strftime").unwrap(),
        fmt::describe("go:strptime").unwrap(),
    );
}
