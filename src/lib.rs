/*!
A library (and command line utility) for formatting and parsing datetimes
across incompatible format dialects.

Five dialects coexist behind one interface: C's `strftime` conversions
(`%Y-%m-%d`), Go's reference time (`2006-01-02`), moment.js tokens
(`YYYY-MM-DD`), Luxon tokens (`yyyy-LL-dd`) and the atomic
`unix`/`rfc3339`/`iso8601` forms. Each dialect is nothing but a token
dictionary; recognition, escaping and prefix handling are shared machinery.
Instants, time zones and the clock come from [`jiff`]; localized names come
from the small built-in [`locale`] catalogue.

# Example: formatting

```
use datefmt::{fmt, locale::Locale};

let zdt = jiff::civil::date(2024, 1, 7)
    .at(0, 0, 0, 0)
    .to_zoned(jiff::tz::TimeZone::UTC)?;

let out = fmt::format(&zdt, Locale::EnGb, "strftime", "%Y-%m-%d")?;
assert_eq!(out, "2024-01-07");
let out = fmt::format(&zdt, Locale::EnGb, "moment", "dddd Do MMMM")?;
assert_eq!(out, "Sunday 7th January");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: parsing

```
use datefmt::fmt;

let zdt = fmt::parse("strftime", "04/01/97", Some("%d/%m/%y"))?;
assert_eq!(zdt.date(), jiff::civil::date(1997, 1, 4));

let zdt = fmt::parse("unix", "1704582000", None)?;
assert_eq!(zdt.timestamp().as_second(), 1704582000);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Example: durations

```
use datefmt::duration;

let nanos = duration::parse("1h30m500ms")?;
assert_eq!(duration::convert(nanos, "ms", false)?, 5_400_500.0);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod logging;

pub mod dateutil;
pub mod duration;
mod error;
pub mod fmt;
pub mod locale;

pub use crate::error::Error;
