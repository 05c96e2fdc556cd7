use anyhow::Context;
use jiff::{tz::TimeZone, Zoned};
use lexopt::ValueExt;

use datefmt::{fmt, locale::Locale};

use crate::args;

const USAGE: &str = "\
Convert, format and print the current time.

USAGE:
    datefmt now [<pattern>]

OPTIONS:
    -F, --formatter <name>    Formatter to render the current time with
    -t, --timezone <zone>     Time zone to convert the time to
    -l, --locale <locale>     Locale to use when formatting
";

#[derive(Debug, Default)]
struct Config {
    formatter: String,
    timezone: Option<String>,
    locale: Option<String>,
    pattern: Option<String>,
}

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    use lexopt::Arg::*;

    let mut config = Config::default();
    while let Some(arg) = p.next()? {
        match arg {
            Short('F') | Long("formatter") => {
                config.formatter = args::value(p)?;
            }
            Short('t') | Long("timezone") => {
                config.timezone = Some(args::value(p)?);
            }
            Short('l') | Long("locale") => {
                config.locale = Some(args::value(p)?);
            }
            Short('h') | Long("help") => anyhow::bail!("{}", USAGE.trim()),
            Value(value) if config.pattern.is_none() => {
                config.pattern = Some(value.string()?);
            }
            arg => return Err(arg.unexpected().into()),
        }
    }

    let mut now = Zoned::now();
    if let Some(name) = config.timezone.as_deref() {
        let tz = TimeZone::get(name)
            .with_context(|| format!("invalid time zone '{name}'"))?;
        log::debug!("converting current time to time zone {name}");
        now = now.with_time_zone(tz);
    }
    let locale = match config.locale.as_deref() {
        Some(name) => Locale::new(name)?,
        None => Locale::default(),
    };

    let pattern = config.pattern.as_deref().unwrap_or("");
    let formatted = fmt::format(&now, locale, &config.formatter, pattern)?;
    println!("{formatted}");
    Ok(())
}
