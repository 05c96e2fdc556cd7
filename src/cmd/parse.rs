use anyhow::Context;
use jiff::tz::TimeZone;
use lexopt::ValueExt;

use datefmt::{fmt, locale::Locale};

use crate::args;

const USAGE: &str = "\
Parse a given time in order to convert it or re-emit it in a different
format.

USAGE:
    datefmt parse <input> [<pattern>]

The pattern is the input pattern when the input formatter needs one
(the strftime family, go) and the output pattern when the output formatter
needs one (moment, luxon, strftime, go).

OPTIONS:
    -f, --format <name>       Formatter to re-emit the parsed time with
    -F, --formatter <name>    Formatter to interpret the input with
    -t, --timezone <zone>     Time zone to convert the parsed time to
    -l, --locale <locale>     Locale to use when formatting
";

#[derive(Debug, Default)]
struct Config {
    format: String,
    formatter: String,
    timezone: Option<String>,
    locale: Option<String>,
    input: Option<String>,
    pattern: Option<String>,
}

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    use lexopt::Arg::*;

    let mut config = Config::default();
    while let Some(arg) = p.next()? {
        match arg {
            Short('f') | Long("format") => config.format = args::value(p)?,
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
            Value(value) if config.input.is_none() => {
                config.input = Some(value.string()?);
            }
            Value(value) if config.pattern.is_none() => {
                config.pattern = Some(value.string()?);
            }
            arg => return Err(arg.unexpected().into()),
        }
    }
    let Some(input) = config.input else {
        anyhow::bail!("{}", USAGE.trim());
    };

    let zdt =
        fmt::parse(&config.formatter, &input, config.pattern.as_deref())?;
    let tz = match config.timezone.as_deref() {
        Some(name) => TimeZone::get(name)
            .with_context(|| format!("invalid time zone '{name}'"))?,
        None => TimeZone::system(),
    };
    let zdt = zdt.with_time_zone(tz);
    let locale = match config.locale.as_deref() {
        Some(name) => Locale::new(name)?,
        None => Locale::default(),
    };

    let pattern = config.pattern.as_deref().unwrap_or("");
    let formatted = fmt::format(&zdt, locale, &config.format, pattern)?;
    println!("{formatted}");
    Ok(())
}
