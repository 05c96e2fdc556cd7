use lexopt::ValueExt;

use datefmt::duration;

use crate::args;

const USAGE: &str = "\
Parse and convert human readable durations into different units and
formats.

USAGE:
    datefmt duration <expression>

OPTIONS:
    -o, --output <unit>      Output unit to display the duration as
                             (default: ms)
    -s, --separator [<sep>]  Insert a digit group separator in the output
                             ('_' when given bare)
    -i, --int                Round the result down to an integer
";

#[derive(Debug)]
struct Config {
    output: String,
    separator: Option<String>,
    int: bool,
    expr: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            output: "ms".to_string(),
            separator: None,
            int: false,
            expr: None,
        }
    }
}

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    use lexopt::Arg::*;

    let mut config = Config::default();
    while let Some(arg) = p.next()? {
        match arg {
            Short('o') | Long("output") => config.output = args::value(p)?,
            Short('s') | Long("separator") => {
                config.separator = Some(args::optional_value(p, "_")?);
            }
            Short('i') | Long("int") => config.int = true,
            Short('h') | Long("help") => anyhow::bail!("{}", USAGE.trim()),
            Value(value) if config.expr.is_none() => {
                config.expr = Some(value.string()?);
            }
            arg => return Err(arg.unexpected().into()),
        }
    }
    let Some(expr) = config.expr else {
        anyhow::bail!("{}", USAGE.trim());
    };

    let nanos = duration::parse(expr.trim())?;
    let value = duration::convert(nanos, &config.output, config.int)?;
    match config.separator.as_deref() {
        Some(separator) => {
            println!("{}", duration::format_with_separator(value, separator))
        }
        None => println!("{value}"),
    }
    Ok(())
}
