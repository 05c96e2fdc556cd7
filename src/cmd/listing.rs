use datefmt::fmt;

const FORMATTER_USAGE: &str = "\
List all formatters available to use with any command that accepts a
formatter argument.

USAGE:
    datefmt formatter
";

const PARSER_USAGE: &str = "\
List all parsers available to use with any command that accepts a parser
argument.

USAGE:
    datefmt parser
";

pub fn run_formatters(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    expect_no_args(p, FORMATTER_USAGE)?;
    print!("{}", fmt::list_formatters());
    Ok(())
}

pub fn run_parsers(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    expect_no_args(p, PARSER_USAGE)?;
    print!("{}", fmt::list_parsers());
    Ok(())
}

fn expect_no_args(p: &mut lexopt::Parser, usage: &str) -> anyhow::Result<()> {
    use lexopt::Arg::*;

    while let Some(arg) = p.next()? {
        match arg {
            Short('h') | Long("help") => anyhow::bail!("{}", usage.trim()),
            arg => return Err(arg.unexpected().into()),
        }
    }
    Ok(())
}
