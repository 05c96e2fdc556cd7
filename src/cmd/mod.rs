use crate::args;

mod duration;
mod listing;
mod now;
mod parse;
mod tokens;

const USAGE: &str = "\
A simple utility for working with times, dates and durations.

USAGE:
    datefmt <command> ...

COMMANDS:
    now        Print the current time, optionally formatted
    parse      Parse a given time and re-emit it
    duration   Parse and convert human readable durations
    tokens     Show the token dictionary of a formatter
    formatter  List available formatters and their aliases
    parser     List available parsers and their aliases
";

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let cmd = args::next_as_command(USAGE, p)?;
    match &*cmd {
        "now" => now::run(p),
        "parse" => parse::run(p),
        "duration" | "dur" => duration::run(p),
        "tokens" => tokens::run(p),
        "formatter" => listing::run_formatters(p),
        "parser" => listing::run_parsers(p),
        "version" => {
            println!("datefmt {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        unk => anyhow::bail!("unrecognized command '{unk}'"),
    }
}
