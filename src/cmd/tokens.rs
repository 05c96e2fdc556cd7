use datefmt::fmt;

use crate::args;

const USAGE: &str = "\
Show the tokens a formatter supports and what they map to.

USAGE:
    datefmt tokens -F <name>

OPTIONS:
    -F, --formatter <name>    Formatter whose tokens to display
";

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    use lexopt::Arg::*;

    let mut formatter = String::new();
    while let Some(arg) = p.next()? {
        match arg {
            Short('F') | Long("formatter") => formatter = args::value(p)?,
            Short('h') | Long("help") => anyhow::bail!("{}", USAGE.trim()),
            arg => return Err(arg.unexpected().into()),
        }
    }
    print!("{}", fmt::describe(&formatter)?);
    Ok(())
}
