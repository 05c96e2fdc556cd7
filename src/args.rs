/*!
Small helpers for `lexopt`-based argument parsing.
*/

use lexopt::ValueExt;

/// Returns the next positional argument as a command name.
///
/// If there are no more arguments, or if `-h`/`--help` is given, then an
/// error containing the given usage string is returned. `--version` maps
/// to the synthetic command name `version`.
pub fn next_as_command(
    usage: &str,
    p: &mut lexopt::Parser,
) -> anyhow::Result<String> {
    let usage = usage.trim();
    let arg = match p.next()? {
        Some(arg) => arg,
        None => anyhow::bail!("{usage}"),
    };
    match arg {
        lexopt::Arg::Value(name) => Ok(name.string()?),
        lexopt::Arg::Short('h') | lexopt::Arg::Long("help") => {
            anyhow::bail!("{usage}")
        }
        lexopt::Arg::Short('V') | lexopt::Arg::Long("version") => {
            Ok("version".to_string())
        }
        arg => Err(arg.unexpected().into()),
    }
}

/// Returns the value of the option that was just parsed as a string.
pub fn value(p: &mut lexopt::Parser) -> anyhow::Result<String> {
    Ok(p.value()?.string()?)
}

/// Returns the optional value of the option that was just parsed, with a
/// fallback when the option was given bare.
pub fn optional_value(
    p: &mut lexopt::Parser,
    default: &str,
) -> anyhow::Result<String> {
    match p.optional_value() {
        Some(value) => Ok(value.string()?),
        None => Ok(default.to_string()),
    }
}
