use getopts::{Matches, Options};
use crate::shell::ShellError;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Parse `args` against `opts`, reporting bad flags as a shell error.
pub fn parse(opts: &Options, args: &[&str]) -> Result<Matches, ShellError> {
    Ok(opts.parse(args)?)
}

/// First free argument, or `MissingArgument(what)`.
pub fn required<'m>(matches: &'m Matches, what: &'static str) -> Result<&'m str, ShellError> {
    matches
        .free
        .first()
        .map(String::as_str)
        .ok_or(ShellError::MissingArgument(what))
}

/// First argument taken as-is, for commands without flags. Names that start
/// with `-` stay names.
pub fn operand<'a>(args: &[&'a str], what: &'static str) -> Result<&'a str, ShellError> {
    args.first().copied().ok_or(ShellError::MissingArgument(what))
}

/// Human-readable size: the unit is `floor(log_1024(n))`, the value keeps one
/// decimal unless it is whole.
pub fn format_size(n: usize) -> String {
    if n == 0 {
        return String::from("0 B");
    }
    let exp = ((n as u64).ilog(1024) as usize).min(UNITS.len() - 1);
    let value = n as f64 / 1024f64.powi(exp as i32);
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[exp])
    } else {
        format!("{:.1} {}", rounded, UNITS[exp])
    }
}
