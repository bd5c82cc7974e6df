use getopts::Options;
use super::{utils, Context};
use crate::output::Output;
use crate::shell::ShellError;

/// `cd [path]`, defaulting to `~`.
pub fn cd(ctx: &mut Context, args: &[&str]) -> Result<Output, ShellError> {
    let matches = utils::parse(&Options::new(), args)?;
    let path = matches.free.first().map(String::as_str).unwrap_or("~");
    let now = ctx.fs.change_directory(path)?;
    Ok(Output::text(format!("Changed to: {now}")))
}
