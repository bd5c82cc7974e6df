use super::{utils, Context};
use crate::output::Output;
use crate::shell::ShellError;

/// `touch <file>`: new empty file in the current directory.
pub fn touch(ctx: &mut Context, args: &[&str]) -> Result<Output, ShellError> {
    let name = utils::operand(args, "filename")?;
    ctx.fs.create_file(name, "")?;
    Ok(Output::text(format!("Created file: {name}")))
}
