use super::{utils, Context};
use crate::output::Output;
use crate::shell::ShellError;

pub fn mkdir(ctx: &mut Context, args: &[&str]) -> Result<Output, ShellError> {
    let name = utils::operand(args, "directory name")?;
    ctx.fs.create_directory(name)?;
    Ok(Output::text(format!("Created directory: {name}")))
}
