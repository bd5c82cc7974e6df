use super::Context;
use crate::output::Output;
use crate::shell::ShellError;

pub fn pwd(ctx: &mut Context, _: &[&str]) -> Result<Output, ShellError> {
    Ok(Output::text(ctx.fs.current_path()))
}
