use super::{utils, Context};
use crate::editor::{EditorMode, EditorSession};
use crate::fs::{is_under, NOTES_DIR};
use crate::logger;
use crate::output::Output;
use crate::shell::ShellError;

/// `nano <file>` (also `vim`, `edit`): open the line editor on a file,
/// creating it empty first if needed. Files under the notes directory are
/// saved as notes.
pub fn nano(ctx: &mut Context, args: &[&str]) -> Result<Output, ShellError> {
    let file = utils::operand(args, "filename")?;

    if !ctx.fs.file_exists(file) {
        ctx.fs.create_file(file, "")?;
    }
    let content = ctx.fs.read_file(file)?;

    let segments = ctx.fs.resolve(file)?;
    let parent = &segments[..segments.len().saturating_sub(1)];
    let mode = if is_under(parent, &NOTES_DIR) { EditorMode::Note } else { EditorMode::File };
    let path = format!("/{}", segments.join("/"));

    let session = EditorSession::new(file, &path, &content, mode);
    let out = session.opened();
    logger::log(&format!("[SHELL] Editing {path} as {mode:?}"));
    *ctx.editor = Some(session);
    Ok(out)
}
