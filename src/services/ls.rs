use getopts::Options;
use super::{utils, Context};
use crate::output::{Block, Output};
use crate::shell::ShellError;

const TIME_FORMAT: &str = "%b %e %H:%M";

/// `ls [-l] [path]`. Directories get a trailing `/`, files their size; `-l`
/// adds modification times.
pub fn ls(ctx: &mut Context, args: &[&str]) -> Result<Output, ShellError> {
    let mut opts = Options::new();
    opts.optflag("l", "", "Use a long listing format");
    let matches = utils::parse(&opts, args)?;
    let long = matches.opt_present("l");

    let entries = ctx.fs.list_directory(matches.free.first().map(String::as_str))?;
    if entries.is_empty() {
        return Ok(Output::text("Directory is empty."));
    }

    let blocks = entries
        .into_iter()
        .map(|e| Block::Entry {
            dir: e.is_dir(),
            size: e.size.map(utils::format_size),
            modified: long.then(|| e.modified.format(TIME_FORMAT).to_string()),
            name: e.name,
        })
        .collect();
    Ok(Output::Blocks(blocks))
}
