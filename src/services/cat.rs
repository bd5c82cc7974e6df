use getopts::Options;
use super::{utils, Context};
use crate::fs::RESUME_HREF;
use crate::output::{Block, Output};
use crate::shell::ShellError;

/// `cat [-n] <file>`. PDFs get a download link instead of their content.
pub fn cat(ctx: &mut Context, args: &[&str]) -> Result<Output, ShellError> {
    let mut opts = Options::new();
    opts.optflag("n", "", "Number all output lines");
    let matches = utils::parse(&opts, args)?;
    let file = utils::required(&matches, "filename")?;

    let content = ctx.fs.read_file(file)?;

    if file.ends_with(".pdf") {
        return Ok(Output::Blocks(vec![
            Block::Text(format!("📄 PDF File: {file}")),
            Block::Hint(String::from("This is a binary PDF file.")),
            Block::Link { label: String::from("Download Resume"), href: String::from(RESUME_HREF) },
        ]));
    }

    let content = if matches.opt_present("n") {
        content
            .split('\n')
            .enumerate()
            .map(|(i, line)| format!("{:>6}\t{line}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        content
    };
    Ok(Output::Blocks(vec![Block::Pre(content)]))
}
