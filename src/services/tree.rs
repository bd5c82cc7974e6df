use getopts::Options;
use super::{utils, Context};
use crate::fs::{NodeKind, TreeEntry};
use crate::output::{Block, Output};
use crate::shell::ShellError;

/// `tree [path]`: the directory and everything below it.
pub fn tree(ctx: &mut Context, args: &[&str]) -> Result<Output, ShellError> {
    let matches = utils::parse(&Options::new(), args)?;
    let root = ctx.fs.tree(matches.free.first().map(String::as_str))?;

    let mut lines = vec![root.name.clone()];
    let (mut dirs, mut files) = (0, 0);
    draw(&root.children, "", &mut lines, &mut dirs, &mut files);
    lines.push(String::new());
    lines.push(format!("{dirs} directories, {files} files"));
    Ok(Output::Blocks(vec![Block::Pre(lines.join("\n"))]))
}

fn draw(children: &[TreeEntry], prefix: &str, lines: &mut Vec<String>, dirs: &mut usize, files: &mut usize) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        match child.kind {
            NodeKind::Dir => {
                *dirs += 1;
                lines.push(format!("{prefix}{branch}{}/", child.name));
                let next = format!("{prefix}{}", if last { "    " } else { "│   " });
                draw(&child.children, &next, lines, dirs, files);
            }
            NodeKind::File => {
                *files += 1;
                lines.push(format!("{prefix}{branch}{}", child.name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Filesystem;

    #[test]
    fn draws_nested_entries() {
        let mut fs = Filesystem::new();
        fs.change_directory("/home").unwrap();
        let mut editor = None;
        let mut ctx = Context { fs: &mut fs, editor: &mut editor };
        let out = tree(&mut ctx, &[]).unwrap().render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "home");
        assert_eq!(lines[1], "└── kuan/");
        assert_eq!(lines[2], "    ├── about.txt");
        assert!(out.contains("    └── images/\n        └── README.txt"));
        assert!(out.ends_with("2 directories, 8 files"));
    }
}
