use super::Context;
use crate::output::{Block, Output};
use crate::shell::ShellError;

const NAVIGATION: [(&str, &str); 4] = [
    ("pwd", "Show current directory"),
    ("ls [-l] [path]", "List directory contents"),
    ("cd [path]", "Change directory (use ~ for home)"),
    ("tree [path]", "Show directory tree"),
];

const FILES: [(&str, &str); 4] = [
    ("cat [-n] [file]", "Display file contents"),
    ("touch [file]", "Create new file"),
    ("nano [file]", "Edit file (also: vim, edit)"),
    ("mkdir [dir]", "Create directory"),
];

const PORTFOLIO: [(&str, &str); 5] = [
    ("about", "About me"),
    ("links", "My social links"),
    ("projects", "My projects"),
    ("skills", "Technical skills"),
    ("contact", "Contact information"),
];

const OTHER: [(&str, &str); 5] = [
    ("whoami", "Current user info"),
    ("welcome", "Show welcome message"),
    ("tutorial", "Interactive tutorial"),
    ("examples", "Usage examples"),
    ("clear", "Clear terminal"),
];

fn section(title: &str, items: &[(&str, &str)]) -> Block {
    Block::Section {
        title: String::from(title),
        items: items.iter().map(|(k, v)| (String::from(*k), String::from(*v))).collect(),
    }
}

pub fn help(_: &mut Context, _: &[&str]) -> Result<Output, ShellError> {
    Ok(Output::Blocks(vec![
        section("Navigation", &NAVIGATION),
        Block::Blank,
        section("File Operations", &FILES),
        Block::Blank,
        section("Portfolio", &PORTFOLIO),
        Block::Blank,
        section("Other", &OTHER),
        Block::Blank,
        Block::Hint(String::from("Navigate to /notes_for_kuan to leave me a message")),
    ]))
}
