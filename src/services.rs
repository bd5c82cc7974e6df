mod utils;

mod cd;
pub use cd::cd;

mod pwd;
pub use pwd::pwd;

mod ls;
pub use ls::ls;

mod tree;
pub use tree::tree;

mod cat;
pub use cat::cat;

mod touch;
pub use touch::touch;

mod mkdir;
pub use mkdir::mkdir;

mod nano;
pub use nano::nano;

mod help;
pub use help::help;

mod info;
pub use info::{about, clear, contact, examples, links, projects, skills, tutorial, welcome, whoami};

use std::collections::HashMap;
use crate::editor::EditorSession;
use crate::fs::Filesystem;
use crate::output::Output;
use crate::shell::ShellError;

/// What a command handler may touch.
pub struct Context<'a> {
    pub fs: &'a mut Filesystem,
    pub editor: &'a mut Option<EditorSession>,
}

pub type Handler = fn(&mut Context<'_>, &[&str]) -> Result<Output, ShellError>;

pub type HandlerMap = HashMap<&'static str, Handler>;

pub fn handlers() -> HandlerMap {
    let mut map = HandlerMap::new();
    map.insert("help", help);
    map.insert("ls", ls);
    map.insert("cd", cd);
    map.insert("pwd", pwd);
    map.insert("cat", cat);
    map.insert("touch", touch);
    map.insert("mkdir", mkdir);
    map.insert("nano", nano);
    map.insert("vim", nano);
    map.insert("edit", nano);
    map.insert("tree", tree);
    map.insert("whoami", whoami);
    map.insert("clear", clear);
    map.insert("about", about);
    map.insert("links", links);
    map.insert("projects", projects);
    map.insert("skills", skills);
    map.insert("contact", contact);
    map.insert("welcome", welcome);
    map.insert("tutorial", tutorial);
    map.insert("examples", examples);
    map
}
