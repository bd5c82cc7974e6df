// Structured command output. The shell never produces markup strings; callers
// decide how to draw these blocks. `render` gives the plain-terminal form.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Block {
    Heading(String),
    Text(String),
    /// Whitespace-preserving text, such as file content.
    Pre(String),
    /// A suggestion or call to action.
    Hint(String),
    Link { label: String, href: String },
    /// One `ls` row.
    Entry {
        name: String,
        dir: bool,
        size: Option<String>,
        modified: Option<String>,
    },
    /// A label followed by its items, e.g. a help category.
    Section { title: String, items: Vec<(String, String)> },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Output {
    Text(String),
    Blocks(Vec<Block>),
    /// Tell the caller to reset its displayed history.
    Clear,
}

impl Output {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Plain text for a terminal. `Clear` renders as nothing.
    pub fn render(&self) -> String {
        match self {
            Output::Text(s) => s.clone(),
            Output::Blocks(blocks) => blocks.iter().map(render_block).collect::<Vec<_>>().join("\n"),
            Output::Clear => String::new(),
        }
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading(s) => format!("== {s} =="),
        Block::Text(s) | Block::Pre(s) => s.clone(),
        Block::Hint(s) => format!("> {s}"),
        Block::Link { label, href } => format!("{label}: {href}"),
        Block::Entry { name, dir, size, modified } => {
            let name = if *dir { format!("{name}/") } else { name.clone() };
            let size = size.as_deref().unwrap_or("");
            match modified {
                Some(m) => format!("{name:<28} {size:>10}  {m}"),
                None => format!("{name:<28} {size:>10}").trim_end().to_string(),
            }
        }
        Block::Section { title, items } => {
            let width = items.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
            let mut s = format!("{title}:");
            for (k, v) in items {
                s += "\n";
                s += format!("  {k:<width$}  {v}").trim_end();
            }
            s
        }
        Block::Blank => String::new(),
    }
}

/// Result of one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmdResult {
    pub output: Output,
    #[serde(default)]
    pub error: bool,
}

impl CmdResult {
    pub fn ok(output: Output) -> Self {
        Self { output, error: false }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self { output: Output::Text(msg.into()), error: true }
    }

    pub fn is_clear(&self) -> bool {
        self.output == Output::Clear
    }

    pub fn render(&self) -> String {
        self.output.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_mark_directories() {
        let out = Output::Blocks(vec![
            Block::Entry { name: String::from("images"), dir: true, size: None, modified: None },
            Block::Entry {
                name: String::from("about.txt"),
                dir: false,
                size: Some(String::from("245 B")),
                modified: None,
            },
        ]);
        let text = out.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "images/");
        assert!(lines[1].starts_with("about.txt"));
        assert!(lines[1].ends_with("245 B"));
    }

    #[test]
    fn sections_align_keys() {
        let block = Block::Section {
            title: String::from("Navigation"),
            items: vec![
                (String::from("pwd"), String::from("Show current directory")),
                (String::from("ls [path]"), String::from("List directory contents")),
            ],
        };
        assert_eq!(
            render_block(&block),
            "Navigation:\n  pwd        Show current directory\n  ls [path]  List directory contents"
        );
    }

    #[test]
    fn clear_serializes_as_a_tag() {
        let json = serde_json::to_string(&CmdResult::ok(Output::Clear)).unwrap();
        assert_eq!(json, r#"{"output":{"kind":"clear"},"error":false}"#);
        let back: CmdResult = serde_json::from_str(&json).unwrap();
        assert!(back.is_clear());
    }
}
