use chrono::prelude::*;
use serde::{Deserialize, Serialize};

/// A file with text content. `size` is kept in step with `content`.
#[derive(Debug, Clone)]
pub struct File {
    name: String,
    content: String,
    size: usize,
    modified: DateTime<Local>,
}

impl File {
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            name: String::from(name),
            content: String::from(content),
            size: content.chars().count(),
            modified: Local::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Size in characters.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    /// Overwrite content, recomputing size and modification time.
    pub fn set_content(&mut self, content: &str) {
        self.content = String::from(content);
        self.size = self.content.chars().count();
        self.modified = Local::now();
    }
}

/// A directory owning its children. Insertion order is kept.
#[derive(Debug, Clone)]
pub struct Dir {
    name: String,
    children: Vec<Node>,
    modified: DateTime<Local>,
}

impl Dir {
    pub fn new(name: &str) -> Self {
        Self { name: String::from(name), children: Vec::new(), modified: Local::now() }
    }

    /// Builder used by the seed tree.
    pub fn with(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|n| n.name() == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|n| n.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Caller checks uniqueness first.
    pub(super) fn insert(&mut self, node: Node) {
        self.children.push(node);
        self.modified = Local::now();
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    File(File),
    Dir(Dir),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => f.name(),
            Node::Dir(d) => d.name(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }

    pub fn summary(&self) -> NodeSummary {
        match self {
            Node::File(f) => NodeSummary {
                name: String::from(f.name()),
                kind: NodeKind::File,
                size: Some(f.size()),
                modified: f.modified(),
            },
            Node::Dir(d) => NodeSummary {
                name: String::from(d.name()),
                kind: NodeKind::Dir,
                size: None,
                modified: d.modified(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Dir,
}

/// What a listing reports about one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSummary {
    pub name: String,
    pub kind: NodeKind,
    /// `None` for directories.
    pub size: Option<usize>,
    pub modified: DateTime<Local>,
}

impl NodeSummary {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Dir
    }
}

/// Recursive snapshot of a directory, for `tree`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<TreeEntry>,
}

impl TreeEntry {
    pub fn from_node(node: &Node) -> Self {
        match node {
            Node::File(f) => Self {
                name: String::from(f.name()),
                kind: NodeKind::File,
                children: Vec::new(),
            },
            Node::Dir(d) => Self {
                name: String::from(d.name()),
                kind: NodeKind::Dir,
                children: d.children().iter().map(TreeEntry::from_node).collect(),
            },
        }
    }
}
