mod node;
mod path;
mod seed;

pub use node::{Dir, File, Node, NodeKind, NodeSummary, TreeEntry};
pub use path::is_under;
pub use seed::{NOTES_DIR, RESUME_HREF};

// ====== ERROR ======

use std::{error, fmt, result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    PathNotFound(String),
    /// A `cd` target that does not exist.
    DirectoryNotFound(String),
    NotADirectory(String),
    NotAFile(String),
    AlreadyExists(String),
    InvalidName(String),
}

impl error::Error for FsError {}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound(p) => write!(f, "Path not found: {p}"),
            Self::DirectoryNotFound(p) => write!(f, "Directory not found: {p}"),
            Self::NotADirectory(p) => write!(f, "Not a directory: {p}"),
            Self::NotAFile(p) => write!(f, "{p} is not a file"),
            Self::AlreadyExists(n) => write!(f, "Already exists: {n}"),
            Self::InvalidName(n) => write!(f, "Invalid name: '{n}'"),
        }
    }
}

pub type Result<T> = result::Result<T, FsError>;

// ====== FILESYSTEM ======

/// In-memory tree plus the session cursor.
///
/// The cursor is a list of names from the root, never a reference into the
/// tree, and only ever points at an existing directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    // Always a `Node::Dir`; nothing replaces it after construction.
    root: Node,
    cwd: Vec<String>,
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem {
    /// A fresh session over the seed tree, positioned at `/`.
    pub fn new() -> Self {
        Self::with_root(seed::root())
    }

    pub fn with_root(root: Dir) -> Self {
        Self { root: Node::Dir(root), cwd: Vec::new() }
    }

    pub fn current_path(&self) -> String {
        path::render(&self.cwd)
    }

    /// List `path`, or the current directory when `None`.
    pub fn list_directory(&self, path: Option<&str>) -> Result<Vec<NodeSummary>> {
        let (segments, shown) = match path {
            Some(p) => (self.resolve(p)?, p),
            None => (self.cwd.clone(), ""),
        };
        match self.node_at(&segments, shown)? {
            Node::Dir(d) => Ok(d.children().iter().map(Node::summary).collect()),
            Node::File(_) => Err(FsError::NotADirectory(self.shown(shown))),
        }
    }

    /// Move the cursor. On failure the cursor is left where it was.
    pub fn change_directory(&mut self, path: &str) -> Result<String> {
        let segments = self.resolve(path).map_err(|e| match e {
            FsError::PathNotFound(_) => FsError::DirectoryNotFound(String::from(path)),
            e => e,
        })?;
        match self.node_at(&segments, path)? {
            Node::Dir(_) => {
                self.cwd = segments;
                Ok(self.current_path())
            }
            Node::File(_) => Err(FsError::NotADirectory(String::from(path))),
        }
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let segments = self.resolve(path)?;
        match self.node_at(&segments, path)? {
            Node::File(f) => Ok(String::from(f.content())),
            Node::Dir(_) => Err(FsError::NotAFile(String::from(path))),
        }
    }

    /// Create a file in the current directory.
    pub fn create_file(&mut self, name: &str, content: &str) -> Result<()> {
        self.insert(Node::File(File::new(name, content)))
    }

    /// Create a directory in the current directory.
    pub fn create_directory(&mut self, name: &str) -> Result<()> {
        self.insert(Node::Dir(Dir::new(name)))
    }

    pub fn update_file_content(&mut self, path: &str, content: &str) -> Result<()> {
        let segments = self.resolve(path)?;
        match self.node_at_mut(&segments, path)? {
            Node::File(f) => {
                f.set_content(content);
                Ok(())
            }
            Node::Dir(_) => Err(FsError::NotAFile(String::from(path))),
        }
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.resolve(path)
            .and_then(|s| self.node_at(&s, path).map(|_| ()))
            .is_ok()
    }

    pub fn metadata(&self, path: &str) -> Result<NodeSummary> {
        let segments = self.resolve(path)?;
        Ok(self.node_at(&segments, path)?.summary())
    }

    /// Snapshot of a directory and everything below it.
    pub fn tree(&self, path: Option<&str>) -> Result<TreeEntry> {
        let (segments, shown) = match path {
            Some(p) => (self.resolve(p)?, p),
            None => (self.cwd.clone(), ""),
        };
        let node = self.node_at(&segments, shown)?;
        if !node.is_dir() {
            return Err(FsError::NotADirectory(self.shown(shown)));
        }
        let mut entry = TreeEntry::from_node(node);
        if segments.is_empty() {
            entry.name = String::from("/");
        }
        Ok(entry)
    }

    /// Walk `path` against the tree and return the absolute segments it names.
    ///
    /// Every segment walked through must be an existing directory; `..` at the
    /// root stays at the root. The final segment may name a file.
    pub fn resolve(&self, path: &str) -> Result<Vec<String>> {
        let (mut stack, rest) = path::split(&self.cwd, path);
        for segment in rest {
            match segment {
                "." => {}
                ".." => {
                    stack.pop();
                }
                name => {
                    let dir = match self.node_at(&stack, path)? {
                        Node::Dir(d) => d,
                        Node::File(_) => return Err(FsError::NotADirectory(String::from(path))),
                    };
                    if !dir.contains(name) {
                        return Err(FsError::PathNotFound(String::from(path)));
                    }
                    stack.push(String::from(name));
                }
            }
        }
        Ok(stack)
    }

    fn insert(&mut self, node: Node) -> Result<()> {
        let name = String::from(node.name());
        if !path::valid_name(&name) {
            return Err(FsError::InvalidName(name));
        }
        let cwd = self.cwd.clone();
        let shown = self.current_path();
        match self.node_at_mut(&cwd, &shown)? {
            Node::Dir(d) => {
                if d.contains(&name) {
                    return Err(FsError::AlreadyExists(name));
                }
                d.insert(node);
                Ok(())
            }
            Node::File(_) => Err(FsError::NotADirectory(shown)),
        }
    }

    fn node_at(&self, segments: &[String], shown: &str) -> Result<&Node> {
        let mut node = &self.root;
        for name in segments {
            node = match node {
                Node::Dir(d) => d.child(name).ok_or_else(|| FsError::PathNotFound(self.shown(shown)))?,
                Node::File(_) => return Err(FsError::NotADirectory(self.shown(shown))),
            };
        }
        Ok(node)
    }

    fn node_at_mut(&mut self, segments: &[String], shown: &str) -> Result<&mut Node> {
        let shown = self.shown(shown);
        let mut node = &mut self.root;
        for name in segments {
            node = match node {
                Node::Dir(d) => d.child_mut(name).ok_or_else(|| FsError::PathNotFound(shown.clone()))?,
                Node::File(_) => return Err(FsError::NotADirectory(shown)),
            };
        }
        Ok(node)
    }

    fn shown(&self, path: &str) -> String {
        if path.is_empty() {
            self.current_path()
        } else {
            String::from(path)
        }
    }
}
