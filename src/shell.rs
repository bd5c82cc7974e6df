// ====== ERROR ======

use std::{error, fmt};

use crate::fs::FsError;
use crate::notes::SinkError;

#[derive(Debug)]
pub enum ShellError {
    Fs(FsError),
    /// A required argument, named by what it is.
    MissingArgument(&'static str),
    BadOption(getopts::Fail),
    ContentTooLarge,
    MissingAuthor,
    Sink(SinkError),
    UnknownCommand(String),
}

impl error::Error for ShellError {}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fs(e) => write!(f, "{e}"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::BadOption(e) => write!(f, "{e}"),
            Self::ContentTooLarge => {
                write!(f, "Content exceeds maximum length of 100,000 characters.")
            }
            Self::MissingAuthor => write!(f, "Name is required"),
            Self::Sink(e) => write!(f, "{e}"),
            Self::UnknownCommand(cmd) => write!(
                f,
                "Command not found: '{cmd}'. Type 'help' or 'ls' to get started."
            ),
        }
    }
}

impl From<FsError> for ShellError {
    fn from(e: FsError) -> Self {
        Self::Fs(e)
    }
}

impl From<getopts::Fail> for ShellError {
    fn from(e: getopts::Fail) -> Self {
        Self::BadOption(e)
    }
}

impl From<SinkError> for ShellError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

// ====== SHELL ======

use crate::editor::{self, EditorMode, EditorSession};
use crate::fs::Filesystem;
use crate::logger;
use crate::notes::{AuthorPrompt, NoteSink};
use crate::output::{CmdResult, Output};
use crate::services::{self, Context, HandlerMap};

/// One visitor session: a filesystem, at most one editor session, and the
/// capabilities a note save needs.
pub struct Shell<S, P> {
    fs: Filesystem,
    editor: Option<EditorSession>,
    sink: S,
    prompt: P,
    handlers: HandlerMap,
}

impl<S: NoteSink, P: AuthorPrompt> Shell<S, P> {
    pub fn new(sink: S, prompt: P) -> Self {
        Self::with_filesystem(Filesystem::new(), sink, prompt)
    }

    pub fn with_filesystem(fs: Filesystem, sink: S, prompt: P) -> Self {
        Self { fs, editor: None, sink, prompt, handlers: services::handlers() }
    }

    /// Run one raw input line to completion.
    ///
    /// While a file is being edited every line goes to the editor. Otherwise
    /// the first word picks the command (case-insensitive) and the remaining
    /// words are its arguments. Failures come back as error results prefixed
    /// with the command word as typed.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        if self.editor.is_some() {
            return editor::handle_input(
                &mut self.editor,
                &mut self.fs,
                &mut self.sink,
                &mut self.prompt,
                line,
            );
        }

        let mut words = line.split_whitespace();
        let Some(typed) = words.next() else {
            return CmdResult::ok(Output::empty());
        };
        let cmd = typed.to_lowercase();
        let args: Vec<&str> = words.collect();

        let Some(handler) = self.handlers.get(cmd.as_str()) else {
            logger::log(&format!("[SHELL] Unknown command: {cmd}"));
            return CmdResult::err(ShellError::UnknownCommand(String::from(typed)).to_string());
        };

        let mut ctx = Context { fs: &mut self.fs, editor: &mut self.editor };
        match handler(&mut ctx, &args) {
            Ok(output) => CmdResult::ok(output),
            Err(e) => CmdResult::err(format!("{typed}: {e}")),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Name of the file being edited, if any.
    pub fn editing_file(&self) -> Option<&str> {
        self.editor.as_ref().map(EditorSession::filename)
    }

    pub fn editor_mode(&self) -> Option<EditorMode> {
        self.editor.as_ref().map(EditorSession::mode)
    }

    pub fn current_path(&self) -> String {
        self.fs.current_path()
    }

    pub fn filesystem(&self) -> &Filesystem {
        &self.fs
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompt
    }
}
