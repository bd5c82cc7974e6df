use serde::{Deserialize, Serialize};

use crate::fs::Filesystem;
use crate::logger;
use crate::notes::{AuthorPrompt, Note, NoteSink};
use crate::output::{Block, CmdResult, Output};
use crate::shell::ShellError;

/// Buffer cap in characters.
pub const MAX_CHARS: usize = 100_000;

/// Lines that end an editing session with a save.
pub const EXIT_TOKENS: [&str; 3] = ["ctrl+x", ":wq", ":x"];

pub fn is_exit_token(line: &str) -> bool {
    let line = line.trim().to_lowercase();
    EXIT_TOKENS.contains(&line.as_str())
}

/// Where a session's buffer goes on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Written back to the file only.
    File,
    /// Sent to the note sink, then mirrored into the file.
    Note,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    filename: String,
    path: String,
    buffer: String,
    chars: usize,
    mode: EditorMode,
}

impl EditorSession {
    /// `filename` is what the visitor typed, `path` the absolute path it named.
    pub fn new(filename: &str, path: &str, content: &str, mode: EditorMode) -> Self {
        Self {
            filename: String::from(filename),
            path: String::from(path),
            buffer: String::from(content),
            chars: content.chars().count(),
            mode,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Append one line. The buffer is untouched when the cap would be passed.
    pub fn append(&mut self, line: &str) -> Result<(), ShellError> {
        let added = line.chars().count();
        if self.chars + added > MAX_CHARS {
            return Err(ShellError::ContentTooLarge);
        }
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
            self.chars += 1;
        }
        self.buffer.push_str(line);
        self.chars += added;
        Ok(())
    }

    /// What the visitor sees when the session opens.
    pub fn opened(&self) -> Output {
        let hint = match self.mode {
            EditorMode::Note => "This will be saved as a note for Kuan! (Max 100,000 characters)",
            EditorMode::File => "Type your content, then Ctrl+X to save and exit",
        };
        let shown = if self.buffer.is_empty() { "(empty file)" } else { self.buffer.as_str() };
        Output::Blocks(vec![
            Block::Heading(format!("📝 Nano Editor - Editing: {}", self.filename)),
            Block::Hint(String::from(hint)),
            Block::Pre(String::from(shown)),
            Block::Text(String::from("Commands: Type your content, then 'Ctrl+X' to save and exit")),
        ])
    }

    fn echo(&self) -> Output {
        Output::Blocks(vec![
            Block::Text(String::from("Content added. Current content:")),
            Block::Pre(self.buffer.clone()),
            Block::Text(format!(
                "Characters: {}/100,000 | Type 'Ctrl+X' to save and exit",
                self.chars
            )),
        ])
    }
}

/// Route one raw line to the active session in `state`.
///
/// Exit tokens save and clear the session. The one exception is a buffer over
/// the cap, which leaves the session open so it can be fixed.
pub fn handle_input<S, P>(
    state: &mut Option<EditorSession>,
    fs: &mut Filesystem,
    sink: &mut S,
    prompt: &mut P,
    line: &str,
) -> CmdResult
where
    S: NoteSink + ?Sized,
    P: AuthorPrompt + ?Sized,
{
    if is_exit_token(line) {
        return save(state, fs, sink, prompt);
    }
    let Some(session) = state.as_mut() else {
        return CmdResult::err("nano: no file is being edited");
    };
    match session.append(line) {
        Ok(()) => CmdResult::ok(session.echo()),
        Err(e) => CmdResult::err(format!("Error: {e}")),
    }
}

fn save<S, P>(
    state: &mut Option<EditorSession>,
    fs: &mut Filesystem,
    sink: &mut S,
    prompt: &mut P,
) -> CmdResult
where
    S: NoteSink + ?Sized,
    P: AuthorPrompt + ?Sized,
{
    let Some(session) = state.take() else {
        return CmdResult::err("nano: no file is being edited");
    };
    if session.chars > MAX_CHARS {
        *state = Some(session);
        return CmdResult::err(format!("Error: {}", ShellError::ContentTooLarge));
    }

    match session.mode {
        EditorMode::Note => {
            let Some(author) = prompt.prompt() else {
                logger::log(&format!("[SHELL] Note '{}' dropped: no author", session.filename));
                return CmdResult::err(format!("Error saving note: {}", ShellError::MissingAuthor));
            };
            let note = Note {
                filename: session.filename.clone(),
                content: session.buffer.clone(),
                author_name: author.name,
                author_email: author.email,
            };
            if let Err(e) = sink.save(&note) {
                logger::log(&format!("[ERR][SHELL] Note '{}' not saved: {e}", session.filename));
                return CmdResult::err(format!("Error saving note: {}", ShellError::from(e)));
            }
        }
        EditorMode::File => {}
    }

    if let Err(e) = fs.update_file_content(&session.path, &session.buffer) {
        return CmdResult::err(format!("Error saving file: {e}"));
    }
    logger::log(&format!(
        "[SHELL] Saved {} ({} chars)",
        session.path, session.chars
    ));
    CmdResult::ok(Output::text(format!("File saved: {}", session.filename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::{AuthorInfo, SinkError};

    #[derive(Default)]
    struct Recorder {
        notes: Vec<Note>,
        fail: bool,
    }

    impl NoteSink for Recorder {
        fn save(&mut self, note: &Note) -> Result<(), SinkError> {
            if self.fail {
                return Err(SinkError::Rejected(500, String::from("boom")));
            }
            self.notes.push(note.clone());
            Ok(())
        }
    }

    struct Named(Option<&'static str>);

    impl AuthorPrompt for Named {
        fn prompt(&mut self) -> Option<AuthorInfo> {
            self.0.and_then(|n| AuthorInfo::normalized(n, None))
        }
    }

    fn session(mode: EditorMode) -> (Filesystem, Option<EditorSession>) {
        let mut fs = Filesystem::new();
        fs.change_directory("/notes_for_kuan").unwrap();
        fs.create_file("n.txt", "").unwrap();
        let s = EditorSession::new("n.txt", "/notes_for_kuan/n.txt", "", mode);
        (fs, Some(s))
    }

    #[test]
    fn exit_tokens_ignore_case_and_padding() {
        assert!(is_exit_token("Ctrl+X"));
        assert!(is_exit_token(" :wq "));
        assert!(is_exit_token(":X"));
        assert!(!is_exit_token(":q"));
        assert!(!is_exit_token("ctrl+x please"));
    }

    #[test]
    fn append_joins_with_newlines() {
        let mut s = EditorSession::new("a", "/a", "", EditorMode::File);
        s.append("one").unwrap();
        s.append("two").unwrap();
        assert_eq!(s.buffer(), "one\ntwo");
        assert_eq!(s.chars, 7);
    }

    #[test]
    fn append_over_cap_is_rejected_unchanged() {
        let mut s = EditorSession::new("a", "/a", &"x".repeat(MAX_CHARS - 3), EditorMode::File);
        assert!(matches!(s.append("abcd"), Err(ShellError::ContentTooLarge)));
        assert_eq!(s.buffer().len(), MAX_CHARS - 3);
        s.append("ab").unwrap();
    }

    #[test]
    fn over_cap_save_keeps_session_open() {
        let (mut fs, _) = session(EditorMode::File);
        let big = "y".repeat(MAX_CHARS + 1);
        let mut state = Some(EditorSession::new("n.txt", "/notes_for_kuan/n.txt", &big, EditorMode::File));
        let res = handle_input(&mut state, &mut fs, &mut Recorder::default(), &mut Named(Some("A")), ":wq");
        assert!(res.error);
        assert!(state.is_some());
        assert_eq!(fs.read_file("n.txt").unwrap(), "");
    }

    #[test]
    fn file_save_writes_and_clears() {
        let (mut fs, mut state) = session(EditorMode::File);
        let mut sink = Recorder::default();
        handle_input(&mut state, &mut fs, &mut sink, &mut Named(None), "hello");
        let res = handle_input(&mut state, &mut fs, &mut sink, &mut Named(None), "ctrl+x");
        assert!(!res.error);
        assert_eq!(res.render(), "File saved: n.txt");
        assert!(state.is_none());
        assert!(sink.notes.is_empty());
        assert_eq!(fs.read_file("n.txt").unwrap(), "hello");
    }

    #[test]
    fn note_save_sends_then_mirrors() {
        let (mut fs, mut state) = session(EditorMode::Note);
        let mut sink = Recorder::default();
        handle_input(&mut state, &mut fs, &mut sink, &mut Named(Some("Ada")), "hi there");
        let res = handle_input(&mut state, &mut fs, &mut sink, &mut Named(Some("Ada")), "ctrl+x");
        assert!(!res.error);
        assert_eq!(sink.notes.len(), 1);
        assert_eq!(sink.notes[0].content, "hi there");
        assert_eq!(sink.notes[0].author_name, "Ada");
        assert_eq!(fs.read_file("n.txt").unwrap(), "hi there");
    }

    #[test]
    fn missing_author_aborts_and_clears() {
        let (mut fs, mut state) = session(EditorMode::Note);
        let mut sink = Recorder::default();
        handle_input(&mut state, &mut fs, &mut sink, &mut Named(None), "text");
        let res = handle_input(&mut state, &mut fs, &mut sink, &mut Named(Some("  ")), ":x");
        assert!(res.error);
        assert!(res.render().contains("Name is required"));
        assert!(state.is_none());
        assert!(sink.notes.is_empty());
        assert_eq!(fs.read_file("n.txt").unwrap(), "");
    }

    #[test]
    fn sink_failure_clears_without_mirroring() {
        let (mut fs, mut state) = session(EditorMode::Note);
        let mut sink = Recorder { fail: true, ..Recorder::default() };
        handle_input(&mut state, &mut fs, &mut sink, &mut Named(Some("Ada")), "text");
        let res = handle_input(&mut state, &mut fs, &mut sink, &mut Named(Some("Ada")), ":wq");
        assert!(res.error);
        assert!(res.render().contains("500"));
        assert!(state.is_none());
        assert_eq!(fs.read_file("n.txt").unwrap(), "");
    }
}
