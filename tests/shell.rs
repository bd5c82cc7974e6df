use std::cell::RefCell;
use std::rc::Rc;

use termfolio::editor::MAX_CHARS;
use termfolio::{AuthorInfo, AuthorPrompt, Block, Note, NoteSink, Output, Shell, SinkError};

/// Records notes; shared so the test can look after the shell takes ownership.
#[derive(Clone, Default)]
struct Notes {
    saved: Rc<RefCell<Vec<Note>>>,
    fail: bool,
}

impl NoteSink for Notes {
    fn save(&mut self, note: &Note) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::Rejected(503, String::from("unavailable")));
        }
        self.saved.borrow_mut().push(note.clone());
        Ok(())
    }
}

struct Visitor(Option<&'static str>);

impl AuthorPrompt for Visitor {
    fn prompt(&mut self) -> Option<AuthorInfo> {
        self.0.and_then(|n| AuthorInfo::normalized(n, Some("visitor@example.com")))
    }
}

fn shell() -> (Shell<Notes, Visitor>, Rc<RefCell<Vec<Note>>>) {
    let notes = Notes::default();
    let saved = notes.saved.clone();
    (Shell::new(notes, Visitor(Some("Ada"))), saved)
}

fn text(shell: &mut Shell<Notes, Visitor>, line: &str) -> String {
    let res = shell.execute(line);
    assert!(!res.error, "'{line}' failed: {}", res.render());
    res.render()
}

#[test]
fn scenario_home_listing_and_about() {
    let (mut sh, _) = shell();
    text(&mut sh, "cd /home/kuan");
    assert_eq!(text(&mut sh, "pwd"), "/home/kuan");

    let Output::Blocks(entries) = sh.execute("ls").output else {
        panic!("ls should list entries");
    };
    let names: Vec<&str> = entries
        .iter()
        .filter_map(|b| match b {
            Block::Entry { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    for expected in ["about.txt", "projects.txt", "contact.txt"] {
        assert!(names.contains(&expected), "missing {expected}");
    }

    assert!(text(&mut sh, "cat about.txt").contains("Kuan Yi Wang"));
}

#[test]
fn scenario_leave_a_note() {
    let (mut sh, saved) = shell();
    text(&mut sh, "cd /notes_for_kuan");
    assert!(text(&mut sh, "touch hello.txt").contains("hello.txt"));

    let opened = text(&mut sh, "nano hello.txt");
    assert!(sh.is_editing());
    assert_eq!(sh.editing_file(), Some("hello.txt"));
    assert!(opened.contains("(empty file)"));

    let echoed = text(&mut sh, "hi there");
    assert!(echoed.contains("hi there"));
    assert!(echoed.contains("Characters: 8/100,000"));

    assert_eq!(text(&mut sh, "ctrl+x"), "File saved: hello.txt");
    assert!(!sh.is_editing());

    let notes = saved.borrow();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "hi there");
    assert_eq!(notes[0].filename, "hello.txt");
    assert_eq!(notes[0].author_name, "Ada");
    drop(notes);

    assert_eq!(text(&mut sh, "cat hello.txt"), "hi there");
}

#[test]
fn scenario_cd_failure_keeps_cursor() {
    let (mut sh, _) = shell();
    text(&mut sh, "cd /portfolio");
    let res = sh.execute("cd /nonexistent");
    assert!(res.error);
    assert_eq!(res.render(), "cd: Directory not found: /nonexistent");
    assert_eq!(text(&mut sh, "pwd"), "/portfolio");
}

#[test]
fn scenario_unknown_command() {
    let (mut sh, _) = shell();
    let res = sh.execute("foobar");
    assert!(res.error);
    assert!(res.render().contains("foobar"));
    assert!(res.render().contains("help"));
}

#[test]
fn command_names_ignore_case_but_args_do_not() {
    let (mut sh, _) = shell();
    assert_eq!(text(&mut sh, "CD /home/kuan"), "Changed to: /home/kuan");
    let res = sh.execute("cat ABOUT.TXT");
    assert!(res.error);
    assert!(res.render().starts_with("cat:"));
}

#[test]
fn errors_are_prefixed_with_the_command_as_typed() {
    let (mut sh, _) = shell();
    assert_eq!(sh.execute("CD /x").render(), "CD: Directory not found: /x");
    assert_eq!(sh.execute("Cat").render(), "Cat: missing filename");
    assert!(sh.execute("FooBar").render().contains("'FooBar'"));
}

#[test]
fn names_may_start_with_a_dash() {
    let (mut sh, _) = shell();
    assert_eq!(text(&mut sh, "touch -draft.txt"), "Created file: -draft.txt");
    assert_eq!(text(&mut sh, "mkdir -old"), "Created directory: -old");
    assert!(sh.filesystem().file_exists("/-draft.txt"));
    let res = sh.execute("nano -draft.txt");
    assert!(!res.error);
    assert_eq!(sh.editing_file(), Some("-draft.txt"));
}

#[test]
fn missing_arguments_are_named() {
    let (mut sh, _) = shell();
    for (line, msg) in [
        ("cat", "cat: missing filename"),
        ("touch", "touch: missing filename"),
        ("mkdir", "mkdir: missing directory name"),
        ("vim", "vim: missing filename"),
    ] {
        let res = sh.execute(line);
        assert!(res.error);
        assert_eq!(res.render(), msg);
    }
    assert!(!sh.is_editing());
}

#[test]
fn cd_without_args_goes_home() {
    let (mut sh, _) = shell();
    assert_eq!(text(&mut sh, "cd"), "Changed to: /home/kuan");
}

#[test]
fn touch_twice_fails_and_keeps_tree() {
    let (mut sh, _) = shell();
    text(&mut sh, "mkdir stuff");
    let res = sh.execute("mkdir stuff");
    assert!(res.error);
    assert!(res.render().starts_with("mkdir: Already exists"));
    assert_eq!(text(&mut sh, "ls stuff"), "Directory is empty.");
}

#[test]
fn pdf_shows_download_link() {
    let (mut sh, _) = shell();
    let Output::Blocks(blocks) = sh.execute("cat /home/kuan/resume.pdf").output else {
        panic!("pdf should render blocks");
    };
    assert!(blocks.iter().any(|b| matches!(b, Block::Link { href, .. } if href == "/WANG_KUANYI.pdf")));
}

#[test]
fn plain_file_edit_skips_the_sink() {
    let (mut sh, saved) = shell();
    text(&mut sh, "cd /portfolio");
    text(&mut sh, "edit todo.txt");
    text(&mut sh, "line one");
    text(&mut sh, "line two");
    text(&mut sh, ":WQ");
    assert!(saved.borrow().is_empty());
    assert_eq!(text(&mut sh, "cat -n todo.txt"), "     1\tline one\n     2\tline two");
}

#[test]
fn editor_swallows_commands() {
    let (mut sh, _) = shell();
    text(&mut sh, "nano scratch.txt");
    text(&mut sh, "cd /portfolio");
    assert!(sh.is_editing());
    text(&mut sh, ":x");
    assert_eq!(text(&mut sh, "pwd"), "/");
    assert_eq!(text(&mut sh, "cat scratch.txt"), "cd /portfolio");
}

#[test]
fn editor_cap_rejects_append() {
    let (mut sh, _) = shell();
    text(&mut sh, "nano big.txt");
    text(&mut sh, &"a".repeat(MAX_CHARS));
    let res = sh.execute("b");
    assert!(res.error);
    assert!(sh.is_editing());
    text(&mut sh, "ctrl+x");
    assert_eq!(sh.filesystem().metadata("big.txt").unwrap().size, Some(MAX_CHARS));
}

#[test]
fn failing_sink_clears_the_editor() {
    let notes = Notes { fail: true, ..Notes::default() };
    let mut sh = Shell::new(notes, Visitor(Some("Ada")));
    sh.execute("cd /notes_for_kuan");
    sh.execute("nano hi.txt");
    sh.execute("hello");
    let res = sh.execute("ctrl+x");
    assert!(res.error);
    assert!(res.render().contains("503"));
    assert!(!sh.is_editing());
    assert_eq!(sh.execute("cat hi.txt").render(), "");
}

#[test]
fn nameless_visitor_cannot_save_a_note() {
    let mut sh = Shell::new(Notes::default(), Visitor(None));
    sh.execute("cd /notes_for_kuan");
    sh.execute("nano hi.txt");
    sh.execute("hello");
    let res = sh.execute(":wq");
    assert!(res.error);
    assert!(res.render().contains("Name is required"));
    assert!(!sh.is_editing());
}

#[test]
fn clear_is_a_sentinel() {
    let (mut sh, _) = shell();
    assert!(sh.execute("clear").is_clear());
}

#[test]
fn blank_line_is_a_no_op() {
    let (mut sh, _) = shell();
    let res = sh.execute("   ");
    assert!(!res.error);
    assert_eq!(res.render(), "");
}

#[test]
fn static_pages_render() {
    let (mut sh, _) = shell();
    assert_eq!(text(&mut sh, "whoami"), "guest@kuan-portfolio");
    for page in ["help", "about", "links", "projects", "skills", "contact", "welcome", "tutorial", "examples"] {
        assert!(!text(&mut sh, page).is_empty(), "{page} is empty");
    }
    assert!(text(&mut sh, "help").contains("nano [file]"));
}

#[test]
fn ls_long_adds_times_and_sizes() {
    let (mut sh, _) = shell();
    let Output::Blocks(blocks) = sh.execute("ls -l /portfolio").output else {
        panic!("ls should list entries");
    };
    for b in blocks {
        match b {
            Block::Entry { size, modified, dir, .. } => {
                assert!(!dir);
                assert!(size.is_some());
                assert!(modified.is_some());
            }
            other => panic!("unexpected block {other:?}"),
        }
    }
    let res = sh.execute("ls -z");
    assert!(res.error);
    assert!(res.render().starts_with("ls:"));
}

#[test]
fn tree_counts_the_seed() {
    let (mut sh, _) = shell();
    let out = text(&mut sh, "tree /");
    assert!(out.starts_with("/\n"));
    assert!(out.ends_with("5 directories, 13 files"));
}
