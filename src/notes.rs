// ====== ERROR ======

use std::{error, fmt, io};

#[derive(Debug)]
pub enum SinkError {
    /// The store answered with a non-success status.
    Rejected(u16, String),
    Http(reqwest::Error),
    IoErr(io::Error),
    Serde(serde_json::Error),
}

impl error::Error for SinkError {}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(status, body) => write!(f, "Failed to save note: {status} {body}"),
            Self::Http(e) => write!(f, "Failed to reach note store: {e}"),
            Self::IoErr(e) => write!(f, "Failed to write note: {e}"),
            Self::Serde(e) => write!(f, "Failed to encode note: {e}"),
        }
    }
}

impl From<reqwest::Error> for SinkError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<io::Error> for SinkError {
    fn from(e: io::Error) -> Self {
        Self::IoErr(e)
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

// ====== RECORDS ======

use serde::{Deserialize, Serialize};

/// A finished note. The file sink stores it whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub filename: String,
    #[serde(rename = "note content")]
    pub content: String,
    #[serde(rename = "user_name")]
    pub author_name: String,
    #[serde(rename = "user_email")]
    pub author_email: Option<String>,
}

/// The row the REST store's `portfolio` table takes. It has no filename
/// column.
#[derive(Debug, PartialEq, Serialize)]
pub struct NoteRow<'a> {
    #[serde(rename = "note content")]
    pub content: &'a str,
    pub user_name: &'a str,
    pub user_email: Option<&'a str>,
}

impl<'a> From<&'a Note> for NoteRow<'a> {
    fn from(note: &'a Note) -> Self {
        Self {
            content: &note.content,
            user_name: &note.author_name,
            user_email: note.author_email.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthorInfo {
    /// Trim both fields. `None` when no usable name remains; a blank email
    /// becomes `None`.
    pub fn normalized(name: &str, email: Option<&str>) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let email = email.map(str::trim).filter(|e| !e.is_empty()).map(String::from);
        Some(Self { name: String::from(name), email })
    }
}

// ====== CAPABILITIES ======

/// Where finished notes go.
pub trait NoteSink {
    fn save(&mut self, note: &Note) -> Result<(), SinkError>;
}

/// Asks the visitor who they are when a note is saved.
///
/// `None` means no usable name was given.
pub trait AuthorPrompt {
    fn prompt(&mut self) -> Option<AuthorInfo>;
}

/// Author info handed over by the caller ahead of the line that needs it.
/// Each supplied value is used at most once.
#[derive(Debug, Default)]
pub struct SuppliedAuthor {
    next: Option<AuthorInfo>,
}

impl SuppliedAuthor {
    pub fn supply(&mut self, author: Option<AuthorInfo>) {
        self.next = author.and_then(|a| AuthorInfo::normalized(&a.name, a.email.as_deref()));
    }
}

impl AuthorPrompt for SuppliedAuthor {
    fn prompt(&mut self) -> Option<AuthorInfo> {
        self.next.take()
    }
}

// ====== SINKS ======

use crate::logger;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub const NOTES_TABLE: &str = "portfolio";

/// Posts notes to a REST record store (PostgREST style).
#[derive(Debug, Clone)]
pub struct RestNoteSink {
    client: reqwest::blocking::Client,
    url: String,
    api_key: String,
}

impl RestNoteSink {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: format!("{}/rest/v1/{NOTES_TABLE}", base_url.trim_end_matches('/')),
            api_key: String::from(api_key),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

impl NoteSink for RestNoteSink {
    fn save(&mut self, note: &Note) -> Result<(), SinkError> {
        let res = self
            .client
            .post(&self.url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&NoteRow::from(note))
            .send()?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            logger::log(&format!("[ERR][NOTES] Store rejected note '{}': {status}", note.filename));
            return Err(SinkError::Rejected(status.as_u16(), body));
        }
        logger::log(&format!("[NOTES] Saved note '{}' from {}", note.filename, note.author_name));
        Ok(())
    }
}

/// Appends notes as JSON lines to a local file.
#[derive(Debug, Clone)]
pub struct FileNoteSink {
    path: PathBuf,
}

impl FileNoteSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NoteSink for FileNoteSink {
    fn save(&mut self, note: &Note) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(note)?;
        line.push('\n');
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        logger::log(&format!(
            "[NOTES] Wrote note '{}' from {} to {}",
            note.filename,
            note.author_name,
            self.path.display()
        ));
        Ok(())
    }
}

/// Either configured sink, picked at startup.
#[derive(Debug, Clone)]
pub enum AnySink {
    Rest(RestNoteSink),
    File(FileNoteSink),
}

impl NoteSink for AnySink {
    fn save(&mut self, note: &Note) -> Result<(), SinkError> {
        match self {
            AnySink::Rest(s) => s.save(note),
            AnySink::File(s) => s.save(note),
        }
    }
}
