use std::result;
use std::error::Error;
pub type TfResult<T> = result::Result<T, Box<dyn Error>>;

pub mod logger;
pub mod config;
pub mod fs;
pub mod output;
pub mod notes;
pub mod editor;
pub mod shell;
pub mod server;
mod services;

pub use crate::config::{Config, PORT};
pub use editor::{is_exit_token, EditorMode};
pub use fs::{Filesystem, FsError};
pub use notes::{AuthorInfo, AuthorPrompt, Note, NoteSink, SinkError};
pub use output::{Block, CmdResult, Output};
pub use server::{TfReq, TfRes};
pub use shell::{Shell, ShellError};
