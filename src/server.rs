// ====== Req & Res ======

use serde::{Deserialize, Serialize};
use crate::editor::EditorMode;
use crate::notes::AuthorInfo;
use crate::output::CmdResult;

/// One input line from the client. `author` rides along with the exit token
/// that saves a note.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfReq {
    /// Session the line belongs to. `None` opens a new one.
    #[serde(default)]
    pub session: Option<u64>,
    pub line: String,
    #[serde(default)]
    pub author: Option<AuthorInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfRes {
    /// Id to send with the next line.
    pub session: u64,
    pub cwd: String,
    /// Set while an editor session is open after this line.
    #[serde(default)]
    pub editor: Option<EditorMode>,
    pub result: CmdResult,
}

// ====== SESSIONS ======

use crate::logger;
use crate::notes::{NoteSink, SuppliedAuthor};
use crate::shell::Shell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Sessions idle for longer than this are dropped.
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

pub type Session<S> = Shell<S, SuppliedAuthor>;

struct Slot<S> {
    shell: Arc<Mutex<Session<S>>>,
    seen: Instant,
}

struct Table<S> {
    next: u64,
    slots: HashMap<u64, Slot<S>>,
}

/// Live visitor sessions keyed by id. Every session gets its own clone of
/// the note sink and its own filesystem.
pub struct Sessions<S> {
    sink: S,
    ttl: Duration,
    table: Mutex<Table<S>>,
}

impl<S: NoteSink + Clone> Sessions<S> {
    pub fn new(sink: S) -> Self {
        Self::with_ttl(sink, SESSION_TTL)
    }

    pub fn with_ttl(sink: S, ttl: Duration) -> Self {
        Self { sink, ttl, table: Mutex::new(Table { next: 1, slots: HashMap::new() }) }
    }

    pub fn len(&self) -> usize {
        lock(&self.table).slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run one request against its session, opening a session when the id
    /// is missing, unknown or expired.
    pub fn handle(&self, req: TfReq) -> TfRes {
        let (id, shell) = self.checkout(req.session);
        let mut session = lock(shell.as_ref());
        respond(id, &mut session, req)
    }

    fn checkout(&self, id: Option<u64>) -> (u64, Arc<Mutex<Session<S>>>) {
        let mut table = lock(&self.table);
        let ttl = self.ttl;
        table.slots.retain(|key, slot| {
            let live = slot.seen.elapsed() < ttl;
            if !live {
                logger::log(&format!("[SERVER] Session {key} expired"));
            }
            live
        });

        if let Some(id) = id {
            if let Some(slot) = table.slots.get_mut(&id) {
                slot.seen = Instant::now();
                return (id, Arc::clone(&slot.shell));
            }
        }

        let id = table.next;
        table.next += 1;
        let shell = Arc::new(Mutex::new(Shell::new(self.sink.clone(), SuppliedAuthor::default())));
        table.slots.insert(id, Slot { shell: Arc::clone(&shell), seen: Instant::now() });
        logger::log(&format!("[SERVER] Session {id} opened"));
        (id, shell)
    }
}

// A poisoned lock still guards valid data.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn respond<S: NoteSink>(id: u64, shell: &mut Session<S>, req: TfReq) -> TfRes {
    if shell.is_editing() {
        // Editor lines are visitor content; only their size is logged.
        logger::log(&format!("[SERVER] Session {id} editor input ({} chars)", req.line.chars().count()));
    } else {
        logger::log(&format!("[SERVER] Session {id} received command: {}", req.line.trim()));
    }

    shell.prompter_mut().supply(req.author);
    let result = shell.execute(&req.line);
    // Author info is only good for the line it came with.
    shell.prompter_mut().supply(None);

    TfRes { session: id, cwd: shell.current_path(), editor: shell.editor_mode(), result }
}

// ====== FN ======

use crate::config::Config;
use crate::TfResult;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use threadpool::ThreadPool;

/// How long a connection may take to deliver its request line.
pub const READ_TIMEOUT: Duration = Duration::from_secs(2);

pub fn start_server(config: &Config) -> TfResult<()> {
    let listener = TcpListener::bind(("127.0.0.1", config.port))?;
    logger::log(&format!(
        "[SERVER] Listening on 127.0.0.1:{} with {} workers",
        config.port, config.workers
    ));
    listen(listener, config.workers, config.sink());
    Ok(())
}

/// Accept connections forever. Each connection carries one request and is
/// answered on a pool worker, so no visitor holds a worker between lines.
pub fn listen<S>(listener: TcpListener, workers: usize, sink: S)
where
    S: NoteSink + Clone + Send + Sync + 'static,
{
    let pool = ThreadPool::new(workers);
    let sessions = Arc::new(Sessions::new(sink));

    for s in listener.incoming() {
        let stream = match s {
            Ok(s) => s,
            Err(e) => {
                logger::log(&format!("[SERVER] TcpStreamError: {e:?}"));
                continue;
            }
        };

        let sessions = Arc::clone(&sessions);
        pool.execute(move || {
            if let Err(e) = route(&stream, &sessions) {
                logger::log(&format!("[ERR][SERVER] IoErr: {e:?}"));
            }
        });
    }
}

fn route<S: NoteSink + Clone>(stream: &TcpStream, sessions: &Sessions<S>) -> io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    answer(sessions, BufReader::new(stream), stream)
}

/// Read one JSON request line from `reader` and write the JSON reply to
/// `writer`. Malformed requests are logged and get no reply.
pub fn answer<S, R, W>(sessions: &Sessions<S>, mut reader: R, mut writer: W) -> io::Result<()>
where
    S: NoteSink + Clone,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(());
    }
    let req: TfReq = match serde_json::from_str(&line) {
        Ok(req) => req,
        Err(_) => {
            logger::log(&format!("[SERVER] Received unknown msg: {}", line.trim_end()));
            return Ok(());
        }
    };

    let res = sessions.handle(req);
    let mut msg = serde_json::to_string(&res)?;
    msg.push('\n');
    writer.write_all(msg.as_bytes())?;
    writer.flush()
}
