use termfolio::{is_exit_token, AuthorInfo, Config, EditorMode, TfReq, TfRes};
use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

const USER: &str = "guest@kuan-portfolio";

#[derive(Debug)]
struct Context {
    addr: SocketAddr,
    session: Option<u64>,
    cwd: String,
    editor: Option<EditorMode>,
}

impl Context {
    fn new(port: u16) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], port)),
            session: None,
            cwd: String::from("/"),
            editor: None,
        }
    }

    /// One connection per line, as the server expects.
    fn send(&mut self, line: &str, author: Option<AuthorInfo>) -> io::Result<TfRes> {
        let conn = TcpStream::connect_timeout(&self.addr, Duration::from_secs(30))?;
        let mut reader = BufReader::new(conn.try_clone()?);
        let req = TfReq { session: self.session, line: String::from(line), author };
        let res = send(&mut reader, &mut &conn, req)?;

        // the session may have moved or left the editor
        self.session = Some(res.session);
        self.cwd.clone_from(&res.cwd);
        self.editor = res.editor;
        Ok(res)
    }

    fn prompt(&self) -> String {
        match self.editor {
            Some(_) => String::from("> "),
            None => format!("{USER}:{}$ ", self.cwd),
        }
    }
}

fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let mut ctx = Context::new(config.port);
    if let Err(e) = run(&mut ctx) {
        eprintln!("Cannot talk to termfolio on port {}: {e}", config.port);
        std::process::exit(1);
    }
}

fn run(ctx: &mut Context) -> io::Result<()> {
    let mut buf = String::new();

    // Greet like the web terminal does.
    let res = ctx.send("welcome", None)?;
    print(&format!("{}\nType 'help' to get started.\n", res.result.render()))?;

    loop {
        print(&ctx.prompt())?;
        if !read(&mut buf)? {
            break;
        }
        if ctx.editor.is_none() && buf.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let author = match ctx.editor {
            Some(EditorMode::Note) if is_exit_token(&buf) => ask_author()?,
            _ => None,
        };
        let res = ctx.send(&buf, author)?;
        if res.result.is_clear() {
            print("\x1b[2J\x1b[H")?;
            continue;
        }
        let text = res.result.render();
        if !text.is_empty() {
            print(&format!("{text}\n"))?;
        }
    }
    Ok(())
}

fn print(s: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(s.as_bytes())?;
    stdout.flush()
}

/// Read one line without its line ending. `false` on end of input.
fn read(buf: &mut String) -> io::Result<bool> {
    buf.clear();
    if io::stdin().lock().read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(true)
}

/// Name is required, email optional. `None` lets the server report the
/// missing name.
fn ask_author() -> io::Result<Option<AuthorInfo>> {
    let mut name = String::new();
    let mut email = String::new();
    print("Enter your name (required): ")?;
    read(&mut name)?;
    if name.trim().is_empty() {
        return Ok(None);
    }
    print("Enter your email (optional): ")?;
    read(&mut email)?;
    Ok(AuthorInfo::normalized(&name, Some(&email)))
}

fn send<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, req: TfReq) -> io::Result<TfRes> {
    let mut msg = serde_json::to_string(&req)?;
    msg.push('\n');
    writer.write_all(msg.as_bytes())?;
    writer.flush()?;

    let mut res = String::new();
    if reader.read_line(&mut res)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "termfolio closed the session"));
    }
    Ok(serde_json::from_str(&res)?)
}
