use termfolio::{
    Config,
    TfResult,
    logger::log,
    server::start_server,
};

fn main() {
    if let Err(e) = run() {
        log(&format!("[ERR] {e}"));
        std::process::exit(1);
    }
}

fn run() -> TfResult<()> {
    let config = Config::from_env()?;
    match &config.notes_url {
        Some(url) => log(&format!("Notes go to {url}")),
        None => log(&format!("Notes go to {}", config.notes_file.display())),
    }
    log("Termfolio started...");
    start_server(&config)
}
