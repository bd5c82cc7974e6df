use chrono::prelude::*;

/// Print `[hh:mm:ss] msg` to stderr, leaving stdout to whatever the process
/// is serving.
///
/// Callers tag the component themselves, `[ERR]` first for failures:
///
/// ```rust
/// use termfolio::logger;
///
/// logger::log("[SERVER] started");
/// logger::log(&format!("[ERR][NOTES] store answered {}", 500));
/// ```
pub fn log(msg: &str) {
    eprintln!("{} {msg}", stamp(Local::now()));
}

fn stamp<T: Timelike>(now: T) -> String {
    format!("[{:0>2}:{:0>2}:{:0>2}]", now.hour(), now.minute(), now.second())
}
