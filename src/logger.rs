use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

const LOG_FILE: &str = "question_cards.log";

lazy_static::lazy_static! {
    static ref LOG_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Enable logging to the default log file next to the binary.
pub fn init() {
    init_at(PathBuf::from(LOG_FILE));
}

/// Direct log entries to `path` instead. Tests use this with a temp file.
pub fn init_at(path: PathBuf) {
    *LOG_PATH.lock().unwrap() = Some(path);
}

/// Append one timestamped line. No-op until `init` has been called; the few
/// entries per run don't warrant holding the file open, so each append
/// reopens it.
pub fn log(message: &str) {
    let path_guard = LOG_PATH.lock().unwrap();
    let Some(path) = path_guard.as_ref() else {
        return;
    };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}
