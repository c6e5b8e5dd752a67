//! File-backed debug logging.
//!
//! The console owns the screen, so diagnostics go to a log file under the
//! user data directory plus an in-memory ring buffer that can be dumped on
//! demand. Logging before `init` is called only fills the ring buffer.

use chrono::Local;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;

const RING_CAPACITY: usize = 500;

struct LogSink {
    recent: VecDeque<String>,
    file_path: Option<PathBuf>,
}

static SINK: OnceLock<Mutex<LogSink>> = OnceLock::new();

fn sink() -> &'static Mutex<LogSink> {
    SINK.get_or_init(|| {
        Mutex::new(LogSink {
            recent: VecDeque::with_capacity(RING_CAPACITY),
            file_path: None,
        })
    })
}

/// Point the logger at `data_dir/debug.log`, creating the directory if needed.
pub fn init(data_dir: PathBuf) {
    let _ = std::fs::create_dir_all(&data_dir);
    sink().lock().file_path = Some(data_dir.join("debug.log"));
}

/// Initialize under the platform's local data directory.
pub fn init_default() {
    if let Some(dir) = dirs::data_local_dir() {
        init(dir.join("askterm"));
    }
}

pub fn log(level: &str, module: &str, message: impl Into<String>) {
    let line = format!(
        "[{}] [{}] [{}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        module,
        message.into()
    );

    let mut sink = sink().lock();
    if let Some(path) = &sink.file_path {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "{}", line);
        }
    }
    if sink.recent.len() >= RING_CAPACITY {
        sink.recent.pop_front();
    }
    sink.recent.push_back(line);
}

/// Most recent log lines, newest first.
pub fn recent(n: usize) -> Vec<String> {
    sink().lock().recent.iter().rev().take(n).cloned().collect()
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::log("DEBUG", module_path!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::logger::log("INFO", module_path!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logger::log("ERROR", module_path!(), format!($($arg)*));
    };
}
