//! Request log writer.
//!
//! Thread-safe append-only writing to the request log file. The mutex
//! serializes appends, so lines from concurrent requests never interleave
//! within a line. A failed append is reported on stderr and the request
//! continues; the log is an observer of traffic, not a gate on it.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global request log writer instance
static REQUEST_LOG: OnceLock<RequestLogWriter> = OnceLock::new();

/// Thread-safe append-only writer.
pub struct RequestLogWriter {
    file: Mutex<File>,
}

impl RequestLogWriter {
    /// Open (or create) the log file in append mode.
    pub fn open(path: &str) -> io::Result<Self> {
        let file = open_log_file(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append a single line.
    ///
    /// The line and its newline are written under the lock in one call.
    pub fn append(&self, line: &str) {
        let mut file = match self.file.lock() {
            Ok(f) => f,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(file, "{line}") {
            eprintln!("[ERROR] Failed to append request log: {e}");
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global request log writer
///
/// This should be called once at application startup.
/// Returns error if the log file cannot be opened.
pub fn init(path: &str) -> io::Result<()> {
    let writer = RequestLogWriter::open(path)?;
    REQUEST_LOG.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Request log writer already initialized",
        )
    })
}

/// Get the global request log writer, if initialized.
pub fn get() -> Option<&'static RequestLogWriter> {
    REQUEST_LOG.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_append_writes_exactly_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let writer = RequestLogWriter::open(path.to_str().unwrap()).unwrap();

        writer.append("[t], [GET], [127.0.0.1] , [/] ");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_appends_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let writer = RequestLogWriter::open(path.to_str().unwrap()).unwrap();

        writer.append("first");
        writer.append("second");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_concurrent_appends_never_split_a_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let writer = Arc::new(RequestLogWriter::open(path.to_str().unwrap()).unwrap());

        let mut handles = Vec::new();
        for i in 0..8u8 {
            let writer = Arc::clone(&writer);
            handles.push(thread::spawn(move || {
                let line = format!("[{i}]").repeat(200);
                for _ in 0..50 {
                    writer.append(&line);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 8 * 50);
        for line in contents.lines() {
            // every chunk of a fully written line carries one thread's marker
            let marker = &line.as_bytes()[..3];
            assert!(line.as_bytes().chunks(3).all(|chunk| chunk == marker));
        }
    }

    #[test]
    fn test_append_after_file_removed_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let writer = RequestLogWriter::open(path.to_str().unwrap()).unwrap();

        std::fs::remove_file(&path).unwrap();
        writer.append("still alive");
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/nested/log.txt");
        assert!(RequestLogWriter::open(path.to_str().unwrap()).is_ok());
        assert!(path.exists());
    }
}
