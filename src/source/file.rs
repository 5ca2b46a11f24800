//! File-based data source.
//!
//! The wallet (or a script polling the Watcher) rewrites a JSON file with
//! the current status snapshot; the panel re-reads it whenever it changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use super::{DataSource, StatusSnapshot};

/// Reads status snapshots from a JSON file.
///
/// The file is read on every poll until a snapshot loads. After that it is
/// only read again once its modification time moves past the loaded one. If
/// the file vanishes, the last snapshot stays on screen.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    /// Modification time of the file the current snapshot came from.
    loaded_at: Option<SystemTime>,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            loaded_at: None,
        }
    }

    /// Returns the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn needs_reload(&self, modified: Option<SystemTime>) -> bool {
        let Some(loaded_at) = self.loaded_at else {
            return true;
        };
        modified.is_some_and(|modified| modified > loaded_at)
    }

    fn load(&self) -> Result<StatusSnapshot, String> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| format!("Read error: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Parse error: {}", e))
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<StatusSnapshot> {
        let modified = self.modified_time();
        if !self.needs_reload(modified) {
            return None;
        }

        match self.load() {
            Ok(snapshot) => {
                debug!("Loaded snapshot from {}", self.path.display());
                self.loaded_at = modified;
                self.last_error = None;
                Some(snapshot)
            }
            Err(e) => {
                // Logged once per distinct failure; a missing file is retried every poll
                if self.last_error.as_deref() != Some(e.as_str()) {
                    warn!("{}: {}", self.path.display(), e);
                }
                self.last_error = Some(e);
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "watcherConnection": true,
            "byzantineChain": true,
            "lastSync": 42,
            "lastSeenBlock": 1700000000
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/status.json");
        assert_eq!(source.path(), Path::new("/tmp/status.json"));
        assert_eq!(source.description(), "file: /tmp/status.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        let snapshot = source.poll().expect("first poll returns data");
        assert!(snapshot.byzantine_chain);
        assert_eq!(snapshot.last_sync, 42.0);

        // Unchanged file yields nothing new
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_keeps_quiet_after_file_removed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();
        let path = file.path().to_path_buf();

        let mut source = FileSource::new(&path);
        assert!(source.poll().is_some());

        drop(file);
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/status.json");

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_file_source_recovers_after_bad_write() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{\"watcherConnection\": ").unwrap();

        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        assert!(source.error().is_some());

        // Nothing loaded yet, so the next poll reads again regardless of mtime
        fs::write(file.path(), sample_json()).unwrap();
        assert!(source.poll().unwrap().watcher_connection);
        assert!(source.error().is_none());
    }
}
