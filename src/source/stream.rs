//! Stream-based data source.
//!
//! Receives status snapshots from an async byte stream, one JSON document
//! per line. The binary feeds it from stdin so any process can pipe
//! snapshots into the panel.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{DataSource, StatusSnapshot};

/// A data source that receives status snapshots from an async stream.
///
/// A background task reads newline-delimited JSON from the reader and
/// forwards each parsed snapshot to `poll()`. Blank lines are skipped and a
/// malformed line is reported without stopping the stream.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use plasma_status::StreamSource;
///
/// # tokio_test::block_on(async {
/// let data = b"{\"lastSync\": 4}\n";
/// let source = StreamSource::spawn(Cursor::new(data.to_vec()), "example");
/// # });
/// ```
#[derive(Debug)]
pub struct StreamSource {
    receiver: mpsc::Receiver<StatusSnapshot>,
    description: String,
    shared_error: Arc<Mutex<Option<String>>>,
    current_error: Option<String>,
}

fn set_error(handle: &Mutex<Option<String>>, error: Option<String>) {
    if let Ok(mut guard) = handle.lock() {
        *guard = error;
    }
}

impl StreamSource {
    /// Spawn a background task that reads from the given async reader.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<R>(reader: R, description: &str) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(16);
        let shared_error = Arc::new(Mutex::new(None));
        let error_handle = shared_error.clone();
        let desc = description.to_string();

        tokio::spawn(async move {
            let mut reader = BufReader::new(reader);
            let mut line = String::new();

            loop {
                line.clear();
                match reader.read_line(&mut line).await {
                    Ok(0) => {
                        info!("Snapshot stream {} closed", desc);
                        set_error(&error_handle, Some("Stream closed".to_string()));
                        break;
                    }
                    Ok(_) => {
                        let trimmed = line.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        match serde_json::from_str::<StatusSnapshot>(trimmed) {
                            Ok(snapshot) => {
                                set_error(&error_handle, None);
                                if tx.send(snapshot).await.is_err() {
                                    break;
                                }
                            }
                            Err(e) => {
                                warn!("Skipping malformed snapshot from {}: {}", desc, e);
                                set_error(&error_handle, Some(format!("Parse error: {}", e)));
                            }
                        }
                    }
                    Err(e) => {
                        warn!("Snapshot stream {} failed: {}", desc, e);
                        set_error(&error_handle, Some(format!("Read error: {}", e)));
                        break;
                    }
                }
            }
        });

        Self {
            receiver: rx,
            description: format!("stream: {}", description),
            shared_error,
            current_error: None,
        }
    }

    /// Create a source fed by raw JSON byte buffers, one snapshot per buffer.
    pub fn from_bytes_channel(mut rx: mpsc::Receiver<Vec<u8>>, description: &str) -> Self {
        let (tx, snapshot_rx) = mpsc::channel(16);
        let shared_error = Arc::new(Mutex::new(None));
        let error_handle = shared_error.clone();

        tokio::spawn(async move {
            while let Some(bytes) = rx.recv().await {
                match serde_json::from_slice::<StatusSnapshot>(&bytes) {
                    Ok(snapshot) => {
                        set_error(&error_handle, None);
                        if tx.send(snapshot).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        set_error(&error_handle, Some(format!("Parse error: {}", e)));
                    }
                }
            }
            set_error(&error_handle, Some("Stream closed".to_string()));
        });

        Self {
            receiver: snapshot_rx,
            description: format!("stream: {}", description),
            shared_error,
            current_error: None,
        }
    }

    fn refresh_error(&mut self) {
        if let Ok(guard) = self.shared_error.lock() {
            self.current_error = guard.clone();
        }
    }
}

impl DataSource for StreamSource {
    fn poll(&mut self) -> Option<StatusSnapshot> {
        // Drain to the newest snapshot; older ones are already stale
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(snapshot) => latest = Some(snapshot),
                // The reader task records why it stopped before disconnecting
                Err(mpsc::error::TryRecvError::Empty | mpsc::error::TryRecvError::Disconnected) => {
                    break
                }
            }
        }

        self.refresh_error();
        if latest.is_some() {
            debug!("Received snapshot from {}", self.description);
        }
        latest
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.current_error.as_deref()
    }
}
