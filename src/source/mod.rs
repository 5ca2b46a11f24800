//! Data source abstraction for receiving status snapshots.
//!
//! The panel never talks to the Watcher itself. Whatever owns that
//! connection publishes [`StatusSnapshot`]s, and a [`DataSource`] hands the
//! latest one to the app whenever it changes.

mod channel;
mod file;
mod snapshot;
mod stream;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use snapshot::StatusSnapshot;
pub use stream::StreamSource;

use std::fmt::Debug;

/// Trait for receiving status snapshots from various sources.
///
/// # Example
///
/// ```
/// use plasma_status::{DataSource, FileSource};
///
/// let mut source = FileSource::new("status.json");
/// if let Some(snapshot) = source.poll() {
///     println!("byzantine: {}", snapshot.byzantine_chain);
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` only when a new snapshot is available.
    /// This method must not block.
    fn poll(&mut self) -> Option<StatusSnapshot>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;

    /// Returns the error from the most recent poll, if any.
    fn error(&self) -> Option<&str>;
}
