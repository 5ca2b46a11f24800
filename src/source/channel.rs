//! Channel-based data source.
//!
//! For embedding the panel in a process that already keeps the wallet's
//! status store: the store publishes into a tokio watch channel and the
//! panel shows whatever value is current.

use tokio::sync::watch;

use super::{DataSource, StatusSnapshot};

/// Shows the current value of a watch channel.
///
/// The value present when the source is created counts as new, so the first
/// poll always returns a snapshot. After the sending side is dropped the
/// source reports an error and the last snapshot stays on screen.
///
/// # Example
///
/// ```
/// use plasma_status::{ChannelSource, StatusSnapshot};
///
/// let (tx, source) = ChannelSource::create("wallet store");
/// tx.send(StatusSnapshot { watcher_connection: true, ..Default::default() }).unwrap();
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<StatusSnapshot>,
    description: String,
    closed: bool,
}

impl ChannelSource {
    pub fn new(mut receiver: watch::Receiver<StatusSnapshot>, source_description: &str) -> Self {
        receiver.mark_changed();
        Self {
            receiver,
            description: format!("channel: {}", source_description),
            closed: false,
        }
    }

    /// Create a channel pair, starting from the default (all falsy) snapshot.
    pub fn create(source_description: &str) -> (watch::Sender<StatusSnapshot>, Self) {
        let (tx, rx) = watch::channel(StatusSnapshot::default());
        (tx, Self::new(rx, source_description))
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<StatusSnapshot> {
        match self.receiver.has_changed() {
            Ok(true) => Some(self.receiver.borrow_and_update().clone()),
            Ok(false) => None,
            Err(_) => {
                self.closed = true;
                None
            }
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.closed.then_some("Status store closed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");
        assert_eq!(source.description(), "channel: test");

        // Initial value is delivered once
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot, StatusSnapshot::default());
        assert!(source.poll().is_none());

        tx.send(StatusSnapshot {
            watcher_connection: true,
            last_sync: 30.0,
            ..Default::default()
        })
        .unwrap();

        let snapshot = source.poll().unwrap();
        assert!(snapshot.watcher_connection);
        assert_eq!(snapshot.last_sync, 30.0);
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_channel_source_latest_value_wins() {
        let (tx, mut source) = ChannelSource::create("test");
        let _ = source.poll();

        tx.send(StatusSnapshot { last_sync: 1.0, ..Default::default() }).unwrap();
        tx.send(StatusSnapshot { last_sync: 2.0, ..Default::default() }).unwrap();

        assert_eq!(source.poll().unwrap().last_sync, 2.0);
    }

    #[test]
    fn test_channel_source_reports_closed_store() {
        let (tx, mut source) = ChannelSource::create("test");
        assert!(source.poll().is_some());
        assert!(source.error().is_none());

        drop(tx);
        assert!(source.poll().is_none());
        assert_eq!(source.error(), Some("Status store closed"));
    }
}
