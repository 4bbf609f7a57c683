//! Drawer host that records close notifications.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::task::ports::DrawerHost;

/// Host view that counts how often it was asked to close the drawer.
#[derive(Debug, Default)]
pub struct RecordingDrawerHost {
    closes: AtomicUsize,
}

impl RecordingDrawerHost {
    /// Creates a host with no recorded closes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of close notifications received.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    /// Returns whether the drawer was closed at least once.
    #[must_use]
    pub fn was_closed(&self) -> bool {
        self.close_count() > 0
    }
}

impl DrawerHost for RecordingDrawerHost {
    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
