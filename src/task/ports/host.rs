//! Host view port notified when a drawer should be dismissed.

/// View hosting a task drawer.
pub trait DrawerHost: Send + Sync {
    /// Dismisses the drawer.
    ///
    /// Sent on cancel and right after a successful submission.
    fn close(&self);
}
