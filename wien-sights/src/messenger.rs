use std::sync::Arc;

/// Notifies the host application that the map content changed and should be drawn again.
pub trait Messenger: Send + Sync {
    /// Requests the map to be redrawn.
    fn request_redraw(&self);
}

impl<M: Messenger + ?Sized> Messenger for Arc<M> {
    fn request_redraw(&self) {
        (**self).request_redraw()
    }
}

/// Messenger that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn request_redraw(&self) {}
}
