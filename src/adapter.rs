//! Identity-stable callback targets for control events.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use portable_atomic_util::Arc;

/// Bridges a single control event to a zero-argument callback.
///
/// Controls only keep a [`Weak`](portable_atomic_util::Weak) reference to
/// their adapters, so whoever created the adapter has to keep the returned
/// [`Arc`] alive for as long as the control may still fire. Field renderers
/// hand it to the [`RenderedElement`](crate::RenderedElement) they produce as a
/// strong reference; once that element is superseded the adapter is dropped and
/// the control's events fall on the floor.
pub struct EventAdapter {
    execute: Box<dyn Fn() + Send + Sync>,
}

impl EventAdapter {
    /// Wrap `execute` in a new shared adapter.
    pub fn new<F>(execute: F) -> Arc<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Arc::new(Self {
            execute: Box::new(execute),
        })
    }

    /// Run the callback synchronously.
    ///
    /// Every call runs the callback exactly once; nothing is queued or merged.
    pub fn notify(&self) {
        (self.execute)();
    }
}

impl core::fmt::Debug for EventAdapter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventAdapter").finish_non_exhaustive()
    }
}
