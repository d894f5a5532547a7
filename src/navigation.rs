//! Fire-and-forget navigation requests.

#[cfg(feature = "no_std")]
use alloc::{boxed::Box, vec::Vec};

use flume::{Receiver, Sender};

use crate::{FormError, FormTable, IndexPath};

/// A screen the host navigation stack can present and drive.
///
/// [`FormDriver`](crate::FormDriver) implements this, so a form pushed through
/// [`RenderingContext::push_form`](crate::RenderingContext::push_form) arrives
/// at the host as a screen it can display, route taps to, and focus.
pub trait Presentable {
    fn title(&self) -> &str;

    /// Let `visit` read the screen's current table.
    fn visit_table(&self, visit: &mut dyn FnMut(&FormTable));

    /// Dispatch a tap on `index_path`.
    fn select_row(&self, index_path: IndexPath) -> Result<(), FormError>;

    /// Called by the host once the screen is on screen.
    fn did_appear(&self) -> bool;
}

/// A request for the host navigation stack.
pub enum NavigationRequest {
    Push(Box<dyn Presentable + Send>),
    Pop,
}

impl NavigationRequest {
    pub fn is_pop(&self) -> bool {
        matches!(self, NavigationRequest::Pop)
    }
}

impl core::fmt::Debug for NavigationRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NavigationRequest::Push(screen) => f.debug_tuple("Push").field(&screen.title()).finish(),
            NavigationRequest::Pop => f.write_str("Pop"),
        }
    }
}

/// Handle on one navigation stack, embedded in every
/// [`RenderingContext`](crate::RenderingContext).
///
/// Cheap to clone. Forms pushed from a form share their parent's navigator, so
/// every screen on a stack reports to the same [`NavigationQueue`]. Sending
/// never blocks and never waits for the host to act on the request.
pub(crate) struct Navigator {
    sender: Sender<NavigationRequest>,
    receiver: Receiver<NavigationRequest>,
}

impl Clone for Navigator {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            receiver: self.receiver.clone(),
        }
    }
}

impl Navigator {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    pub(crate) fn request(&self, request: NavigationRequest) {
        tracing::trace!(?request, "navigation requested");
        if self.sender.send(request).is_err() {
            tracing::debug!("navigation queue closed, request dropped");
        }
    }

    pub(crate) fn queue(&self) -> NavigationQueue {
        NavigationQueue(self.receiver.clone())
    }
}

/// Receiving half, drained by the host navigation stack.
#[derive(Clone)]
pub struct NavigationQueue(Receiver<NavigationRequest>);

impl NavigationQueue {
    /// Take the next pending request, if any.
    pub fn try_next(&self) -> Option<NavigationRequest> {
        self.0.try_recv().ok()
    }

    /// Take every pending request in the order they were issued.
    pub fn drain(&self) -> Vec<NavigationRequest> {
        self.0.try_iter().collect()
    }

    /// Wait for the next request. Resolves to `None` once every form on the
    /// stack has been dropped.
    pub async fn next(&self) -> Option<NavigationRequest> {
        self.0.recv_async().await.ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
