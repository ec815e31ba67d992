use std::sync::{Arc, Mutex, PoisonError};

use crate::orientation::OrientationState;

/// Consumer of orientation updates.
///
/// The poller calls [`Renderer::redraw`] once after every accepted report,
/// with a shared borrow of the new state. Renderers never see a half-updated
/// state and cannot modify it.
pub trait Renderer {
    fn redraw(&mut self, state: &OrientationState);
}

impl<F> Renderer for F
where
    F: FnMut(&OrientationState),
{
    fn redraw(&mut self, state: &OrientationState) {
        self(state)
    }
}

/// Single-slot "latest value wins" hand-off to a renderer on another thread.
///
/// Every clone shares the same slot. The poller side overwrites it on each
/// redraw; the render side takes whatever is newest and older values are
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct LatestOrientation {
    slot: Arc<Mutex<Option<OrientationState>>>,
}

impl LatestOrientation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the newest unseen state, leaving the slot empty.
    pub fn take(&self) -> Option<OrientationState> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    /// Peek at the newest unseen state without consuming it.
    pub fn peek(&self) -> Option<OrientationState> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Renderer for LatestOrientation {
    fn redraw(&mut self, state: &OrientationState) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(*state);
    }
}
