//! Shared "text input owns the keyboard" block.
//!
//! While a widget is typing, the rest of the application must not route the
//! same keystrokes to hotkeys or other controls. [`InputRouting`] is the
//! context object the embedding tree hands to every widget; a typing widget
//! holds an [`InputBlockGuard`] and the block is lifted when that guard is
//! dropped, whichever exit path drops it.
//!
//! The context is single-threaded (`Rc`/`Cell`): widgets live on the UI
//! thread and contention is only across frames.

use std::cell::Cell;
use std::rc::Rc;

use crate::id::InputId;

#[derive(Debug, Default)]
struct RoutingState {
    owner: Cell<Option<InputId>>,
    next_id: Cell<u64>,
}

/// Cheaply clonable handle to one routing context.
#[derive(Clone, Debug, Default)]
pub struct InputRouting {
    state: Rc<RoutingState>,
}

impl InputRouting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out an id unique within this context.
    pub fn allocate_id(&self) -> InputId {
        let raw = self.state.next_id.get();
        self.state.next_id.set(raw.wrapping_add(1));
        InputId::from_raw(raw)
    }

    /// `true` while some widget owns text input.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.state.owner.get().is_some()
    }

    #[inline]
    pub fn owner(&self) -> Option<InputId> {
        self.state.owner.get()
    }

    /// Block input routing on behalf of `id`.
    ///
    /// A newer claim replaces an older one; the older guard then becomes
    /// inert and dropping it leaves the new owner in place.
    #[must_use = "the block is lifted as soon as the guard is dropped"]
    pub fn acquire(&self, id: InputId) -> InputBlockGuard {
        if let Some(previous) = self.state.owner.replace(Some(id))
            && previous != id
        {
            log::debug!(target: "input_core.routing", "{id} took input routing from {previous}");
        }
        InputBlockGuard {
            routing: self.clone(),
            id,
        }
    }

    fn release(&self, id: InputId) {
        if self.state.owner.get() == Some(id) {
            self.state.owner.set(None);
        }
    }
}

/// Proof that a widget currently blocks input routing.
#[derive(Debug)]
pub struct InputBlockGuard {
    routing: InputRouting,
    id: InputId,
}

impl InputBlockGuard {
    #[inline]
    pub fn id(&self) -> InputId {
        self.id
    }

    /// `false` once another widget has taken over the block.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.routing.owner() == Some(self.id)
    }
}

impl Drop for InputBlockGuard {
    fn drop(&mut self) {
        self.routing.release(self.id);
    }
}
