//! Typing-mode controller: `NotTyping <-> Typing`.
//!
//! Entering typing acquires the shared routing block, leaving releases it.
//! Both directions are idempotent.

use crate::id::InputId;
use crate::routing::{InputBlockGuard, InputRouting};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypingMode {
    #[default]
    NotTyping,
    Typing,
}

#[derive(Debug)]
pub struct TypingController {
    id: InputId,
    routing: InputRouting,
    claim: Option<InputBlockGuard>,
}

impl TypingController {
    pub fn new(id: InputId, routing: InputRouting) -> Self {
        Self {
            id,
            routing,
            claim: None,
        }
    }

    #[inline]
    pub fn id(&self) -> InputId {
        self.id
    }

    #[inline]
    pub fn mode(&self) -> TypingMode {
        if self.claim.is_some() {
            TypingMode::Typing
        } else {
            TypingMode::NotTyping
        }
    }

    #[inline]
    pub fn is_typing(&self) -> bool {
        self.claim.is_some()
    }

    pub fn enter_typing(&mut self) {
        match self.claim.as_ref().map(InputBlockGuard::is_active) {
            Some(true) => return,
            Some(false) => {
                // Another widget took the block while we kept typing; re-claim.
                self.claim = None;
            }
            None => {
                log::debug!(target: "input_core.typing", "{} entered typing", self.id);
            }
        }
        self.claim = Some(self.routing.acquire(self.id));
    }

    pub fn exit_typing(&mut self) {
        if self.claim.take().is_some() {
            log::debug!(target: "input_core.typing", "{} left typing", self.id);
        }
    }
}
