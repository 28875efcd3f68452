//! Opaque identifier for editable-text widgets.
//!
//! The value is only used as an owner key for the shared input-routing
//! block. Ids are normally handed out by
//! [`InputRouting::allocate_id`](crate::InputRouting::allocate_id) so every
//! widget of a tree gets a distinct one.

/// Lightweight, copyable handle naming one editable-text widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    /// Create an `InputId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.as_raw()
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "input#{}", self.0)
    }
}
