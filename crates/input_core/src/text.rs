//! Keystroke arithmetic for single-line values.
//!
//! Hosts use these to turn a frame's keystrokes into the pending value the
//! pipeline classifies. Edits only happen at the end of the value.

/// Append typed text to `value`, dropping newlines and other control
/// characters.
///
/// ```
/// use input_core::append_typed;
///
/// let mut v = String::from("a");
/// append_typed(&mut v, "b\r\nc");
/// assert_eq!(v, "abc");
/// ```
pub fn append_typed(value: &mut String, typed: &str) {
    value.extend(typed.chars().filter(|c| !c.is_control()));
}

/// Backspace at the end of `value`: remove one Unicode scalar value.
///
/// Returns `false` when `value` was already empty.
pub fn delete_last_char(value: &mut String) -> bool {
    value.pop().is_some()
}
