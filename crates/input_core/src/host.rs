//! Host-facing traits.
//!
//! `input_core` never talks to a windowing or graphics toolkit directly.
//! The embedding layer implements [`TextHost`] over its keyboard/IME/pointer
//! subsystem and [`TextPainter`] over its drawing primitives; tests implement
//! both with scripted fakes.

use crate::geometry::{Point, Rgba};

/// Keys the widget queries directly. Everything else reaches the widget
/// only through [`TextHost::pending_input_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Backspace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Per-frame view of the host's keyboard, IME and pointer state.
pub trait TextHost {
    /// Hint that this frame's keystrokes are free text, not hotkeys.
    fn begin_text_capture(&mut self);

    /// Let the IME fold this frame's events into the composition buffer.
    ///
    /// May update or clear [`TextHost::composition`] as a side effect.
    fn process_composition(&mut self);

    /// The value that results from applying this frame's keystrokes to
    /// `current`. The host performs the insertion/deletion arithmetic.
    fn pending_input_text(&mut self, current: &str) -> String;

    /// Live IME composition string; empty when nothing is being composed.
    fn composition(&self) -> &str;

    fn is_key_down(&self, key: Key) -> bool;

    fn is_pointer_down(&self, button: PointerButton) -> bool;

    /// Latest pointer position, `None` when the pointer left the surface.
    fn pointer_position(&self) -> Option<Point>;
}

/// Drawing primitives the presentation layer needs.
pub trait TextPainter {
    /// Width of `text` in the painter's font, in logical pixels.
    fn measure_text_width(&self, text: &str) -> f32;

    fn draw_text(&mut self, text: &str, pos: Point, color: Rgba);

    /// Anchor the host's native IME candidate window at `anchor`.
    fn draw_ime_candidate_panel(&mut self, anchor: Point);
}
