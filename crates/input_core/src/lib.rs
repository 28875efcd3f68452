//! # input_core
//!
//! UI-agnostic core of the editable-text widget.
//!
//! This crate provides:
//! - [`EditableText`]: the widget, driven by `update` then `draw` once per frame
//! - [`TypingController`]: the `NotTyping`/`Typing` state machine
//! - [`TextPipeline`]: the per-frame input acquisition and IME correction step
//! - [`InputType`] / [`InputFilter`]: classification of candidate values
//! - [`UpdateEdge`]: the one-frame "value just changed" edge detector
//! - [`InputRouting`]: the shared block that keeps keystrokes away from the
//!   rest of the application while a widget is typing
//!
//! ## Design Principles
//!
//! This crate does not depend on any graphics or windowing framework. Hosts
//! plug in through [`TextHost`] (keyboard, IME, pointer) and [`TextPainter`]
//! (measurement and drawing); `gfx` provides the egui implementations.

mod controller;
mod edge;
mod geometry;
mod host;
mod id;
mod input_type;
mod pipeline;
mod present;
mod routing;
mod text;
mod widget;

pub use controller::{TypingController, TypingMode};
pub use edge::UpdateEdge;
pub use geometry::{Bounds, Point, Rgba};
pub use host::{Key, PointerButton, TextHost, TextPainter};
pub use id::InputId;
pub use input_type::{InputFilter, InputType};
pub use pipeline::{FrameOutcome, TextPipeline};
pub use present::{EditableTextStyle, FrameView, caret_visible, paint_text_layers};
pub use routing::{InputBlockGuard, InputRouting};
pub use widget::EditableText;

// Keystroke arithmetic for hosts implementing `TextHost::pending_input_text`.
pub use text::{append_typed, delete_last_char};
