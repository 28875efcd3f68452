//! egui integration for `input_core` text fields: the input host, the text
//! painter, the `editable_text` entry point and the winit/wgpu renderer.

mod host;
mod painter;
mod renderer;
mod widget;

pub use host::{CompositionUpdate, EguiTextHost, FrameKeystrokes, Keystroke};
pub use painter::{EguiTextPainter, to_color32};
pub use renderer::{Renderer, RendererError};
pub use widget::editable_text;
