//! egui-backed [`TextHost`].
//!
//! One `EguiTextHost` lives per window (the IME is window-wide). At the
//! start of every egui pass, [`EguiTextHost::begin_frame`] snapshots the
//! pass's input; editable-text widgets then query it during the pass.

use egui::{Context, Event, ImeEvent};
use input_core::{Key, Point, PointerButton, TextHost, append_typed, delete_last_char};

/// A text-affecting keystroke, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keystroke {
    Text(String),
    Backspace,
}

/// An IME composition change, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompositionUpdate {
    Preedit(String),
    /// Commit or IME shutdown: nothing is being composed anymore.
    Finished,
}

/// The text-relevant part of one egui pass's events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameKeystrokes {
    pub keystrokes: Vec<Keystroke>,
    pub composition: Vec<CompositionUpdate>,
}

impl FrameKeystrokes {
    pub fn from_events(events: &[Event]) -> Self {
        let mut out = Self::default();
        for event in events {
            match event {
                Event::Text(text) => out.keystrokes.push(Keystroke::Text(text.clone())),
                Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => out.keystrokes.push(Keystroke::Backspace),
                Event::Ime(ImeEvent::Preedit(text)) => {
                    out.composition.push(CompositionUpdate::Preedit(text.clone()));
                }
                Event::Ime(ImeEvent::Commit(text)) => {
                    out.keystrokes.push(Keystroke::Text(text.clone()));
                    out.composition.push(CompositionUpdate::Finished);
                }
                Event::Ime(ImeEvent::Disabled) => {
                    out.composition.push(CompositionUpdate::Finished);
                }
                _ => {}
            }
        }
        out
    }

    pub fn has_backspace(&self) -> bool {
        self.keystrokes.contains(&Keystroke::Backspace)
    }

    /// Apply the keystrokes to `current`, appending at the end.
    pub fn apply_to(&self, current: &str) -> String {
        let mut out = current.to_owned();
        for keystroke in &self.keystrokes {
            match keystroke {
                Keystroke::Text(text) => append_typed(&mut out, text),
                Keystroke::Backspace => {
                    delete_last_char(&mut out);
                }
            }
        }
        out
    }
}

#[derive(Debug, Default)]
pub struct EguiTextHost {
    frame: FrameKeystrokes,
    composition: String,
    composition_processed: bool,
    escape_down: bool,
    backspace_down: bool,
    primary_down: bool,
    secondary_down: bool,
    pointer: Option<Point>,
    text_capture: bool,
    replay: bool,
}

impl EguiTextHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot this pass's input. Call once per pass, before any widget.
    pub fn begin_frame(&mut self, ctx: &Context) {
        // IME updates nobody consumed last pass still move the buffer.
        self.process_composition();

        // A discarded pass replays the same input; the first pass already
        // consumed its keystrokes.
        let replay = ctx.current_pass_index() > 0;
        self.replay = replay;
        ctx.input(|i| {
            self.frame = if replay {
                FrameKeystrokes::default()
            } else {
                FrameKeystrokes::from_events(&i.events)
            };
            self.escape_down = i.key_down(egui::Key::Escape);
            self.backspace_down = i.key_down(egui::Key::Backspace);
            self.primary_down = i.pointer.primary_down();
            self.secondary_down = i.pointer.secondary_down();
            self.pointer = i.pointer.latest_pos().map(|p| Point::new(p.x, p.y));
        });
        self.composition_processed = false;
        self.text_capture = false;
    }

    /// `true` once a typing widget claimed this pass's keystrokes as text.
    #[inline]
    pub fn wants_text_input(&self) -> bool {
        self.text_capture
    }

    /// `true` when egui is re-running a discarded pass of the same frame.
    #[inline]
    pub fn is_replayed_pass(&self) -> bool {
        self.replay
    }
}

impl TextHost for EguiTextHost {
    fn begin_text_capture(&mut self) {
        self.text_capture = true;
    }

    fn process_composition(&mut self) {
        if self.composition_processed {
            return;
        }
        self.composition_processed = true;
        for update in &self.frame.composition {
            match update {
                CompositionUpdate::Preedit(text) => {
                    self.composition.clone_from(text);
                }
                CompositionUpdate::Finished => self.composition.clear(),
            }
        }
    }

    fn pending_input_text(&mut self, current: &str) -> String {
        self.frame.apply_to(current)
    }

    fn composition(&self) -> &str {
        &self.composition
    }

    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Escape => self.escape_down,
            Key::Backspace => self.backspace_down || self.frame.has_backspace(),
        }
    }

    fn is_pointer_down(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary_down,
            PointerButton::Secondary => self.secondary_down,
        }
    }

    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }
}
