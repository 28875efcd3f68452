//! Per-frame text update pipeline.
//!
//! Runs once per frame while the widget is typing and reconciles three
//! sources: the host's pending text (this frame's keystrokes applied to the
//! committed value), the IME composition buffer, and the widget's own
//! previous-frame composition snapshot.
//!
//! Order within a frame:
//!
//! 1. Escape leaves typing mode; nothing else is read that frame.
//! 2. Text capture hint, then IME composition processing.
//! 3. Pending text is pulled from the host.
//! 4. If a composition existed last frame and backspace is down, the host's
//!    result is discarded: the backspace belongs to the composition.
//! 5. The candidate is classified by the input filter.
//! 6. An accepted, different candidate is committed and arms the edge.
//! 7. The composition snapshot is refreshed for the next frame.

use crate::controller::TypingController;
use crate::edge::UpdateEdge;
use crate::host::{Key, TextHost};
use crate::input_type::InputFilter;

/// What one pipeline step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The widget was not typing; the pipeline did not run.
    Skipped,
    /// Escape left typing mode before any text was read.
    Dismissed,
    /// Backspace edited the composition only; the value was kept.
    CompositionBackspace,
    /// The candidate failed the input filter; the value was kept.
    Rejected,
    /// The candidate equals the committed value.
    Unchanged,
    Committed,
}

impl FrameOutcome {
    #[inline]
    pub fn committed(self) -> bool {
        self == FrameOutcome::Committed
    }
}

#[derive(Clone, Debug)]
pub struct TextPipeline {
    filter: InputFilter,
    had_composition_last_frame: bool,
}

impl TextPipeline {
    pub fn new(filter: InputFilter) -> Self {
        Self {
            filter,
            had_composition_last_frame: false,
        }
    }

    #[inline]
    pub fn filter(&self) -> InputFilter {
        self.filter
    }

    /// Composition snapshot taken at the end of the last step.
    #[inline]
    pub fn had_composition_last_frame(&self) -> bool {
        self.had_composition_last_frame
    }

    pub fn step<H: TextHost + ?Sized>(
        &mut self,
        host: &mut H,
        value: &mut String,
        edge: &mut UpdateEdge,
        typing: &mut TypingController,
    ) -> FrameOutcome {
        if !typing.is_typing() {
            return FrameOutcome::Skipped;
        }

        let outcome = self.read_frame(host, value, edge, typing);
        self.had_composition_last_frame = !host.composition().is_empty();
        outcome
    }

    fn read_frame<H: TextHost + ?Sized>(
        &self,
        host: &mut H,
        value: &mut String,
        edge: &mut UpdateEdge,
        typing: &mut TypingController,
    ) -> FrameOutcome {
        if host.is_key_down(Key::Escape) {
            typing.exit_typing();
            return FrameOutcome::Dismissed;
        }

        host.begin_text_capture();
        host.process_composition();

        let candidate = host.pending_input_text(value);

        if self.had_composition_last_frame && host.is_key_down(Key::Backspace) {
            log::trace!(
                target: "input_core.pipeline",
                "{}: backspace kept for composition, dropping {candidate:?}",
                typing.id()
            );
            return FrameOutcome::CompositionBackspace;
        }

        if !self.filter.accept(&candidate) {
            log::trace!(
                target: "input_core.pipeline",
                "{}: {:?} rejected {candidate:?}",
                typing.id(),
                self.filter
            );
            return FrameOutcome::Rejected;
        }

        if candidate == *value {
            return FrameOutcome::Unchanged;
        }

        log::trace!(target: "input_core.pipeline", "{}: commit {candidate:?}", typing.id());
        *value = candidate;
        edge.arm();
        FrameOutcome::Committed
    }
}
