//! The editable-text widget: controller, pipeline and presentation composed
//! in the host's per-frame `update` then `draw` order.

use crate::controller::{TypingController, TypingMode};
use crate::edge::UpdateEdge;
use crate::geometry::Bounds;
use crate::host::{PointerButton, TextHost, TextPainter};
use crate::id::InputId;
use crate::input_type::InputType;
use crate::pipeline::{FrameOutcome, TextPipeline};
use crate::present::{EditableTextStyle, FrameView, paint_text_layers};
use crate::routing::InputRouting;

/// Single-line text field with IME composition support.
///
/// # Example
///
/// ```
/// use input_core::{EditableText, InputRouting, InputType};
///
/// let routing = InputRouting::new();
/// let mut field = EditableText::new(InputType::Integer, "Amount", &routing);
///
/// field.on_secondary_click();
/// assert!(field.is_typing());
/// assert!(routing.is_blocked());
/// assert_eq!(field.value(), "");
///
/// field.deactivate();
/// assert!(!routing.is_blocked());
/// ```
#[derive(Debug)]
pub struct EditableText {
    input_type: InputType,
    placeholder: String,
    value: String,
    typing: TypingController,
    pipeline: TextPipeline,
    edge: UpdateEdge,
    style: EditableTextStyle,
}

impl EditableText {
    pub fn new(
        input_type: InputType,
        placeholder: impl Into<String>,
        routing: &InputRouting,
    ) -> Self {
        let id = routing.allocate_id();
        Self {
            input_type,
            placeholder: placeholder.into(),
            value: String::new(),
            typing: TypingController::new(id, routing.clone()),
            pipeline: TextPipeline::new(input_type.filter()),
            edge: UpdateEdge::Idle,
            style: EditableTextStyle::default(),
        }
    }

    pub fn with_style(mut self, style: EditableTextStyle) -> Self {
        self.style = style;
        self
    }

    // ----- Getters -----

    #[inline]
    pub fn id(&self) -> InputId {
        self.typing.id()
    }

    #[inline]
    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn style(&self) -> &EditableTextStyle {
        &self.style
    }

    #[inline]
    pub fn is_typing(&self) -> bool {
        self.typing.is_typing()
    }

    #[inline]
    pub fn typing_mode(&self) -> TypingMode {
        self.typing.mode()
    }

    /// `true` only during the frame in which the value changed.
    #[inline]
    pub fn just_updated(&self) -> bool {
        self.edge.just_updated()
    }

    /// `true` only during the frame right after a change.
    #[inline]
    pub fn just_settled(&self) -> bool {
        self.edge.just_settled()
    }

    #[inline]
    pub fn had_composition_last_frame(&self) -> bool {
        self.pipeline.had_composition_last_frame()
    }

    // ----- Value -----

    /// Replace the value programmatically. Bypasses the input filter.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.value {
            self.value = value;
            self.edge.arm();
        }
    }

    /// Clear the value and mark it updated, even when it was already empty.
    pub fn clear(&mut self) {
        self.value.clear();
        self.edge.arm();
    }

    // ----- Typing mode -----

    pub fn enter_typing(&mut self) {
        self.typing.enter_typing();
    }

    pub fn exit_typing(&mut self) {
        self.typing.exit_typing();
    }

    /// Leave typing mode on behalf of the embedding application.
    pub fn deactivate(&mut self) {
        self.typing.exit_typing();
    }

    /// Primary click inside the widget bounds.
    pub fn on_primary_click(&mut self) {
        self.typing.enter_typing();
    }

    /// Secondary click inside the widget bounds: focus and clear at once.
    pub fn on_secondary_click(&mut self) {
        self.typing.enter_typing();
        self.clear();
    }

    // ----- Frame entry points -----

    /// Start-of-frame bookkeeping: advances the change edge and applies the
    /// dismiss-on-outside-click rule. Must run before [`EditableText::draw`].
    pub fn update<H: TextHost + ?Sized>(&mut self, host: &H, bounds: Bounds) {
        self.edge.tick();

        let pointer_over = host.pointer_position().is_some_and(|p| bounds.contains(p));
        if host.is_pointer_down(PointerButton::Primary) && !pointer_over {
            self.typing.exit_typing();
        }
    }

    /// Consume this frame's keystrokes (while typing) and draw the widget's
    /// text layers. Chrome is the embedding layer's job.
    pub fn draw<H, P>(
        &mut self,
        host: &mut H,
        painter: &mut P,
        bounds: Bounds,
        frame: u64,
    ) -> FrameOutcome
    where
        H: TextHost + ?Sized,
        P: TextPainter + ?Sized,
    {
        let outcome = self
            .pipeline
            .step(host, &mut self.value, &mut self.edge, &mut self.typing);

        let typing = self.typing.is_typing();
        if typing {
            painter.draw_ime_candidate_panel(bounds.origin());
        }

        let composition = if typing {
            Some(host.composition())
        } else {
            None
        };
        let view = FrameView {
            value: &self.value,
            placeholder: &self.placeholder,
            composition,
            hovered: host.pointer_position().is_some_and(|p| bounds.contains(p)),
            frame,
        };
        paint_text_layers(painter, &self.style, bounds, view);

        outcome
    }
}
