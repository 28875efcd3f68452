//! Frame-by-frame scenarios driving `EditableText` through a scripted host.

use input_core::{
    Bounds, EditableText, FrameOutcome, InputRouting, InputType, Key, Point, PointerButton, Rgba,
    TextHost, TextPainter, append_typed, delete_last_char,
};

const BOUNDS: Bounds = Bounds::new(0.0, 0.0, 200.0, 30.0);
const INSIDE: Point = Point::new(10.0, 10.0);
const OUTSIDE: Point = Point::new(500.0, 500.0);

/// One frame of scripted input.
#[derive(Clone, Debug, Default)]
struct Frame {
    typed: &'static str,
    backspaces: usize,
    escape: bool,
    primary_down: bool,
    pointer: Option<Point>,
    /// New composition after the IME processes this frame; `None` keeps it.
    composition: Option<&'static str>,
}

#[derive(Default)]
struct ScriptedHost {
    frame: Frame,
    composition: String,
    capture_requests: usize,
}

impl ScriptedHost {
    fn load(&mut self, frame: Frame) {
        self.frame = frame;
    }
}

impl TextHost for ScriptedHost {
    fn begin_text_capture(&mut self) {
        self.capture_requests += 1;
    }

    fn process_composition(&mut self) {
        if let Some(next) = self.frame.composition.take() {
            self.composition = next.to_owned();
        }
    }

    fn pending_input_text(&mut self, current: &str) -> String {
        let mut out = current.to_owned();
        for _ in 0..self.frame.backspaces {
            delete_last_char(&mut out);
        }
        append_typed(&mut out, self.frame.typed);
        out
    }

    fn composition(&self) -> &str {
        &self.composition
    }

    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::Escape => self.frame.escape,
            Key::Backspace => self.frame.backspaces > 0,
        }
    }

    fn is_pointer_down(&self, button: PointerButton) -> bool {
        button == PointerButton::Primary && self.frame.primary_down
    }

    fn pointer_position(&self) -> Option<Point> {
        self.frame.pointer
    }
}

#[derive(Default)]
struct NullPainter {
    ime_anchors: Vec<Point>,
    drawn: Vec<String>,
}

impl TextPainter for NullPainter {
    fn measure_text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 8.0
    }
    fn draw_text(&mut self, text: &str, _pos: Point, _color: Rgba) {
        self.drawn.push(text.to_owned());
    }
    fn draw_ime_candidate_panel(&mut self, anchor: Point) {
        self.ime_anchors.push(anchor);
    }
}

struct Harness {
    routing: InputRouting,
    field: EditableText,
    host: ScriptedHost,
    painter: NullPainter,
    frame_no: u64,
}

impl Harness {
    fn new(input_type: InputType) -> Self {
        let routing = InputRouting::new();
        let field = EditableText::new(input_type, "Enter text", &routing);
        Self {
            routing,
            field,
            host: ScriptedHost::default(),
            painter: NullPainter::default(),
            frame_no: 0,
        }
    }

    fn typing(input_type: InputType) -> Self {
        let mut h = Self::new(input_type);
        h.field.on_primary_click();
        h
    }

    fn run(&mut self, frame: Frame) -> FrameOutcome {
        self.host.load(frame);
        self.painter.drawn.clear();
        self.field.update(&self.host, BOUNDS);
        let outcome = self
            .field
            .draw(&mut self.host, &mut self.painter, BOUNDS, self.frame_no);
        self.frame_no += 1;
        outcome
    }

    fn type_text(&mut self, typed: &'static str) -> FrameOutcome {
        self.run(Frame {
            typed,
            ..Frame::default()
        })
    }
}

#[test]
fn typed_text_is_committed() {
    let mut h = Harness::typing(InputType::Text);
    assert_eq!(h.type_text("he"), FrameOutcome::Committed);
    assert_eq!(h.type_text("llo"), FrameOutcome::Committed);
    assert_eq!(h.field.value(), "hello");
    assert_eq!(h.host.capture_requests, 2);
}

#[test]
fn just_updated_is_true_for_exactly_one_frame() {
    let mut h = Harness::typing(InputType::Text);

    h.type_text("a");
    assert!(h.field.just_updated());

    h.run(Frame::default());
    assert!(!h.field.just_updated());
    assert!(h.field.just_settled());

    h.run(Frame::default());
    assert!(!h.field.just_updated());
    assert!(!h.field.just_settled());
}

#[test]
fn integer_field_filters_candidates() {
    let mut h = Harness::typing(InputType::Integer);

    assert_eq!(h.type_text("12a3"), FrameOutcome::Rejected);
    assert_eq!(h.field.value(), "");

    assert_eq!(h.type_text("123"), FrameOutcome::Committed);
    assert_eq!(h.field.value(), "123");

    assert_eq!(h.type_text("x"), FrameOutcome::Rejected);
    assert_eq!(h.field.value(), "123");
}

#[test]
fn integer_field_can_be_emptied_with_backspace() {
    let mut h = Harness::typing(InputType::Integer);
    h.type_text("7");
    let outcome = h.run(Frame {
        backspaces: 1,
        ..Frame::default()
    });
    assert_eq!(outcome, FrameOutcome::Committed);
    assert_eq!(h.field.value(), "");
}

#[test]
fn number_field_filters_candidates() {
    let mut h = Harness::typing(InputType::Number);

    assert_eq!(h.type_text("12.5"), FrameOutcome::Committed);
    assert_eq!(h.field.value(), "12.5");

    assert_eq!(h.type_text(".3"), FrameOutcome::Rejected);
    assert_eq!(h.field.value(), "12.5");

    h.field.set_value("");
    assert_eq!(h.type_text(" 7 "), FrameOutcome::Committed);
    assert_eq!(h.field.value(), " 7 ");
}

#[test]
fn number_field_only_takes_complete_tokens() {
    let mut h = Harness::typing(InputType::Number);

    // A trailing decimal point is not a number yet, so it is dropped.
    assert_eq!(h.type_text("1"), FrameOutcome::Committed);
    assert_eq!(h.type_text("."), FrameOutcome::Rejected);
    assert_eq!(h.type_text("5"), FrameOutcome::Committed);
    assert_eq!(h.field.value(), "15");

    // Pasting a whole token in one frame works.
    h.field.set_value("");
    assert_eq!(h.type_text("1.5"), FrameOutcome::Committed);
    assert_eq!(h.field.value(), "1.5");
}

#[test]
fn number_field_cannot_be_emptied_with_backspace() {
    let mut h = Harness::typing(InputType::Number);
    h.type_text("1");
    let outcome = h.run(Frame {
        backspaces: 1,
        ..Frame::default()
    });
    assert_eq!(outcome, FrameOutcome::Rejected);
    assert_eq!(h.field.value(), "1");

    // Right-click still clears it.
    h.field.on_secondary_click();
    assert_eq!(h.field.value(), "");
}

#[test]
fn backspace_during_composition_only_edits_composition() {
    let mut h = Harness::typing(InputType::Text);
    h.type_text("ab");

    // The IME starts composing.
    h.run(Frame {
        composition: Some("ㅎ"),
        ..Frame::default()
    });
    assert!(h.field.had_composition_last_frame());

    // Backspace while composing: the host would drop 'b' as well.
    let outcome = h.run(Frame {
        backspaces: 1,
        composition: Some(""),
        ..Frame::default()
    });
    assert_eq!(outcome, FrameOutcome::CompositionBackspace);
    assert_eq!(h.field.value(), "ab");

    // With no composition left, backspace edits the value.
    let outcome = h.run(Frame {
        backspaces: 1,
        ..Frame::default()
    });
    assert_eq!(outcome, FrameOutcome::Committed);
    assert_eq!(h.field.value(), "a");
}

#[test]
fn composition_is_drawn_after_value_while_typing() {
    let mut h = Harness::typing(InputType::Text);
    h.type_text("ab");
    h.frame_no = 0; // caret on
    h.run(Frame {
        composition: Some("한"),
        ..Frame::default()
    });
    assert_eq!(h.painter.drawn, ["ab", "한", "|"]);
    assert_eq!(h.painter.ime_anchors.last(), Some(&BOUNDS.origin()));
}

#[test]
fn placeholder_drawn_when_idle() {
    let mut h = Harness::new(InputType::Text);
    assert_eq!(h.run(Frame::default()), FrameOutcome::Skipped);
    assert_eq!(h.painter.drawn, ["Enter text"]);
    assert!(h.painter.ime_anchors.is_empty());
}

#[test]
fn escape_leaves_typing_without_committing() {
    let mut h = Harness::typing(InputType::Text);
    h.type_text("a");

    let outcome = h.run(Frame {
        typed: "b",
        escape: true,
        ..Frame::default()
    });
    assert_eq!(outcome, FrameOutcome::Dismissed);
    assert_eq!(h.field.value(), "a");
    assert!(!h.field.is_typing());
    assert!(!h.routing.is_blocked());

    // Later keystrokes are ignored.
    assert_eq!(h.type_text("c"), FrameOutcome::Skipped);
    assert_eq!(h.field.value(), "a");
}

#[test]
fn primary_press_outside_dismisses_before_pipeline() {
    let mut h = Harness::typing(InputType::Text);
    let outcome = h.run(Frame {
        typed: "z",
        primary_down: true,
        pointer: Some(OUTSIDE),
        ..Frame::default()
    });
    assert_eq!(outcome, FrameOutcome::Skipped);
    assert!(!h.field.is_typing());
    assert_eq!(h.field.value(), "");
    assert!(!h.routing.is_blocked());
}

#[test]
fn primary_press_inside_keeps_typing() {
    let mut h = Harness::typing(InputType::Text);
    h.run(Frame {
        primary_down: true,
        pointer: Some(INSIDE),
        ..Frame::default()
    });
    assert!(h.field.is_typing());
}

#[test]
fn primary_press_without_pointer_counts_as_outside() {
    let mut h = Harness::typing(InputType::Text);
    h.run(Frame {
        primary_down: true,
        pointer: None,
        ..Frame::default()
    });
    assert!(!h.field.is_typing());
}

#[test]
fn right_click_clears_and_focuses_in_one_call() {
    let mut h = Harness::new(InputType::Text);
    h.field.set_value("keep me");
    h.run(Frame::default());

    h.field.on_secondary_click();
    assert!(h.field.is_typing());
    assert_eq!(h.field.value(), "");
    assert!(h.field.just_updated());
}

#[test]
fn enter_typing_twice_matches_once() {
    let mut once = Harness::new(InputType::Text);
    once.field.enter_typing();

    let mut twice = Harness::new(InputType::Text);
    twice.field.enter_typing();
    twice.field.enter_typing();

    assert_eq!(once.field.typing_mode(), twice.field.typing_mode());
    assert_eq!(once.routing.is_blocked(), twice.routing.is_blocked());
    assert_eq!(twice.routing.owner(), Some(twice.field.id()));
}

#[test]
fn value_is_never_lost_over_mixed_frames() {
    let mut h = Harness::typing(InputType::Text);
    let script = [
        Frame {
            typed: "x",
            ..Frame::default()
        },
        Frame {
            backspaces: 3,
            ..Frame::default()
        },
        Frame {
            composition: Some("かな"),
            ..Frame::default()
        },
        Frame {
            typed: "かな",
            composition: Some(""),
            ..Frame::default()
        },
        Frame {
            escape: true,
            ..Frame::default()
        },
    ];
    for frame in script {
        h.run(frame);
        // Always a valid string, never a dangling state.
        assert!(h.field.value().len() <= "かな".len());
    }
    assert_eq!(h.field.value(), "かな");
}

#[test]
fn two_fields_share_one_routing_block() {
    let routing = InputRouting::new();
    let mut a = EditableText::new(InputType::Text, "", &routing);
    let mut b = EditableText::new(InputType::Text, "", &routing);

    a.on_primary_click();
    b.on_primary_click();
    assert_eq!(routing.owner(), Some(b.id()));

    a.deactivate();
    assert!(routing.is_blocked());

    b.deactivate();
    assert!(!routing.is_blocked());
}
