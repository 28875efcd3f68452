//! Presentation: value or placeholder, composition overlay, blinking caret.

use crate::geometry::{Bounds, Point, Rgba};
use crate::host::TextPainter;

/// Visual configuration of an editable-text widget.
#[derive(Clone, Debug, PartialEq)]
pub struct EditableTextStyle {
    /// Value color.
    pub text: Rgba,
    /// Tint applied to value and placeholder while the pointer hovers.
    pub hover_tint: Rgba,
    /// Placeholder base color, multiplied by the current tint.
    pub placeholder: Rgba,
    /// Accent for the live IME composition.
    pub composition: Rgba,
    pub caret: Rgba,
    pub caret_glyph: &'static str,
    /// Blink cycle length in frames; the caret shows for the first half.
    pub blink_period: u64,
    /// Offset of the text origin from the widget origin.
    pub padding: f32,
    pub font_size: f32,
}

impl Default for EditableTextStyle {
    fn default() -> Self {
        Self {
            text: Rgba::WHITE,
            hover_tint: Rgba::rgb(180, 180, 180),
            placeholder: Rgba::GRAY,
            composition: Rgba::rgb(255, 240, 20),
            caret: Rgba::WHITE,
            caret_glyph: "|",
            blink_period: 20,
            padding: 4.0,
            font_size: 16.0,
        }
    }
}

/// `true` during the "on" half of the blink cycle.
pub fn caret_visible(frame: u64, blink_period: u64) -> bool {
    let period = blink_period.max(2);
    frame % period < period / 2
}

/// Everything the presentation layer reads for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
    /// Live composition; `None` when the widget is not typing.
    pub composition: Option<&'a str>,
    pub hovered: bool,
    pub frame: u64,
}

impl FrameView<'_> {
    #[inline]
    pub fn is_typing(&self) -> bool {
        self.composition.is_some()
    }
}

/// Draw the text layers of the widget and return the final cursor position
/// (right after the value and composition).
pub fn paint_text_layers<P: TextPainter + ?Sized>(
    painter: &mut P,
    style: &EditableTextStyle,
    bounds: Bounds,
    view: FrameView<'_>,
) -> Point {
    let mut pos = bounds.origin().offset(style.padding, style.padding);
    let tint = if view.hovered {
        style.hover_tint
    } else {
        Rgba::WHITE
    };

    if !view.value.is_empty() {
        painter.draw_text(view.value, pos, style.text.multiply_rgb(tint));
    } else {
        painter.draw_text(view.placeholder, pos, style.placeholder.multiply_rgb(tint));
    }

    let Some(composition) = view.composition else {
        return pos;
    };

    // The cursor follows the value, never the placeholder.
    pos.x += painter.measure_text_width(view.value);

    if !composition.is_empty() {
        painter.draw_text(composition, pos, style.composition);
        pos.x += painter.measure_text_width(composition);
    }

    if caret_visible(view.frame, style.blink_period) {
        painter.draw_text(style.caret_glyph, pos, style.caret);
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        texts: Vec<(String, Point, Rgba)>,
    }

    impl TextPainter for Recorder {
        fn measure_text_width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 10.0
        }
        fn draw_text(&mut self, text: &str, pos: Point, color: Rgba) {
            self.texts.push((text.to_owned(), pos, color));
        }
        fn draw_ime_candidate_panel(&mut self, _anchor: Point) {}
    }

    fn view<'a>(value: &'a str, composition: Option<&'a str>, frame: u64) -> FrameView<'a> {
        FrameView {
            value,
            placeholder: "Enter text",
            composition,
            hovered: false,
            frame,
        }
    }

    const BOUNDS: Bounds = Bounds::new(100.0, 50.0, 200.0, 30.0);

    #[test]
    fn caret_blinks_on_first_half_of_cycle() {
        assert!(caret_visible(0, 20));
        assert!(caret_visible(9, 20));
        assert!(!caret_visible(10, 20));
        assert!(!caret_visible(19, 20));
        assert!(caret_visible(20, 20));
    }

    #[test]
    fn degenerate_blink_period_still_blinks() {
        assert!(caret_visible(0, 0));
        assert!(!caret_visible(1, 0));
    }

    #[test]
    fn placeholder_when_empty_and_not_typing() {
        let mut p = Recorder::default();
        let style = EditableTextStyle::default();
        paint_text_layers(&mut p, &style, BOUNDS, view("", None, 0));

        assert_eq!(p.texts.len(), 1);
        let (text, pos, color) = &p.texts[0];
        assert_eq!(text, "Enter text");
        assert_eq!(*pos, Point::new(104.0, 54.0));
        assert_eq!(*color, Rgba::GRAY);
    }

    #[test]
    fn hover_tints_value() {
        let mut p = Recorder::default();
        let style = EditableTextStyle::default();
        let mut v = view("abc", None, 0);
        v.hovered = true;
        paint_text_layers(&mut p, &style, BOUNDS, v);
        assert_eq!(p.texts[0].2, Rgba::rgb(180, 180, 180));
    }

    #[test]
    fn composition_and_caret_follow_value() {
        let mut p = Recorder::default();
        let style = EditableTextStyle::default();
        let end = paint_text_layers(&mut p, &style, BOUNDS, view("ab", Some("한"), 3));

        let drawn: Vec<&str> = p.texts.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(drawn, ["ab", "한", "|"]);
        assert_eq!(p.texts[1].1.x, 104.0 + 20.0);
        assert_eq!(p.texts[1].2, style.composition);
        assert_eq!(p.texts[2].1.x, 104.0 + 30.0);
        assert_eq!(end.x, 134.0);
    }

    #[test]
    fn caret_hidden_in_off_half() {
        let mut p = Recorder::default();
        let style = EditableTextStyle::default();
        paint_text_layers(&mut p, &style, BOUNDS, view("ab", Some(""), 15));
        let drawn: Vec<&str> = p.texts.iter().map(|(t, _, _)| t.as_str()).collect();
        assert_eq!(drawn, ["ab"]);
    }

    #[test]
    fn typing_on_empty_value_puts_caret_at_text_origin() {
        let mut p = Recorder::default();
        let style = EditableTextStyle::default();
        paint_text_layers(&mut p, &style, BOUNDS, view("", Some(""), 0));
        // The placeholder stays visible while typing into an empty value.
        assert_eq!(p.texts[0].0, "Enter text");
        let caret = p.texts.last().unwrap();
        assert_eq!(caret.0, "|");
        assert_eq!(caret.1, Point::new(104.0, 54.0));
    }
}
