use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2, output::IMEOutput};
use input_core::{Point, Rgba, TextPainter};

const OUTLINE: Color32 = Color32::from_rgb(16, 16, 16);
const OUTLINE_OFFSETS: [Vec2; 4] = [
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.0, 1.0),
];

#[inline]
pub fn to_color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.0, c.1, c.2, c.3)
}

#[inline]
fn to_pos2(p: Point) -> Pos2 {
    Pos2::new(p.x, p.y)
}

/// `egui`-backed [`TextPainter`] for one widget's text layers.
///
/// Text is drawn with a 1px dark outline so it stays readable over any
/// background. The IME candidate panel is placed through
/// `PlatformOutput::ime`; `egui-winit` forwards it to the OS.
pub struct EguiTextPainter {
    painter: Painter,
    font_id: FontId,
    widget_rect: Rect,
}

impl EguiTextPainter {
    pub fn new(painter: Painter, font_id: FontId, widget_rect: Rect) -> Self {
        Self {
            painter,
            font_id,
            widget_rect,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.font_id.size * 1.2
    }
}

impl TextPainter for EguiTextPainter {
    fn measure_text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        // egui collapses the advance of plain spaces at line ends; NBSP keeps it.
        let text = text.replace(' ', "\u{00A0}");
        self.painter.ctx().fonts(|f| {
            f.layout_no_wrap(text, self.font_id.clone(), Color32::WHITE)
                .rect
                .width()
        })
    }

    fn draw_text(&mut self, text: &str, pos: Point, color: Rgba) {
        if text.is_empty() {
            return;
        }
        let pos = to_pos2(pos);
        for offset in OUTLINE_OFFSETS {
            self.painter.text(
                pos + offset,
                Align2::LEFT_TOP,
                text,
                self.font_id.clone(),
                OUTLINE,
            );
        }
        self.painter.text(
            pos,
            Align2::LEFT_TOP,
            text,
            self.font_id.clone(),
            to_color32(color),
        );
    }

    fn draw_ime_candidate_panel(&mut self, anchor: Point) {
        let rect = Rect::from_min_size(to_pos2(anchor), self.widget_rect.size());
        let cursor_rect =
            Rect::from_min_size(to_pos2(anchor), Vec2::new(1.0, self.line_height()));
        self.painter
            .ctx()
            .output_mut(|o| o.ime = Some(IMEOutput { rect, cursor_rect }));
    }
}
