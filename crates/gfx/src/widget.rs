use egui::{
    Color32, CursorIcon, FontId, Painter, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use input_core::{Bounds, EditableText};

use crate::host::EguiTextHost;
use crate::painter::EguiTextPainter;

#[inline]
fn to_bounds(rect: Rect) -> Bounds {
    Bounds::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

fn paint_text_field_container(
    painter: &Painter,
    rect: Rect,
    is_typing: bool,
    focus_stroke: Stroke,
) {
    painter.rect_filled(rect, 2.0, Color32::from_rgba_unmultiplied(28, 28, 36, 230));

    let stroke = if is_typing {
        focus_stroke
    } else {
        Stroke::new(1.0, Color32::from_rgb(120, 120, 120))
    };
    painter.rect_stroke(rect, 2.0, stroke, StrokeKind::Outside);
}

/// Lay out, route input to and paint one [`EditableText`].
///
/// Call [`EguiTextHost::begin_frame`] once per pass before the first field.
/// The returned response is marked changed on the pass the value changed.
pub fn editable_text(
    ui: &mut Ui,
    field: &mut EditableText,
    host: &mut EguiTextHost,
    desired_size: Vec2,
) -> Response {
    let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click());
    let bounds = to_bounds(rect);

    // Frame bookkeeping happens once per frame, not once per pass.
    if !host.is_replayed_pass() {
        field.update(&*host, bounds);
    }
    if response.clicked() {
        field.on_primary_click();
    }
    if response.secondary_clicked() {
        field.on_secondary_click();
    }

    let focus_stroke = ui.visuals().selection.stroke;
    paint_text_field_container(ui.painter(), rect, field.is_typing(), focus_stroke);

    let font_id = FontId::proportional(field.style().font_size);
    let mut painter = EguiTextPainter::new(ui.painter_at(rect), font_id, rect);
    let frame = ui.ctx().cumulative_pass_nr();
    field.draw(host, &mut painter, bounds, frame);

    if field.just_updated() {
        response.mark_changed();
    }

    let id = response.id;
    if field.is_typing() {
        // Keep egui focus sticky so other widgets don't react to our keys.
        ui.memory_mut(|mem| {
            mem.request_focus(id);
            mem.set_focus_lock_filter(
                id,
                egui::EventFilter {
                    tab: true,
                    horizontal_arrows: true,
                    vertical_arrows: true,
                    escape: true,
                },
            );
        });
        // Caret blink.
        ui.ctx().request_repaint();
    } else if response.has_focus() {
        ui.memory_mut(|mem| mem.surrender_focus(id));
    }

    if response.hovered() {
        ui.output_mut(|o| o.cursor_icon = CursorIcon::Text);
    }

    response
}
