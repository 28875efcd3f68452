use std::collections::VecDeque;

use egui::{Context, Key, Vec2};
use gfx::{EguiTextHost, editable_text};
use input_core::{EditableText, InputRouting, InputType};

const FIELD_SIZE: Vec2 = Vec2::new(260.0, 28.0);
const HISTORY_LEN: usize = 8;

struct DemoField {
    label: &'static str,
    widget: EditableText,
}

/// A small form with one field per input type.
///
/// `Q` quits, but only while no field is typing: the same key typed into a
/// field must not close the window.
pub struct DemoForm {
    routing: InputRouting,
    host: EguiTextHost,
    fields: Vec<DemoField>,
    history: VecDeque<String>,
    quit_requested: bool,
}

impl Default for DemoForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoForm {
    pub fn new() -> Self {
        let routing = InputRouting::new();
        let fields = vec![
            DemoField {
                label: "Name",
                widget: EditableText::new(InputType::Text, "Enter a name", &routing),
            },
            DemoField {
                label: "Amount",
                widget: EditableText::new(InputType::Integer, "Whole number", &routing),
            },
            DemoField {
                label: "Speed",
                widget: EditableText::new(InputType::Number, "Decimal number", &routing),
            },
        ];
        Self {
            routing,
            host: EguiTextHost::new(),
            fields,
            history: VecDeque::with_capacity(HISTORY_LEN),
            quit_requested: false,
        }
    }

    #[inline]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn values(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|f| (f.label, f.widget.value()))
    }

    /// Build one egui pass.
    pub fn show(&mut self, ctx: &Context) {
        let Self {
            routing,
            host,
            fields,
            history,
            quit_requested,
        } = self;

        host.begin_frame(ctx);

        let blocked = routing.is_blocked();
        if !blocked && ctx.input(|i| i.key_pressed(Key::Q)) {
            *quit_requested = true;
        }

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.label("imefield: egui + wgpu");
            ui.label(if blocked {
                "Typing. Esc or click outside to leave."
            } else {
                "Click a field to type. Right-click clears it. Q quits."
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            for field in fields.iter_mut() {
                ui.horizontal(|ui| {
                    ui.add_sized([64.0, FIELD_SIZE.y], egui::Label::new(field.label));
                    let response = editable_text(ui, &mut field.widget, host, FIELD_SIZE);
                    if response.changed() {
                        log::debug!(
                            target: "platform",
                            "{} ({}) = {:?}",
                            field.label,
                            field.widget.id(),
                            field.widget.value()
                        );
                        if history.len() == HISTORY_LEN {
                            history.pop_front();
                        }
                        history.push_back(format!("{}: {}", field.label, field.widget.value()));
                    }
                });
                ui.add_space(6.0);
            }

            ui.separator();
            for entry in history.iter().rev() {
                ui.label(entry);
            }
        });
    }
}
