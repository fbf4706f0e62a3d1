//! Custom widgets — pure black and white, dithered overlays

use egui::{Response, Ui, Widget};

use crate::dither;
use crate::theme::PocketColors;

/// A fixed-size key: white face, 1px outline, dithered while held.
pub struct KeypadButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    font_size: f32,
    inverted: bool,
}

impl<'a> KeypadButton<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self {
            label,
            size,
            font_size: 20.0,
            inverted: false,
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Black face with white text, for controls that stand apart from the
    /// digit keys.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

impl<'a> Widget for KeypadButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let (face, ink) = if self.inverted {
                (PocketColors::BLACK, PocketColors::WHITE)
            } else {
                (PocketColors::WHITE, PocketColors::BLACK)
            };

            painter.rect_filled(rect, 0.0, face);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, PocketColors::BLACK));

            let held = response.is_pointer_button_down_on();
            if held {
                dither::fill(painter, rect.shrink(2.0), ink, dither::Density::Dense);
            } else if response.hovered() {
                dither::fill(painter, rect.shrink(2.0), ink, dither::Density::Sparse);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                ink,
            );
        }

        response
    }
}

/// The calculator readout: boxed, right aligned, single line.
pub fn readout(ui: &mut Ui, text: &str, font_size: f32) {
    let height = font_size + 20.0;
    egui::Frame::none()
        .fill(PocketColors::WHITE)
        .stroke(egui::Stroke::new(1.0, PocketColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
        .show(ui, |ui| {
            ui.set_min_height(height);
            ui.set_max_height(height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(text)
                            .font(egui::FontId::proportional(font_size))
                            .strong()
                            .color(PocketColors::BLACK),
                    )
                    .truncate(true),
                );
            });
        });
}
