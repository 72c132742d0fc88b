//! Custom widgets: keypad keys, the numeric screen and the status strip.

use crate::dither;
use crate::theme::IgoreColors;
use egui::{Align2, FontId, Response, Sense, Stroke, Ui, Vec2, Widget};

/// Visual weight of a keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// White key, black label.
    Plain,
    /// Double outline for secondary functions.
    Outlined,
    /// Solid black key, white label.
    Inverted,
}

/// A fixed-size key: 1px outline, dithered while hovered or pressed.
pub struct KeyButton<'a> {
    label: &'a str,
    size: Vec2,
    style: KeyStyle,
    font_size: f32,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, size: Vec2) -> Self {
        Self { label, size, style: KeyStyle::Plain, font_size: 18.0 }
    }

    pub fn style(mut self, style: KeyStyle) -> Self {
        self.style = style;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let stroke = Stroke::new(1.0, IgoreColors::BLACK);

            let (fill, text) = match self.style {
                KeyStyle::Inverted => (IgoreColors::BLACK, IgoreColors::WHITE),
                KeyStyle::Plain | KeyStyle::Outlined => (IgoreColors::WHITE, IgoreColors::BLACK),
            };
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, stroke);
            if self.style == KeyStyle::Outlined {
                painter.rect_stroke(rect.shrink(3.0), 0.0, stroke);
            }

            let pressed = response.is_pointer_button_down_on();
            if pressed {
                dither::paint_pressed(painter, rect);
            } else if response.hovered() && self.style != KeyStyle::Inverted {
                dither::paint_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(self.font_size),
                if pressed { IgoreColors::WHITE } else { text },
            );
        }

        response
    }
}

/// Right-aligned numeric screen in an outlined box.
pub fn lcd_display(ui: &mut Ui, text: &str, height: f32, font_size: f32) {
    egui::Frame::none()
        .fill(IgoreColors::WHITE)
        .stroke(Stroke::new(1.0, IgoreColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
        .show(ui, |ui| {
            ui.set_min_height(height);
            ui.set_max_height(height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .font(FontId::proportional(font_size))
                        .color(IgoreColors::BLACK)
                        .strong(),
                );
            });
        });
}

/// Status bar: white bg, 1px black border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(IgoreColors::WHITE)
        .stroke(Stroke::new(1.0, IgoreColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).small());
        });
}
