//! i-gore theme: black on white, square corners, 1px outlines.
//!
//! Designed to read well on e-ink panels as well as ordinary monitors.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Palette. Grey is reserved for text selection.
pub struct IgoreColors;

impl IgoreColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    pub const SELECTION: Color32 = Color32::from_rgb(160, 160, 160);
}

/// Sizes applied to an egui context by [`IgoreTheme::apply`].
pub struct IgoreTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for IgoreTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl IgoreTheme {
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        style.visuals = Self::visuals();

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    fn visuals() -> Visuals {
        let mut visuals = Visuals::light();

        visuals.window_fill = IgoreColors::WHITE;
        visuals.panel_fill = IgoreColors::WHITE;
        visuals.faint_bg_color = IgoreColors::WHITE;
        visuals.extreme_bg_color = IgoreColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, IgoreColors::BLACK);

        let outline = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = IgoreColors::WHITE;
            ws.weak_bg_fill = IgoreColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, IgoreColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, IgoreColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        outline(&mut visuals.widgets.noninteractive);
        outline(&mut visuals.widgets.inactive);
        outline(&mut visuals.widgets.hovered);
        outline(&mut visuals.widgets.active);
        outline(&mut visuals.widgets.open);

        // Shadows are dithered by hand; see dither::paint_window_shadow.
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = IgoreColors::SELECTION;
        visuals.selection.stroke = Stroke::new(1.0, IgoreColors::BLACK);

        visuals
    }
}

/// Outlined strip that holds the menu buttons.
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(IgoreColors::WHITE)
        .stroke(Stroke::new(1.0, IgoreColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
