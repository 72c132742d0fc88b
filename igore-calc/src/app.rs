//! Calculator window

use egui::Context;
use igore_calc::display;
use igore_calc::keypad::{self, Button, ButtonKind, Outcome, Status, LAYOUT};
use igore_calc::{CalcSettings, Calculator, Locale, ERROR_SENTINEL};
use igore_core::dither;
use igore_core::repaint::RepaintController;
use igore_core::safety;
use igore_core::theme::{menu_bar, IgoreColors};
use igore_core::widgets::{lcd_display, status_bar, KeyButton, KeyStyle};
use std::path::PathBuf;

pub const WINDOW_WIDTH: f32 = 300.0;
const HEIGHT_WITH_STATUS: f32 = 450.0;
const HEIGHT_WITHOUT_STATUS: f32 = 420.0;
const KEY_HEIGHT: f32 = 52.0;
const KEY_GAP: f32 = 6.0;

pub fn window_height(show_status: bool) -> f32 {
    if show_status {
        HEIGHT_WITH_STATUS
    } else {
        HEIGHT_WITHOUT_STATUS
    }
}

pub struct CalcApp {
    calc: Calculator,
    display_value: String,
    status: Status,
    settings: CalcSettings,
    settings_path: PathBuf,
    prev_show_status: bool,
    show_about: bool,
    repaint: RepaintController,
}

impl CalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: CalcSettings, settings_path: PathBuf) -> Self {
        let calc = Calculator::new();
        Self {
            display_value: calc.display(),
            calc,
            status: Status::Ready,
            prev_show_status: settings.show_status,
            settings,
            settings_path,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn press(&mut self, button: Button) {
        let calc = &mut self.calc;
        let outcome = safety::catch_or_else(
            |message| Outcome {
                display: ERROR_SENTINEL.to_string(),
                status: Status::Internal(message.to_string()),
            },
            || keypad::dispatch(calc, button),
        );
        self.display_value = outcome.display;
        self.status = outcome.status;
    }

    fn update_settings(&mut self, change: impl FnOnce(&mut CalcSettings)) {
        change(&mut self.settings);
        self.settings.save(&self.settings_path);
        self.repaint.mark_needs_repaint();
    }

    fn key_style(kind: ButtonKind) -> KeyStyle {
        match kind {
            ButtonKind::Digit => KeyStyle::Plain,
            ButtonKind::Function | ButtonKind::Clear => KeyStyle::Outlined,
            ButtonKind::Operator => KeyStyle::Inverted,
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let text = display::render(&self.display_value, self.settings.locale);
        lcd_display(ui, &text, 56.0, 32.0);
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let key_w = (ui.available_width() - KEY_GAP * 3.0) / 4.0;
        let size = egui::vec2(key_w, KEY_HEIGHT);

        let mut clicked = None;
        ui.spacing_mut().item_spacing = egui::vec2(KEY_GAP, KEY_GAP);
        for row in LAYOUT.iter() {
            ui.horizontal(|ui| {
                for &button in row {
                    let key = KeyButton::new(button.label(), size).style(Self::key_style(button.kind()));
                    if ui.add(key).clicked() {
                        clicked = Some(button);
                    }
                }
            });
        }

        if let Some(button) = clicked {
            self.press(button);
        }
    }

    fn render_menu(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("view", |ui| {
                    for locale in Locale::ALL {
                        if ui.selectable_label(self.settings.locale == locale, locale.native_name()).clicked() {
                            self.update_settings(|s| s.locale = locale);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    let mut show_status = self.settings.show_status;
                    if ui.checkbox(&mut show_status, "status line").changed() {
                        self.update_settings(|s| s.show_status = show_status);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        let resp = egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("+ − × ÷ evaluate left to right:");
                ui.label("  2 + 3 × 4 = 20");
                ui.label("± √ x² act on the entry at once.");
                ui.label("AC clears everything, errors included.");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            dither::paint_window_shadow(ctx, r.response.rect);
        }
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        if self.settings.show_status != self.prev_show_status {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                WINDOW_WIDTH,
                window_height(self.settings.show_status),
            )));
            self.prev_show_status = self.settings.show_status;
        }

        self.render_menu(ctx);

        if self.settings.show_status {
            let text = self.settings.locale.status_text(&self.status);
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                status_bar(ui, &text);
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(IgoreColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }

        self.repaint.end_frame(ctx);
    }
}
