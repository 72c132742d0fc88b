//! Checkerboard dither overlays.
//!
//! On a black-and-white screen a pressed or hovered key cannot be tinted,
//! so it gets a checkerboard of 1px dots instead. The content underneath
//! stays readable.

use egui::{Color32, Painter, Pos2, Rect, Vec2};

/// Dot positions of a checkerboard over `rect`.
///
/// `spacing` 1 marks every other pixel; larger values spread the dots out
/// for a lighter tone. Bounds are clamped inward once so every dot lies
/// fully inside `rect`.
pub fn checker_dots(rect: Rect, spacing: u32) -> impl Iterator<Item = Pos2> {
    let step = spacing.max(1) as i32;
    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    (y0..y1).step_by(step as usize).flat_map(move |y| {
        let row = (y - y0) / step;
        let offset = if row % 2 == 0 { 0 } else { step };
        (x0 + offset..x1)
            .step_by((step * 2) as usize)
            .map(move |x| Pos2::new(x as f32, y as f32))
    })
}

/// Paint a checkerboard of `color` dots over `rect`.
pub fn paint_checker(painter: &Painter, rect: Rect, color: Color32, spacing: u32) {
    for dot in checker_dots(rect, spacing) {
        painter.rect_filled(Rect::from_min_size(dot, Vec2::splat(1.0)), 0.0, color);
    }
}

/// Dense overlay for a key held down.
pub fn paint_pressed(painter: &Painter, rect: Rect) {
    paint_checker(painter, rect, Color32::BLACK, 1);
}

/// Sparse overlay for a key under the pointer.
pub fn paint_hover(painter: &Painter, rect: Rect) {
    paint_checker(painter, rect, Color32::BLACK, 2);
}

/// Offset dithered drop shadow under a floating window (e.g. the about box).
pub fn paint_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow = window_rect.translate(Vec2::splat(4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("igore_shadows"),
    ));
    paint_checker(&painter, shadow, Color32::BLACK, 2);
}
