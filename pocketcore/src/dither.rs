//! Checkerboard dithering for pressed keys and window shadows.
//!
//! Filling with solid black would hide the key label, so highlights paint
//! every other pixel instead.

use egui::{Color32, Painter, Pos2, Rect};

/// How tightly the checkerboard is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Every other pixel. Used for pressed keys.
    Dense,
    /// Every other 2px cell. Used for hover and shadows.
    Sparse,
}

impl Density {
    fn step(self) -> i32 {
        match self {
            Density::Dense => 1,
            Density::Sparse => 2,
        }
    }
}

/// Pixel origins of the checkerboard covering `rect`.
///
/// The rect is shrunk to whole pixels first so every point lies inside it.
pub fn checker_points(rect: Rect, density: Density) -> impl Iterator<Item = Pos2> {
    let step = density.step();
    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    (y0..y1.max(y0)).step_by(step as usize).flat_map(move |y| {
        let row = (y - y0) / step;
        let offset = if row % 2 == 0 { 0 } else { step };
        (x0 + offset..x1.max(x0)).step_by((step * 2) as usize)
            .map(move |x| Pos2::new(x as f32, y as f32))
    })
}

pub fn fill(painter: &Painter, rect: Rect, color: Color32, density: Density) {
    let pixel = egui::Vec2::splat(1.0);
    for p in checker_points(rect, density) {
        painter.rect_filled(Rect::from_min_size(p, pixel), 0.0, color);
    }
}

/// Dithered drop shadow offset 4px down and right of a window.
/// Call after `egui::Window::show()`.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow = window_rect.translate(egui::vec2(4.0, 4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("pocket_shadows"),
    ));
    fill(&painter, shadow, Color32::BLACK, Density::Sparse);
}
