//! Pocket theme — black keys on white
//!
//! Pure black and white with 1px outlines, no rounding and no shadows.
//! Emphasis comes from dithering (see [`crate::dither`]).

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The only two colors the calculator draws with.
pub struct PocketColors;

impl PocketColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Font sizes and spacing
pub struct PocketTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub font_size_key: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for PocketTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            font_size_key: 20.0,
            window_padding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl PocketTheme {
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_key, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = PocketColors::WHITE;
        visuals.panel_fill = PocketColors::WHITE;
        visuals.faint_bg_color = PocketColors::WHITE;
        visuals.extreme_bg_color = PocketColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, PocketColors::BLACK);

        let outline = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = PocketColors::WHITE;
            ws.weak_bg_fill = PocketColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, PocketColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, PocketColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        outline(&mut visuals.widgets.noninteractive);
        outline(&mut visuals.widgets.inactive);
        outline(&mut visuals.widgets.hovered);
        outline(&mut visuals.widgets.active);
        outline(&mut visuals.widgets.open);

        // Shadows are dithered by hand.
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(PocketColors::WHITE)
        .stroke(Stroke::new(1.0, PocketColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip Tab and Cmd +/-/= before widgets see them.
///
/// Tab would cycle focus onto the menu, and Cmd with `+`, `-` or `=` would
/// zoom the UI and also press a calculator key. Call at the top of
/// `update()`.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| !is_special_key(event));
    });
}

fn is_special_key(event: &egui::Event) -> bool {
    match event {
        egui::Event::Key { key: egui::Key::Tab, .. } => true,
        egui::Event::Text(text) => text.contains('\t'),
        egui::Event::Key { key, modifiers, .. } => {
            modifiers.command && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)
        }
        _ => false,
    }
}
