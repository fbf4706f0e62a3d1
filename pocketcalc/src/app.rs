//! PocketCalc window

use std::path::PathBuf;

use egui::{Context, Key};
use pocketcalc::engine::{CLEAR, EQUALS};
use pocketcalc::keypad;
use pocketcalc::{Renderer, Session};
use pocketcore::repaint::RepaintController;
use pocketcore::safety::catch_or;
use pocketcore::theme::{consume_special_keys, menu_bar, PocketColors};
use pocketcore::widgets::{readout, KeypadButton};
use pocketcore::Preferences;

const KEY_HEIGHT: f32 = 48.0;

/// egui draws every frame from the calculator directly, so the render
/// callback only has to ask for one more frame.
#[derive(Default)]
struct FrameRequest {
    dirty: bool,
}

impl Renderer for FrameRequest {
    fn render(&mut self, _display: &str) {
        self.dirty = true;
    }
}

pub struct PocketCalcApp {
    session: Session<FrameRequest>,
    prefs: Preferences,
    /// What is on disk, so exit only writes when something changed.
    saved_prefs: Preferences,
    prefs_path: PathBuf,
    show_about: bool,
    repaint: RepaintController,
}

impl PocketCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, prefs: Preferences, prefs_path: PathBuf) -> Self {
        Self::with_preferences(prefs, prefs_path)
    }

    fn with_preferences(prefs: Preferences, prefs_path: PathBuf) -> Self {
        Self {
            session: Session::new(FrameRequest::default()),
            saved_prefs: prefs.clone(),
            prefs,
            prefs_path,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn track_window_size(&mut self, ctx: &Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.prefs.window_width = rect.width();
            self.prefs.window_height = rect.height();
        }
    }

    fn persist_preferences(&mut self) {
        if self.prefs == self.saved_prefs {
            return;
        }
        match self.prefs.save(&self.prefs_path) {
            Ok(()) => {
                tracing::debug!(path = %self.prefs_path.display(), "preferences saved");
                self.saved_prefs = self.prefs.clone();
            }
            Err(e) => tracing::warn!(path = %self.prefs_path.display(), error = %e, "could not save preferences"),
        }
    }

    fn press(&mut self, label: &str) {
        self.session.press(label);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);
        // Keys belong to the about dialog while it is open.
        if self.show_about {
            return;
        }

        let mut labels = Vec::new();
        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Text(text) => {
                        labels.extend(text.chars().filter_map(keypad::label_for_char));
                    }
                    egui::Event::Key { key: Key::Enter, pressed: true, .. } => labels.push(EQUALS),
                    egui::Event::Key { key: Key::Escape, pressed: true, .. } => labels.push(CLEAR),
                    _ => {}
                }
            }
        });
        for label in labels {
            self.press(label);
        }
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing.x;
        let span = keypad::max_row_span();
        let unit = (ui.available_width() - spacing * (span - 1.0)) / span;
        let font_size = self.prefs.display_font_size * 0.55;

        for row in keypad::ROWS {
            ui.horizontal(|ui| {
                for label in row {
                    let span = keypad::key_span(label);
                    let width = unit * span + spacing * (span - 1.0);
                    let key = KeypadButton::new(label, egui::vec2(width, KEY_HEIGHT)).font_size(font_size);
                    if ui.add(key).clicked() {
                        self.press(label);
                    }
                }
            });
        }

        ui.add_space(4.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let width = unit * 2.0 + spacing;
            let key = KeypadButton::new(CLEAR, egui::vec2(width, KEY_HEIGHT))
                .font_size(font_size)
                .inverted(true);
            if ui.add(key).clicked() {
                self.press(CLEAR);
            }
        });
    }

    fn render_menu(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("clear").clicked() {
                        self.press(CLEAR);
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
        let resp = egui::Window::new("about pocketcalc")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("pocketcalc");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("a four-function calculator");
                });
                ui.separator();
                ui.label("keys: 0-9 . + - * / = Enter");
                ui.label("Esc or c: clear");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            pocketcore::dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_frame(&mut self, ctx: &Context) {
        self.handle_keys(ctx);
        self.render_menu(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(PocketColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                readout(ui, self.session.display(), self.prefs.display_font_size);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}

impl eframe::App for PocketCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame();
        self.track_window_size(ctx);

        catch_or((), || self.render_frame(ctx));

        let request = self.session.renderer_mut();
        if std::mem::take(&mut request.dirty) {
            self.repaint.mark_needs_repaint();
        }
        self.repaint.end_frame(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_preferences();
    }
}
