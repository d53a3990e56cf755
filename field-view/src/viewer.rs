//! Full-window particle field viewer built with eframe/egui.
//!
//! [`Viewer`] owns a [`ParticleField`] and plays the part of its host:
//! it reports the window size and pointer to the field and calls
//! [`ParticleField::frame`] once per egui frame.

use crate::egui_canvas::{BACKGROUND, EguiCanvas};
use eframe::App;
use field_core::{ParticleField, surface::Surface};
use glam::Vec2;

/// Egui host for one [`ParticleField`].
///
/// ### Fields
/// - `field` - The simulator; resized to the central panel every frame.
/// - `show_stats` - Whether the stats overlay is visible (toggled by `F1`).
pub struct Viewer {
    field: ParticleField,
    show_stats: bool,
}

impl Viewer {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            show_stats: false,
        }
    }

    /// Resizes the field if the drawing rect changed since last frame.
    ///
    /// ### Returns
    /// `true` if the field was reset.
    fn sync_surface(&mut self, rect: egui::Rect) -> bool {
        let surface = Surface::new(rect.width(), rect.height());
        if surface == self.field.surface() {
            return false;
        }
        log::info!(
            "window resized to {}x{}, respawning particles",
            surface.width,
            surface.height
        );
        self.field.resize(surface);
        true
    }

    /// Forwards the hovered position (screen space) to the field as a
    /// surface-space pointer, or marks the pointer gone.
    fn sync_pointer(&mut self, hover: Option<egui::Pos2>, rect: egui::Rect) {
        match hover {
            Some(p) => self.field.pointer_moved(Vec2::new(p.x - rect.min.x, p.y - rect.min.y)),
            None if self.field.pointer().active => self.field.pointer_left(),
            None => {}
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (toggle_stats, reset) =
            ctx.input(|i| (i.key_pressed(egui::Key::F1), i.key_pressed(egui::Key::R)));
        if toggle_stats {
            self.show_stats = !self.show_stats;
        }
        if reset {
            self.field.reset();
        }
    }

    /// Small translucent overlay with live field statistics.
    fn ui_stats(&self, ctx: &egui::Context) {
        if !self.show_stats {
            return;
        }
        egui::Area::new("stats".into())
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
            .movable(false)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0, 0, 0, 96))
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        let surface = self.field.surface();
                        ui.label(format!("surface = {}x{}", surface.width, surface.height));
                        ui.label(format!("particles = {}", self.field.particles().len()));
                        ui.label(format!("connections = {}", self.field.connections().len()));
                        ui.label(format!("t = {:.0}", self.field.time()));
                        ui.label(format!("pointer active = {}", self.field.pointer().active));
                    });
            });
    }

    fn ui_field(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKGROUND))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                self.sync_surface(rect);
                self.sync_pointer(response.hover_pos(), rect);

                let mut canvas = EguiCanvas::new(&painter, rect.min);
                self.field.frame(&mut canvas);
            });
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.ui_field(ctx);
        self.ui_stats(ctx);

        ctx.request_repaint();
    }
}
