// src/app.rs
use eframe::egui;

use crate::state::Session;
use crate::ui;

pub struct AtlasApp {
    session: Session,
    error_message: Option<String>,
}

impl AtlasApp {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            error_message: None,
        }
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(label) = ui::selector::show_selector(ui, self.session.selected()) {
                if let Err(e) = self.session.select_label(label) {
                    tracing::error!(label, error = %e, "failed to switch category");
                    self.error_message = Some(format!("Error switching category: {}", e));
                }
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui::map::show_map(ui, &self.session);
                ui.add_space(8.0);
                ui::color_bar::show_color_bar(ui, &self.session.display().visual);
            });
        });

        // Show error modal if needed
        let error_msg = self.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }
}
