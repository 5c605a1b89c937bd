// src/ui/selector.rs
use eframe::egui;
use crate::config::Metric;
use crate::state::Session;

/// The category dropdown. Returns the newly picked label, if the user changed it.
pub fn show_selector(ui: &mut egui::Ui, current: Metric) -> Option<&'static str> {
    let mut selected = current.label();

    ui.horizontal(|ui| {
        ui.label("Select category:");
        egui::ComboBox::from_id_source("category_select")
            .selected_text(selected)
            .width(320.0)
            .show_ui(ui, |ui| {
                for label in Session::labels() {
                    ui.selectable_value(&mut selected, label, label);
                }
            });
    });

    (selected != current.label()).then_some(selected)
}
