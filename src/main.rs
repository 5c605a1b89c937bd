// src/main.rs
use eframe::egui;
use anyhow::Result;

mod app;
mod config;
mod error;
mod file;
mod geo;
mod logging;
mod plot;
mod state;
mod ui;

use crate::app::AtlasApp;
use crate::config::Settings;
use crate::file::DatasetLoader;
use crate::geo::GeoDocument;
use crate::state::Session;

fn main() -> Result<()> {
    logging::init();

    crate::config::catalog::validate()?;
    let settings = Settings::load()?;
    tracing::info!(
        metrics = %settings.metrics_path.display(),
        geometry = %settings.geometry_path.display(),
        "loading datasets"
    );

    let table = DatasetLoader::new().load(&settings)?;
    let document = GeoDocument::from_table(&table);
    tracing::info!(bytes = document.as_str().len(), "geo document built");

    let session = Session::new(&document, settings.initial_metric)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1160.0, 720.0])
            .with_title("World Atlas"),
        ..Default::default()
    };

    eframe::run_native(
        "World Atlas",
        options,
        Box::new(move |_cc| Box::new(AtlasApp::new(session))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
