use std::sync::Arc;

use anyhow::{anyhow, Context};
use diabetes_explorer::app::DiabetesExplorerApp;
use diabetes_explorer::data;
use diabetes_explorer::state::AppState;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = Arc::new(data::loader::load_bundled()?);
    if let Some(bounds) = table.target_bounds() {
        log::info!(
            "Loaded {} records, target range {}..={}",
            table.len(),
            bounds.min,
            bounds.max
        );
    }
    let state = AppState::new(table).context("building initial dashboard")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Diabetes Data Exploration",
        options,
        Box::new(|_cc| Ok(Box::new(DiabetesExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
