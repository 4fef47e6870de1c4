use eframe::egui::{self, CollapsingHeader, ScrollArea, Ui};

use crate::data::projection::RAW_PREVIEW_ROWS;
use crate::data::summary::format_stat;
use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DiabetesExplorerApp {
    pub state: AppState,
}

impl DiabetesExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for DiabetesExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selection ----
        egui::SidePanel::left("selection_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let dash = &state.dashboard;

    ui.heading("Diabetes Dataset Exploration Dashboard");
    ui.label(
        "Interactively explore relationships between clinical features and disease \
         progression using scatter plots, histograms, and statistical summaries.",
    );
    ui.add_space(8.0);

    // ---- Metrics ----
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Filtered Rows", dash.headline.count.to_string());
        metric(&mut cols[1], "Mean Target", format_stat(dash.headline.first.mean, 2));
        metric(&mut cols[2], "Mean BMI", format_stat(dash.headline.second.mean, 2));
    });
    ui.separator();

    CollapsingHeader::new("Scatter Plot of Selected Features")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.label(
                "This scatter plot shows interactions between two clinical measures. \
                 Enable gender colouring for clearer subgroup patterns.",
            );
            plot::scatter_plot(
                ui,
                &dash.scatter,
                &state.color_map,
                dash.selection.colour_by_sex,
            );
        });

    CollapsingHeader::new("Histogram of Disease Progression")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(
                "This histogram displays the distribution of diabetes progression levels. \
                 This helps identify skewness, peaks or potential outliers.",
            );
            plot::target_histogram(ui, &dash.histogram);
        });

    CollapsingHeader::new("Pairwise Snapshot (BMI, BP, Target)")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label("A quick multi-feature matrix for three key indicators: BMI, BP and target.");
            plot::pair_matrix(ui, &dash.pairs, &state.color_map);
        });

    CollapsingHeader::new("Data Summary")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.heading("Descriptive Statistics");
            ui.label("Statistical overview of the filtered subset.");
            tables::stats_table(ui, &dash.stats);

            ui.add_space(8.0);
            ui.strong("Counts by Gender");
            tables::category_table(ui, &dash.category_counts);

            if let Some(rows) = &dash.raw_rows {
                ui.add_space(8.0);
                ui.strong(raw_preview_heading());
                tables::raw_table(ui, rows);
            }
        });

    ui.separator();
    ui.small(format!(
        "Bundled diabetes progression dataset · {} patients",
        state.table.len()
    ));
}

/// Heading names the preview limit, not the number of rows shown.
fn raw_preview_heading() -> String {
    format!("Raw Data of the First {RAW_PREVIEW_ROWS} Rows")
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(value);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_heading_uses_preview_limit() {
        assert_eq!(raw_preview_heading(), "Raw Data of the First 200 Rows");
    }
}
