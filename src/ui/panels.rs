use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::catalog;
use crate::state::{AppState, Axis};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Selection");
    ui.separator();

    // ---- Axis feature selectors ----
    feature_combo(ui, state, Axis::X, "X-Axis Feature");
    ui.add_space(4.0);
    feature_combo(ui, state, Axis::Y, "Y-Axis Feature");
    ui.separator();

    // ---- Target range ----
    ui.strong("Target Range (Disease Progression)");
    match state.bounds() {
        Some(bounds) => {
            let lo = ui.add(
                egui::Slider::new(&mut state.selection.target_lo, bounds.min..=bounds.max)
                    .text("from"),
            );
            let hi = ui.add(
                egui::Slider::new(&mut state.selection.target_hi, bounds.min..=bounds.max)
                    .text("to"),
            );
            if lo.changed() || hi.changed() {
                state.apply();
            }
            if ui.small_button("Full range").clicked() {
                state.reset_range();
            }
        }
        None => {
            ui.label("No target values.");
        }
    }
    ui.separator();

    // ---- Toggles ----
    let mut colour = state.selection.colour_by_sex;
    if ui.checkbox(&mut colour, "Colour by Gender").changed() {
        state.set_colour_by_sex(colour);
    }
    if colour {
        ui.horizontal(|ui: &mut Ui| {
            for (label, c) in state.color_map.legend_entries() {
                ui.label(RichText::new(format!("● {label}")).color(c));
            }
        });
    }

    let mut show_raw = state.selection.show_raw;
    if ui.checkbox(&mut show_raw, "Show raw filtered data").changed() {
        state.set_show_raw(show_raw);
    }
}

/// A combo box over the catalog's display names for one axis.
fn feature_combo(ui: &mut Ui, state: &mut AppState, axis: Axis, label: &str) {
    let current = match axis {
        Axis::X => state.selection.x_feature,
        Axis::Y => state.selection.y_feature,
    };

    ui.label(label);
    let mut chosen: Option<&'static str> = None;
    egui::ComboBox::from_id_salt(label)
        .selected_text(current.display_name())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for name in catalog::display_names() {
                if ui
                    .selectable_label(current.display_name() == name, name)
                    .clicked()
                {
                    chosen = Some(name);
                }
            }
        });

    if let Some(name) = chosen {
        state.select_feature(axis, name);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("View", |ui: &mut Ui| {
            if ui.button("Reset target range").clicked() {
                state.reset_range();
                ui.close_menu();
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        ui.label(format!(
            "{} records loaded, {} visible",
            state.table.len(),
            state.dashboard.view.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
