use std::sync::Arc;

use crate::color::ColorMap;
use crate::dashboard::{self, Dashboard, Selection};
use crate::data::model::{BaseTable, Feature, TargetBounds};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which axis selector a feature choice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Prepared dataset, shared read-only.
    pub table: Arc<BaseTable>,

    /// Current widget values; may be invalid until applied.
    pub selection: Selection,

    /// Last successfully built dashboard.
    pub dashboard: Dashboard,

    /// Category colours for the scatter plot.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(table: Arc<BaseTable>) -> Result<Self, DashboardError> {
        let selection = Selection::for_table(&table);
        let dashboard = dashboard::build(&table, &selection)?;
        Ok(Self {
            table,
            selection,
            dashboard,
            color_map: ColorMap::default(),
            status_message: None,
        })
    }

    pub fn bounds(&self) -> Option<TargetBounds> {
        self.table.target_bounds()
    }

    /// Rebuild the dashboard from the current selection.
    ///
    /// On failure the previous dashboard stays in place and the error is
    /// reported through `status_message`.
    pub fn apply(&mut self) {
        match dashboard::build(&self.table, &self.selection) {
            Ok(dashboard) => {
                self.dashboard = dashboard;
                self.status_message = None;
            }
            Err(e) => self.report(e.into()),
        }
    }

    /// Choose an axis feature by its display name.
    pub fn select_feature(&mut self, axis: Axis, display_name: &str) {
        match Feature::from_display(display_name) {
            Ok(feature) => {
                match axis {
                    Axis::X => self.selection.x_feature = feature,
                    Axis::Y => self.selection.y_feature = feature,
                }
                self.apply();
            }
            Err(e) => self.report(e.into()),
        }
    }

    /// Toggle colouring by category; the data itself is unaffected.
    pub fn set_colour_by_sex(&mut self, on: bool) {
        self.selection.colour_by_sex = on;
        self.apply();
    }

    pub fn set_show_raw(&mut self, on: bool) {
        self.selection.show_raw = on;
        self.apply();
    }

    /// Restore the full target range.
    pub fn reset_range(&mut self) {
        if let Some(b) = self.bounds() {
            self.selection.target_lo = b.min;
            self.selection.target_hi = b.max;
            self.apply();
        }
    }

    fn report(&mut self, e: DashboardError) {
        log::warn!("Selection rejected: {e}");
        self.status_message = Some(format!("Error: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::scenario_table;

    fn state() -> AppState {
        AppState::new(scenario_table()).unwrap()
    }

    #[test]
    fn feature_selection_by_display_name() {
        let mut s = state();
        s.select_feature(Axis::X, "Serum Glucose");
        assert_eq!(s.dashboard.selection.x_feature, Feature::S5);
        assert_eq!(s.dashboard.scatter.x, Feature::S5);
        assert!(s.status_message.is_none());
    }

    #[test]
    fn unknown_display_name_keeps_dashboard() {
        let mut s = state();
        s.select_feature(Axis::Y, "Cholesterol");
        assert_eq!(s.dashboard.scatter.y, Feature::Bp);
        assert!(s.status_message.as_deref().unwrap().contains("Cholesterol"));
    }

    #[test]
    fn invalid_range_keeps_last_valid_view() {
        let mut s = state();
        s.selection.target_lo = 50;
        s.apply();
        assert_eq!(s.dashboard.view.len(), 3);

        s.selection.target_lo = 90;
        s.selection.target_hi = 60;
        s.apply();
        assert_eq!(s.dashboard.view.len(), 3);
        assert!(s.status_message.is_some());

        s.reset_range();
        assert_eq!(s.dashboard.view.len(), 4);
        assert!(s.status_message.is_none());
    }

    #[test]
    fn toggles_rebuild_dashboard() {
        let mut s = state();
        s.set_show_raw(true);
        assert!(s.dashboard.raw_rows.is_some());
        s.set_colour_by_sex(false);
        assert!(!s.dashboard.selection.colour_by_sex);
    }
}
