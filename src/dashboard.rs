use std::sync::Arc;

use crate::data::filter::{filter_by_target, FilteredView};
use crate::data::model::{BaseTable, Category, Column, Feature};
use crate::data::projection::{self, Bin, PairMatrix, RawRow, ScatterData, RAW_PREVIEW_ROWS};
use crate::data::summary::{self, ColumnStats, Headline};
use crate::error::RangeError;

// ---------------------------------------------------------------------------
// Selection – everything the user can change
// ---------------------------------------------------------------------------

/// The widget state driving one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub x_feature: Feature,
    pub y_feature: Feature,
    pub target_lo: i64,
    pub target_hi: i64,
    pub colour_by_sex: bool,
    pub show_raw: bool,
}

impl Selection {
    /// Default selection for a table: BMI vs blood pressure over the full range.
    pub fn for_table(table: &BaseTable) -> Self {
        let (target_lo, target_hi) = table
            .target_bounds()
            .map(|b| (b.min, b.max))
            .unwrap_or((0, 0));
        Selection {
            x_feature: Feature::Bmi,
            y_feature: Feature::Bp,
            target_lo,
            target_hi,
            colour_by_sex: true,
            show_raw: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard – everything the presentation layer renders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub selection: Selection,
    pub view: FilteredView,
    pub headline: Headline,
    pub scatter: ScatterData,
    pub histogram: Vec<Bin>,
    pub pairs: PairMatrix,
    pub stats: Vec<ColumnStats>,
    pub category_counts: Vec<(Category, usize)>,
    /// Present only when `selection.show_raw` is set.
    pub raw_rows: Option<Vec<RawRow>>,
}

/// Run the full filter → projection pipeline for one selection.
pub fn build(table: &Arc<BaseTable>, selection: &Selection) -> Result<Dashboard, RangeError> {
    let view = filter_by_target(
        table,
        selection.target_lo as f64,
        selection.target_hi as f64,
    )?;

    log::debug!(
        "Selection {:?} → {} of {} records",
        selection,
        view.len(),
        table.len()
    );

    Ok(Dashboard {
        selection: *selection,
        headline: summary::headline(&view, Column::Target, Feature::Bmi.into()),
        scatter: projection::scatter(&view, selection.x_feature, selection.y_feature),
        histogram: projection::target_histogram(&view),
        pairs: projection::pair_matrix(&view),
        stats: summary::describe(&view),
        category_counts: summary::category_counts(&view),
        raw_rows: selection
            .show_raw
            .then(|| projection::raw_preview(&view, RAW_PREVIEW_ROWS)),
        view,
    })
}
