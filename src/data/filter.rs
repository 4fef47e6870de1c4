use std::sync::Arc;

use crate::error::RangeError;

use super::model::{BaseTable, Record};

// ---------------------------------------------------------------------------
// FilteredView – base table plus the indices passing the range predicate
// ---------------------------------------------------------------------------

/// Records whose target lies in an inclusive range, in base-table order.
#[derive(Debug, Clone)]
pub struct FilteredView {
    table: Arc<BaseTable>,
    indices: Vec<usize>,
}

impl FilteredView {
    /// A view containing every record of `table`.
    pub fn full(table: Arc<BaseTable>) -> Self {
        let indices = (0..table.len()).collect();
        FilteredView { table, indices }
    }

    /// Base-table indices of the visible records.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.indices
            .iter()
            .filter_map(move |&i| self.table.record(i))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Re-apply the range predicate to the records already in this view.
    pub fn refine(&self, lo: f64, hi: f64) -> Result<FilteredView, RangeError> {
        validate_range(&self.table, lo, hi)?;
        Ok(FilteredView {
            table: Arc::clone(&self.table),
            indices: matching(&self.table, self.indices.iter().copied(), lo, hi),
        })
    }
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Select records with `lo <= target <= hi`.
///
/// The range must satisfy `bounds.min <= lo <= hi <= bounds.max`; anything
/// else is rejected with a [`RangeError`]. An empty result is valid.
pub fn filter_by_target(table: &Arc<BaseTable>, lo: f64, hi: f64) -> Result<FilteredView, RangeError> {
    FilteredView::full(Arc::clone(table)).refine(lo, hi)
}

fn validate_range(table: &BaseTable, lo: f64, hi: f64) -> Result<(), RangeError> {
    if lo.is_nan() || hi.is_nan() {
        return Err(RangeError::NotANumber);
    }
    if lo > hi {
        return Err(RangeError::Inverted { lo, hi });
    }
    if let Some(bounds) = table.target_bounds() {
        if lo < bounds.min as f64 || hi > bounds.max as f64 {
            return Err(RangeError::OutOfBounds {
                lo,
                hi,
                min: bounds.min,
                max: bounds.max,
            });
        }
    }
    Ok(())
}

fn matching(
    table: &BaseTable,
    candidates: impl Iterator<Item = usize>,
    lo: f64,
    hi: f64,
) -> Vec<usize> {
    candidates
        .filter(|&i| {
            table
                .record(i)
                .is_some_and(|r| r.target >= lo && r.target <= hi)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{raw, scenario_table};
    use crate::data::model::Category;

    fn targets(view: &FilteredView) -> Vec<f64> {
        view.records().map(|r| r.target).collect()
    }

    #[test]
    fn scenario_fifty_to_hundred() {
        let table = scenario_table();
        let view = filter_by_target(&table, 50.0, 100.0).unwrap();
        assert_eq!(targets(&view), vec![50.0, 75.0, 100.0]);
        let cats: Vec<Category> = view.records().map(|r| r.category).collect();
        assert_eq!(cats, vec![Category::Female, Category::Male, Category::Female]);
    }

    #[test]
    fn results_respect_the_range() {
        let table = scenario_table();
        for (lo, hi) in [(25.0, 25.0), (26.0, 74.0), (30.0, 90.0), (75.0, 100.0)] {
            let view = filter_by_target(&table, lo, hi).unwrap();
            assert!(view.records().all(|r| r.target >= lo && r.target <= hi));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = scenario_table();
        let once = filter_by_target(&table, 40.0, 80.0).unwrap();
        let twice = once.refine(40.0, 80.0).unwrap();
        assert_eq!(once.indices(), twice.indices());
    }

    #[test]
    fn full_range_is_identity() {
        let table = scenario_table();
        let bounds = table.target_bounds().unwrap();
        let view = filter_by_target(&table, bounds.min as f64, bounds.max as f64).unwrap();
        assert_eq!(view.indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn degenerate_range_matches_exactly() {
        let table = scenario_table();
        let hit = filter_by_target(&table, 75.0, 75.0).unwrap();
        assert_eq!(targets(&hit), vec![75.0]);

        let miss = filter_by_target(&table, 60.0, 60.0).unwrap();
        assert!(miss.is_empty());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let table = scenario_table();
        assert_eq!(
            filter_by_target(&table, 80.0, 40.0).unwrap_err(),
            RangeError::Inverted { lo: 80.0, hi: 40.0 }
        );
    }

    #[test]
    fn out_of_bounds_range_is_rejected() {
        let table = scenario_table();
        assert!(matches!(
            filter_by_target(&table, 10.0, 50.0),
            Err(RangeError::OutOfBounds { min: 25, max: 100, .. })
        ));
        assert!(matches!(
            filter_by_target(&table, 50.0, 101.0),
            Err(RangeError::OutOfBounds { .. })
        ));
        assert_eq!(
            filter_by_target(&table, f64::NAN, 50.0).unwrap_err(),
            RangeError::NotANumber
        );
    }

    #[test]
    fn floored_lower_bound_keeps_true_minimum() {
        let table = Arc::new(BaseTable::from_raw(vec![
            raw(1.0, 25.6, 0.0),
            raw(-1.0, 90.0, 0.0),
        ]));
        let bounds = table.target_bounds().unwrap();
        assert_eq!(bounds.min, 25);
        // The lowest offered bound sits below the true minimum.
        let view = filter_by_target(&table, bounds.min as f64, 90.0).unwrap();
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn full_range_keeps_fractional_extremes() {
        let table = Arc::new(BaseTable::from_raw(vec![
            raw(1.0, 25.6, 0.0),
            raw(-1.0, 100.0, 0.0),
            raw(1.0, 346.9, 0.0),
        ]));
        let b = table.target_bounds().unwrap();
        let view = filter_by_target(&table, b.min as f64, b.max as f64).unwrap();
        assert_eq!(view.indices(), &[0, 1, 2]);

        let negative = Arc::new(BaseTable::from_raw(vec![
            raw(1.0, -3.5, 0.0),
            raw(-1.0, 10.0, 0.0),
        ]));
        let b = negative.target_bounds().unwrap();
        let view = filter_by_target(&negative, b.min as f64, b.max as f64).unwrap();
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn empty_table_yields_empty_view() {
        let table = Arc::new(BaseTable::from_raw(Vec::new()));
        let view = filter_by_target(&table, 0.0, 10.0).unwrap();
        assert!(view.is_empty());
    }
}
