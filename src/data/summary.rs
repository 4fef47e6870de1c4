use super::filter::FilteredView;
use super::model::{Category, Column};

/// Decimal places used by the statistics table.
pub const DISPLAY_DECIMALS: i32 = 3;

/// Row labels of the statistics table, in the order of [`ColumnStats::values`].
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMean {
    pub column: Column,
    /// `None` for an empty view.
    pub mean: Option<f64>,
}

/// Row count plus the means of two chosen columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Headline {
    pub count: usize,
    pub first: ColumnMean,
    pub second: ColumnMean,
}

pub fn headline(view: &FilteredView, first: Column, second: Column) -> Headline {
    Headline {
        count: view.len(),
        first: ColumnMean {
            column: first,
            mean: mean(&column_values(view, first)),
        },
        second: ColumnMean {
            column: second,
            mean: mean(&column_values(view, second)),
        },
    }
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Descriptive statistics of one numeric column.
///
/// Every statistic except `count` is `None` when undefined: all of them on
/// zero rows, and `std` on fewer than two rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub column: Column,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnStats {
    pub fn compute(column: Column, values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        ColumnStats {
            column,
            count: values.len(),
            mean: mean(values),
            std: sample_std(values),
            min: sorted.first().copied(),
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }

    /// Copy with every statistic rounded to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Self {
        let r = |v: Option<f64>| v.map(|v| round_to(v, decimals));
        ColumnStats {
            column: self.column,
            count: self.count,
            mean: r(self.mean),
            std: r(self.std),
            min: r(self.min),
            q25: r(self.q25),
            median: r(self.median),
            q75: r(self.q75),
            max: r(self.max),
        }
    }

    /// Values in [`STAT_LABELS`] order.
    pub fn values(&self) -> [Option<f64>; 8] {
        [
            Some(self.count as f64),
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Statistics for all eleven numeric columns, rounded for display.
pub fn describe(view: &FilteredView) -> Vec<ColumnStats> {
    Column::all()
        .map(|col| ColumnStats::compute(col, &column_values(view, col)).rounded(DISPLAY_DECIMALS))
        .collect()
}

// ---------------------------------------------------------------------------
// Category frequencies
// ---------------------------------------------------------------------------

/// Frequency of each derived category, most frequent first.
///
/// Ties keep `male` before `female`; absent categories are omitted.
pub fn category_counts(view: &FilteredView) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Category::ALL
        .iter()
        .map(|&cat| (cat, view.records().filter(|r| r.category == cat).count()))
        .filter(|(_, n)| *n > 0)
        .collect();
    // Stable sort keeps the `Category::ALL` order on ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn column_values(view: &FilteredView, column: Column) -> Vec<f64> {
    view.records().map(|r| r.value(column)).collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with `n - 1` in the denominator.
fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Linear interpolation between the closest ranks of a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    Some(sorted[lower] + frac * (sorted[upper] - sorted[lower]))
}

pub fn round_to(v: f64, decimals: i32) -> f64 {
    let p = 10f64.powi(decimals);
    (v * p).round() / p
}

/// Format an optional statistic, using `n/a` for undefined values.
pub fn format_stat(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_by_target;
    use crate::data::fixtures::scenario_table;
    use crate::data::model::Feature;

    fn stats_for(stats: &[ColumnStats], column: Column) -> ColumnStats {
        *stats.iter().find(|s| s.column == column).unwrap()
    }

    #[test]
    fn scenario_headline() {
        let view = filter_by_target(&scenario_table(), 50.0, 100.0).unwrap();
        let h = headline(&view, Column::Target, Feature::Bmi.into());
        assert_eq!(h.count, 3);
        assert_eq!(h.first.mean, Some(75.0));
        let bmi = h.second.mean.unwrap();
        assert!((bmi - 0.03).abs() < 1e-12);
    }

    #[test]
    fn describe_matches_hand_computed_values() {
        let view = filter_by_target(&scenario_table(), 25.0, 100.0).unwrap();
        let stats = describe(&view);
        assert_eq!(stats.len(), 11);

        let target = stats_for(&stats, Column::Target);
        assert_eq!(target.count, 4);
        assert_eq!(target.mean, Some(62.5));
        // sqrt(3125 / 3)
        assert_eq!(target.std, Some(32.275));
        assert_eq!(target.min, Some(25.0));
        assert_eq!(target.q25, Some(43.75));
        assert_eq!(target.median, Some(62.5));
        assert_eq!(target.q75, Some(81.25));
        assert_eq!(target.max, Some(100.0));
    }

    #[test]
    fn describe_rounds_to_display_precision() {
        let s = ColumnStats::compute(Column::Target, &[1.0, 2.0, 2.0]).rounded(DISPLAY_DECIMALS);
        assert_eq!(s.mean, Some(1.667));
        assert_eq!(s.std, Some(0.577));
    }

    #[test]
    fn single_row_has_no_std() {
        let view = filter_by_target(&scenario_table(), 75.0, 75.0).unwrap();
        let target = stats_for(&describe(&view), Column::Target);
        assert_eq!(target.count, 1);
        assert_eq!(target.mean, Some(75.0));
        assert_eq!(target.std, None);
        assert_eq!(target.median, Some(75.0));
    }

    #[test]
    fn empty_view_reports_undefined() {
        let view = filter_by_target(&scenario_table(), 60.0, 60.0).unwrap();

        let h = headline(&view, Column::Target, Feature::Bmi.into());
        assert_eq!(h.count, 0);
        assert_eq!(h.first.mean, None);

        for s in describe(&view) {
            assert_eq!(s.count, 0);
            assert!(s.values()[1..].iter().all(Option::is_none));
        }
        assert!(category_counts(&view).is_empty());
        assert_eq!(format_stat(h.first.mean, 2), "n/a");
    }

    #[test]
    fn category_counts_sorted_by_frequency() {
        let table = scenario_table();
        let view = filter_by_target(&table, 50.0, 100.0).unwrap();
        assert_eq!(
            category_counts(&view),
            vec![(Category::Female, 2), (Category::Male, 1)]
        );

        let tied = filter_by_target(&table, 25.0, 100.0).unwrap();
        assert_eq!(
            category_counts(&tied),
            vec![(Category::Male, 2), (Category::Female, 2)]
        );
    }

    #[test]
    fn format_stat_uses_requested_precision() {
        assert_eq!(format_stat(Some(75.0), 2), "75.00");
        assert_eq!(format_stat(Some(0.12345), 3), "0.123");
    }
}
