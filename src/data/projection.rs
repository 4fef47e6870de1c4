use super::filter::FilteredView;
use super::model::{Category, Column, Feature};
use super::summary::column_values;

/// Number of equal-width bins in the target histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// Maximum number of rows shown in the raw data preview.
pub const RAW_PREVIEW_ROWS: usize = 200;

/// Dimensions of the pairwise snapshot.
pub const PAIR_COLUMNS: [Column; 3] = [
    Column::Feature(Feature::Bmi),
    Column::Feature(Feature::Bp),
    Column::Target,
];

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub target: f64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterData {
    pub x: Feature,
    pub y: Feature,
    pub points: Vec<ScatterPoint>,
}

impl ScatterData {
    pub fn title(&self) -> String {
        format!("{} vs {}", self.x.display_name(), self.y.display_name())
    }

    /// Points belonging to one category, for per-category series.
    pub fn points_for(&self, category: Category) -> impl Iterator<Item = &ScatterPoint> + '_ {
        self.points.iter().filter(move |p| p.category == category)
    }
}

pub fn scatter(view: &FilteredView, x: Feature, y: Feature) -> ScatterData {
    let points = view
        .records()
        .map(|r| ScatterPoint {
            x: r.feature(x),
            y: r.feature(y),
            target: r.target,
            category: r.category,
        })
        .collect();
    ScatterData { x, y, points }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width bins spanning the observed values.
///
/// The last bin is closed on the right so the maximum is counted. When every
/// value is identical a single unit-width bin centred on it is produced; an
/// empty input produces no bins.
pub fn histogram(values: &[f64], n_bins: usize) -> Vec<Bin> {
    if values.is_empty() || n_bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max - min <= f64::EPSILON {
        return vec![Bin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len(),
        }];
    }

    let width = (max - min) / n_bins as f64;
    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }
    bins
}

pub fn target_histogram(view: &FilteredView) -> Vec<Bin> {
    histogram(&column_values(view, Column::Target), HISTOGRAM_BINS)
}

// ---------------------------------------------------------------------------
// Pairwise matrix
// ---------------------------------------------------------------------------

/// Column-wise values of the pairwise snapshot dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PairMatrix {
    pub columns: [Column; 3],
    values: [Vec<f64>; 3],
}

impl PairMatrix {
    pub fn dimension(&self) -> usize {
        self.columns.len()
    }

    /// Points of the cell at `row`, `col`: x from `col`, y from `row`.
    pub fn cell(&self, row: usize, col: usize) -> Vec<[f64; 2]> {
        self.values[col]
            .iter()
            .zip(&self.values[row])
            .map(|(&x, &y)| [x, y])
            .collect()
    }
}

pub fn pair_matrix(view: &FilteredView) -> PairMatrix {
    PairMatrix {
        columns: PAIR_COLUMNS,
        values: PAIR_COLUMNS.map(|c| column_values(view, c)),
    }
}

// ---------------------------------------------------------------------------
// Raw rows preview
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRow {
    /// Position inside the filtered view, starting at 0.
    pub position: usize,
    pub values: [f64; 11],
    pub category: Category,
}

/// The first `limit` records of the view, renumbered from 0.
pub fn raw_preview(view: &FilteredView, limit: usize) -> Vec<RawRow> {
    view.records()
        .take(limit)
        .enumerate()
        .map(|(position, r)| {
            let mut values = [0.0; 11];
            for (slot, col) in values.iter_mut().zip(Column::all()) {
                *slot = r.value(col);
            }
            RawRow {
                position,
                values,
                category: r.category,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_by_target;
    use crate::data::fixtures::scenario_table;

    #[test]
    fn scatter_carries_hover_fields() {
        let view = filter_by_target(&scenario_table(), 50.0, 100.0).unwrap();
        let data = scatter(&view, Feature::Bmi, Feature::Sex);
        assert_eq!(data.points.len(), 3);
        assert_eq!(data.points[0].target, 50.0);
        assert_eq!(data.points[0].y, -0.04);
        assert_eq!(data.points_for(Category::Male).count(), 1);
        assert_eq!(data.title(), "Body Mass Index (BMI) vs Sex");
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (25..=346).map(f64::from).collect();
        let bins = histogram(&values, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].start, 25.0);
        assert!((bins[HISTOGRAM_BINS - 1].end - 346.0).abs() < 1e-9);
        // The maximum lands in the last bin.
        assert!(bins[HISTOGRAM_BINS - 1].count > 0);
    }

    #[test]
    fn histogram_edge_cases() {
        assert!(histogram(&[], HISTOGRAM_BINS).is_empty());

        let single = histogram(&[75.0, 75.0], HISTOGRAM_BINS);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].count, 2);
        assert_eq!(single[0].center(), 75.0);
        assert_eq!(single[0].width(), 1.0);
    }

    #[test]
    fn pair_matrix_uses_fixed_columns() {
        let view = filter_by_target(&scenario_table(), 25.0, 100.0).unwrap();
        let pm = pair_matrix(&view);
        assert_eq!(pm.dimension(), 3);
        assert_eq!(pm.columns[2], Column::Target);
        // x = bmi (col 0), y = target (row 2)
        assert_eq!(pm.cell(2, 0)[1], [0.02, 50.0]);
        assert_eq!(pm.cell(0, 0).len(), 4);
    }

    #[test]
    fn raw_preview_renumbers_and_truncates() {
        let view = filter_by_target(&scenario_table(), 50.0, 100.0).unwrap();
        let rows = raw_preview(&view, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 0);
        assert_eq!(rows[1].position, 1);
        assert_eq!(rows[0].values[10], 50.0);
        assert_eq!(rows[1].category, Category::Male);
    }
}
