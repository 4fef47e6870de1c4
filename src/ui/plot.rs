use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Points};

use crate::color::{histogram_color, ColorMap};
use crate::data::model::Category;
use crate::data::projection::{Bin, PairMatrix, ScatterData, ScatterPoint};

const SCATTER_HEIGHT: f32 = 420.0;
const HISTOGRAM_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Render the scatter of the two selected features.
pub fn scatter_plot(ui: &mut Ui, data: &ScatterData, color_map: &ColorMap, colour_by_sex: bool) {
    ui.strong(data.title());

    let hover_points = data.points.clone();
    let x_label = data.x.display_name();
    let y_label = data.y.display_name();

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .height(SCATTER_HEIGHT)
        .label_formatter(move |_name, value| hover_label(&hover_points, value, x_label, y_label))
        .show(ui, |plot_ui| {
            if colour_by_sex {
                for cat in Category::ALL {
                    let pts: Vec<[f64; 2]> = data.points_for(cat).map(|p| [p.x, p.y]).collect();
                    plot_ui.points(
                        Points::new(pts)
                            .name(cat.label())
                            .color(color_map.color_for(cat))
                            .radius(3.0),
                    );
                }
            } else {
                let pts: Vec<[f64; 2]> = data.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(pts)
                        .color(color_map.default_color())
                        .radius(3.0),
                );
            }
        });
}

/// Hover text for the point nearest to the cursor.
fn hover_label(points: &[ScatterPoint], at: &PlotPoint, x_label: &str, y_label: &str) -> String {
    let nearest = points.iter().min_by(|a, b| {
        let da = (a.x - at.x).powi(2) + (a.y - at.y).powi(2);
        let db = (b.x - at.x).powi(2) + (b.y - at.y).powi(2);
        da.total_cmp(&db)
    });
    match nearest {
        Some(p) => format!(
            "{x_label}: {:.4}\n{y_label}: {:.4}\ntarget: {}\nGender: {}",
            p.x, p.y, p.target, p.category
        ),
        None => format!("{x_label}: {:.4}\n{y_label}: {:.4}", at.x, at.y),
    }
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Render the target histogram.
pub fn target_histogram(ui: &mut Ui, bins: &[Bin]) {
    ui.strong("Distribution of Disease Progression");

    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .name(format!("{:.1} – {:.1}", b.start, b.end))
        })
        .collect();

    Plot::new("target_histogram")
        .x_axis_label("Disease Progression Score")
        .y_axis_label("count")
        .height(HISTOGRAM_HEIGHT)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(histogram_color()));
        });
}

// ---------------------------------------------------------------------------
// Pairwise matrix
// ---------------------------------------------------------------------------

/// Render the 3×3 pairwise scatter matrix.
pub fn pair_matrix(ui: &mut Ui, pairs: &PairMatrix, color_map: &ColorMap) {
    ui.strong("Pairwise Feature Overview");

    let n = pairs.dimension();
    let cell = (ui.available_width() / n as f32 - 12.0).max(120.0);

    egui::Grid::new("pair_grid")
        .spacing([6.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for row in 0..n {
                for col in 0..n {
                    let mut plot = Plot::new(("pair_cell", row, col))
                        .width(cell)
                        .height(cell)
                        .allow_drag(false)
                        .allow_scroll(false)
                        .allow_zoom(false)
                        .show_x(false)
                        .show_y(false);
                    if row == n - 1 {
                        plot = plot.x_axis_label(pairs.columns[col].label());
                    }
                    if col == 0 {
                        plot = plot.y_axis_label(pairs.columns[row].label());
                    }
                    plot.show(ui, |plot_ui| {
                        plot_ui.points(
                            Points::new(pairs.cell(row, col))
                                .color(color_map.default_color())
                                .radius(2.0),
                        );
                    });
                }
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_reports_nearest_point() {
        let points = vec![
            ScatterPoint { x: 0.0, y: 0.0, target: 50.0, category: Category::Female },
            ScatterPoint { x: 1.0, y: 1.0, target: 75.0, category: Category::Male },
        ];
        let label = hover_label(&points, &PlotPoint::new(0.9, 0.8), "BMI", "BP");
        assert!(label.contains("target: 75"));
        assert!(label.contains("Gender: male"));
    }

    #[test]
    fn hover_without_points_shows_coordinates() {
        let label = hover_label(&[], &PlotPoint::new(0.5, 0.25), "BMI", "BP");
        assert_eq!(label, "BMI: 0.5000\nBP: 0.2500");
    }
}
