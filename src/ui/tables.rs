use eframe::egui::Ui;
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::{Category, Column};
use crate::data::projection::RawRow;
use crate::data::summary::{format_stat, ColumnStats, DISPLAY_DECIMALS, STAT_LABELS};

const ROW_HEIGHT: f32 = 18.0;
const RAW_TABLE_HEIGHT: f32 = 320.0;

/// Descriptive statistics: one row per statistic, one column per numeric column.
pub fn stats_table(ui: &mut Ui, stats: &[ColumnStats]) {
    ui.push_id("stats_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(TableColumn::auto())
            .columns(TableColumn::auto().at_least(64.0), stats.len())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.label("");
                });
                for s in stats {
                    header.col(|ui| {
                        ui.strong(s.column.id());
                    });
                }
            })
            .body(|mut body| {
                for (i, label) in STAT_LABELS.iter().enumerate() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.strong(*label);
                        });
                        for s in stats {
                            // The count row is an integer.
                            let decimals = if i == 0 { 0 } else { DISPLAY_DECIMALS as usize };
                            row.col(|ui| {
                                ui.monospace(format_stat(s.values()[i], decimals));
                            });
                        }
                    });
                }
            });
    });
}

/// Counts by gender, most frequent first.
pub fn category_table(ui: &mut Ui, counts: &[(Category, usize)]) {
    ui.push_id("category_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(TableColumn::exact(100.0))
            .column(TableColumn::exact(80.0))
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Gender");
                });
                header.col(|ui| {
                    ui.strong("Count");
                });
            })
            .body(|mut body| {
                for (cat, n) in counts {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(cat.label());
                        });
                        row.col(|ui| {
                            ui.monospace(n.to_string());
                        });
                    });
                }
            });
    });
}

/// The raw filtered rows, renumbered from 0.
pub fn raw_table(ui: &mut Ui, rows: &[RawRow]) {
    let columns: Vec<Column> = Column::all().collect();

    ui.push_id("raw_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(RAW_TABLE_HEIGHT)
            .column(TableColumn::auto().at_least(36.0))
            .columns(TableColumn::auto().at_least(72.0), columns.len())
            .column(TableColumn::auto())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.label("");
                });
                for c in &columns {
                    header.col(|ui| {
                        ui.strong(c.id());
                    });
                }
                header.col(|ui| {
                    ui.strong("sex_cat");
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let r = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(r.position.to_string());
                    });
                    for v in r.values {
                        row.col(|ui| {
                            ui.monospace(format!("{v:.6}"));
                        });
                    }
                    row.col(|ui| {
                        ui.label(r.category.label());
                    });
                });
            });
    });
}
