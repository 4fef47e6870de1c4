use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::model::{BaseTable, RawRecord};

/// The diabetes dataset bundled into the binary.
const BUNDLED_CSV: &str = include_str!("../../assets/diabetes.csv");

// ---------------------------------------------------------------------------
// Data source abstraction
// ---------------------------------------------------------------------------

/// Something that yields the raw rows of the dataset.
pub trait DataSource {
    fn load(&self) -> Result<Vec<RawRecord>>;
}

/// Build the immutable base table from a data source.
///
/// An empty source is rejected: the range selector needs bounds.
pub fn prepare(source: &dyn DataSource) -> Result<BaseTable> {
    let rows = source.load()?;
    if rows.is_empty() {
        bail!("Dataset contains no rows");
    }
    Ok(BaseTable::from_raw(rows))
}

// ---------------------------------------------------------------------------
// CSV source
// ---------------------------------------------------------------------------

/// One CSV row; columns follow the standard diabetes dataset names.
#[derive(Debug, Deserialize)]
struct CsvRow {
    age: f64,
    sex: f64,
    bmi: f64,
    bp: f64,
    s1: f64,
    s2: f64,
    s3: f64,
    s4: f64,
    s5: f64,
    s6: f64,
    target: f64,
}

impl From<CsvRow> for RawRecord {
    fn from(row: CsvRow) -> Self {
        RawRecord {
            features: [
                row.age, row.sex, row.bmi, row.bp, row.s1, row.s2, row.s3, row.s4, row.s5, row.s6,
            ],
            target: row.target,
        }
    }
}

/// CSV text with a header row `age,sex,bmi,bp,s1,s2,s3,s4,s5,s6,target`.
#[derive(Debug, Clone, Copy)]
pub struct CsvSource<'a> {
    text: &'a str,
}

impl<'a> CsvSource<'a> {
    pub fn new(text: &'a str) -> Self {
        CsvSource { text }
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> CsvSource<'static> {
        CsvSource::new(BUNDLED_CSV)
    }
}

impl DataSource for CsvSource<'_> {
    fn load(&self) -> Result<Vec<RawRecord>> {
        let mut reader = csv::Reader::from_reader(self.text.as_bytes());
        reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(row_no, result)| {
                result
                    .map(RawRecord::from)
                    .with_context(|| format!("CSV row {row_no}"))
            })
            .collect()
    }
}

/// Load and prepare the bundled dataset.
pub fn load_bundled() -> Result<BaseTable> {
    prepare(&CsvSource::bundled()).context("loading bundled diabetes dataset")
}
