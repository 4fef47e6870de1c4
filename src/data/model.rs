use std::fmt;

// ---------------------------------------------------------------------------
// Feature – one of the ten clinical columns
// ---------------------------------------------------------------------------

/// The ten standardized clinical features, in source column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Age,
    Sex,
    Bmi,
    Bp,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
}

impl Feature {
    pub const ALL: [Feature; 10] = [
        Feature::Age,
        Feature::Sex,
        Feature::Bmi,
        Feature::Bp,
        Feature::S1,
        Feature::S2,
        Feature::S3,
        Feature::S4,
        Feature::S5,
        Feature::S6,
    ];

    /// Position of this feature inside [`Record::features`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ---------------------------------------------------------------------------
// Column – any numeric column of the base table
// ---------------------------------------------------------------------------

/// A numeric column: one of the features or the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Feature(Feature),
    Target,
}

impl Column {
    /// All eleven numeric columns in table order (features, then target).
    pub fn all() -> impl Iterator<Item = Column> {
        Feature::ALL
            .into_iter()
            .map(Column::Feature)
            .chain(std::iter::once(Column::Target))
    }

    /// Internal column identifier, e.g. `bmi` or `target`.
    pub fn id(self) -> &'static str {
        match self {
            Column::Feature(f) => f.id(),
            Column::Target => "target",
        }
    }

    /// Human-readable label used on chart axes.
    pub fn label(self) -> &'static str {
        match self {
            Column::Feature(f) => f.display_name(),
            Column::Target => "Disease Progression Score",
        }
    }
}

impl From<Feature> for Column {
    fn from(f: Feature) -> Self {
        Column::Feature(f)
    }
}

// ---------------------------------------------------------------------------
// Category – derived from the sign of the sex feature
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Male,
    Female,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Male, Category::Female];

    /// Positive sex values are male; zero, negative and NaN are female.
    pub fn from_sex(value: f64) -> Self {
        if value > 0.0 {
            Category::Male
        } else {
            Category::Female
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the base table
// ---------------------------------------------------------------------------

/// A row as delivered by a data source, before derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord {
    pub features: [f64; 10],
    pub target: f64,
}

/// One observation with its derived category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub features: [f64; 10],
    pub target: f64,
    pub category: Category,
}

impl Record {
    pub fn feature(&self, feature: Feature) -> f64 {
        self.features[feature.index()]
    }

    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Feature(f) => self.feature(f),
            Column::Target => self.target,
        }
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record {
            features: raw.features,
            target: raw.target,
            category: Category::from_sex(raw.features[Feature::Sex.index()]),
        }
    }
}

// ---------------------------------------------------------------------------
// TargetBounds – integer bounds offered by the range selector
// ---------------------------------------------------------------------------

/// Global target bounds widened to integers: `floor(min)` and `ceil(max)`.
///
/// Flooring can put `min` below the true minimum; the selector then can
/// never exclude the lowest record. That approximation is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetBounds {
    pub min: i64,
    pub max: i64,
}

// ---------------------------------------------------------------------------
// BaseTable – the immutable prepared dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BaseTable {
    records: Vec<Record>,
    bounds: Option<TargetBounds>,
}

impl BaseTable {
    /// Append the derived category to every row and compute target bounds.
    pub fn from_raw(raw: Vec<RawRecord>) -> Self {
        let records: Vec<Record> = raw.into_iter().map(Record::from).collect();

        let bounds = if records.is_empty() {
            None
        } else {
            let min = records
                .iter()
                .map(|r| r.target)
                .fold(f64::INFINITY, f64::min);
            let max = records
                .iter()
                .map(|r| r.target)
                .fold(f64::NEG_INFINITY, f64::max);
            Some(TargetBounds {
                min: min.floor() as i64,
                max: max.ceil() as i64,
            })
        };

        BaseTable { records, bounds }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// `None` when the table is empty.
    pub fn target_bounds(&self) -> Option<TargetBounds> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
