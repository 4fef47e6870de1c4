use crate::error::LookupError;

use super::model::Feature;

// ---------------------------------------------------------------------------
// Feature catalog: identifier ↔ display name
// ---------------------------------------------------------------------------

/// The fixed bijection between feature identifiers and display names,
/// in source column order.
const CATALOG: [(Feature, &str, &str); 10] = [
    (Feature::Age, "age", "Age"),
    (Feature::Sex, "sex", "Sex"),
    (Feature::Bmi, "bmi", "Body Mass Index (BMI)"),
    (Feature::Bp, "bp", "Blood Pressure"),
    (Feature::S1, "s1", "Total Serum Cholesterol (TC)"),
    (Feature::S2, "s2", "Low-Density Lipoprotein (LDL)"),
    (Feature::S3, "s3", "High-Density Lipoprotein (HDL)"),
    (Feature::S4, "s4", "Triglycerides (TG)"),
    (Feature::S5, "s5", "Serum Glucose"),
    (Feature::S6, "s6", "Serum TSH"),
];

impl Feature {
    /// Internal column identifier, e.g. `bmi`.
    pub fn id(self) -> &'static str {
        CATALOG[self.index()].1
    }

    /// Human-readable name, e.g. `Body Mass Index (BMI)`.
    pub fn display_name(self) -> &'static str {
        CATALOG[self.index()].2
    }

    pub fn from_id(id: &str) -> Result<Feature, LookupError> {
        CATALOG
            .iter()
            .find(|(_, i, _)| *i == id)
            .map(|(f, _, _)| *f)
            .ok_or_else(|| LookupError::UnknownIdentifier(id.to_string()))
    }

    pub fn from_display(name: &str) -> Result<Feature, LookupError> {
        CATALOG
            .iter()
            .find(|(_, _, n)| *n == name)
            .map(|(f, _, _)| *f)
            .ok_or_else(|| LookupError::UnknownDisplayName(name.to_string()))
    }
}

/// Translate a feature identifier into its display name.
pub fn to_display(id: &str) -> Result<&'static str, LookupError> {
    Feature::from_id(id).map(Feature::display_name)
}

/// Translate a display name back into its feature identifier.
pub fn to_identifier(name: &str) -> Result<&'static str, LookupError> {
    Feature::from_display(name).map(Feature::id)
}

/// Display names in column order, as offered by the axis selectors.
pub fn display_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(_, _, name)| *name)
}
