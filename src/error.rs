use thiserror::Error;

// ---------------------------------------------------------------------------
// Feature catalog lookups
// ---------------------------------------------------------------------------

/// A feature identifier or display name outside the fixed catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown feature identifier: '{0}'")]
    UnknownIdentifier(String),

    #[error("Unknown feature display name: '{0}'")]
    UnknownDisplayName(String),
}

// ---------------------------------------------------------------------------
// Target range selection
// ---------------------------------------------------------------------------

/// A target range that cannot be applied to the base table.
///
/// Invalid ranges are rejected, never clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Lower bound {lo} is greater than upper bound {hi}")]
    Inverted { lo: f64, hi: f64 },

    #[error("Range [{lo}, {hi}] lies outside the dataset bounds [{min}, {max}]")]
    OutOfBounds { lo: f64, hi: f64, min: i64, max: i64 },

    #[error("Range bounds must be numbers")]
    NotANumber,
}

// ---------------------------------------------------------------------------
// Dashboard-level error
// ---------------------------------------------------------------------------

/// Anything that stops a selection from producing a new dashboard.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Range(#[from] RangeError),
}
