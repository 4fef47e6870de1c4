//! Data layer: core types, loading, filtering and projections.
//!
//! Architecture:
//! ```text
//!   assets/diabetes.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV → RawRecord, derive category → BaseTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  inclusive target range → FilteredView (row indices)
//!   └──────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐  ┌────────────┐
//!   │ summary   │  │ projection │  headline, describe, counts / scatter,
//!   └──────────┘  └────────────┘  histogram, pair matrix, raw rows
//! ```

pub mod catalog;
pub mod filter;
pub mod loader;
pub mod model;
pub mod projection;
pub mod summary;

#[cfg(test)]
pub(crate) mod fixtures;
