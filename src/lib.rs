//! Interactive exploration dashboard for the diabetes progression dataset.
//!
//! The [`data`] layer prepares the bundled table and derives everything the
//! charts need; [`dashboard::build`] runs that pipeline for one [`dashboard::Selection`];
//! [`app`] and [`ui`] render the result with egui.

pub mod app;
pub mod color;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
