//! Query engine and filter composition over historical space launch data.
//!
//! The dataset is loaded once (see [`data::loader`]) and shared read-only;
//! [`data::query::QueryEngine`] answers the aggregate questions and
//! [`data::filter`] / [`data::table`] drive the dashboard views.

pub mod cli;
pub mod config;
pub mod data;

pub use data::filter::{DateRange, MissionFilter, Selection};
pub use data::model::{Dataset, MissionRecord, MissionStatus};
pub use data::query::{QueryEngine, StatusHistogram};
