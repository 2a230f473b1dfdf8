//! Contractor benchmark reports
//!
//! A contractor's self-reported metrics travel from the landing page form to
//! the report page as URL query parameters. This crate decodes them, compares
//! them with industry benchmarks and serves the result as HTML or JSON.

pub mod api;
pub mod benchmarks;
pub mod codec;
pub mod config;
pub mod format;
pub mod insights;
pub mod models;

pub use benchmarks::Benchmarks;
pub use insights::{derive_report, DerivedReport, ReportOptions};
pub use models::{BenchmarkInput, BusinessType};
