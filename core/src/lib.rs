//! Per-seller sales performance reports.
//!
//! One synchronous pass over an in-memory snapshot of sellers,
//! products and purchase records. See `pipeline` for stage order.

pub mod accumulator;
pub mod config;
pub mod error;
pub mod generator;
pub mod index;
pub mod model;
pub mod name_generator;
pub mod pipeline;
pub mod ranker;
pub mod report;
pub mod rng;
pub mod strategy;
pub mod types;

pub use error::{InvalidInputError, ReportError, ReportResult};
pub use model::{LineItem, Product, PurchaseRecord, SalesData, Seller};
pub use pipeline::{analyze, analyze_optional};
pub use report::{SellerReport, TopProduct};
pub use strategy::{AnalysisOptions, BonusStrategy, ProfitStrategy, RevenueStrategy, SaleLine};
