pub mod commands;
pub mod domain;
pub mod error;
pub mod models;
pub mod reports;

pub use error::AppError;
pub use models::{
  BreakEvenAnalysis, BreakEvenResult, ChartSeries, CostInputs, TableRow, TableWindow,
};
