pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::parquet::ParquetSink;
pub use config::{CliConfig, FetchMode};
pub use core::driver::PaginationDriver;
pub use domain::model::{DateRange, PageResult, PatentRecord, RunReport};
pub use utils::error::{FetchError, Result};
