use crate::domain::model::MAX_PAGE_SIZE;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub const USPTO_GRANTS_URL: &str = "https://developer.uspto.gov/ibd-api/v1/application/grants";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Fetch pages one at a time and write one consolidated file.
    Sequential,
    /// Fetch pages with bounded fan-out and write one chunk file per page.
    Concurrent,
}

#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "patent-fetcher")]
#[command(about = "Fetches USPTO granted-patent records into Parquet files")]
pub struct CliConfig {
    /// Fetch patents granted on or after this date (YYYY-MM-DD)
    pub from_date: NaiveDate,

    /// Fetch patents granted up to this date (YYYY-MM-DD)
    pub to_date: NaiveDate,

    #[arg(long, value_enum, default_value_t = FetchMode::Sequential)]
    pub mode: FetchMode,

    /// Rows per page request; the upstream API caps this at 100
    #[arg(long, default_value_t = MAX_PAGE_SIZE)]
    pub page_size: u64,

    /// Maximum in-flight page requests in concurrent mode
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,

    #[arg(long, default_value = "patents")]
    pub output_dir: String,

    #[arg(long, default_value = "patent_fetcher.log")]
    pub log_file: String,

    #[arg(long, default_value = USPTO_GRANTS_URL)]
    pub api_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl crate::domain::ports::ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn page_size(&self) -> u64 {
        self.page_size
    }

    fn concurrency(&self) -> usize {
        self.concurrency
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.from_date > self.to_date {
            return Err(FetchError::InvalidConfigValue {
                field: "from_date".to_string(),
                value: self.from_date.to_string(),
                reason: format!("from_date must not be after to_date ({})", self.to_date),
            });
        }
        validate_url("api_base_url", &self.api_base_url)?;
        validate_range("page_size", self.page_size, 1, MAX_PAGE_SIZE)?;
        validate_positive_number("concurrency", self.concurrency, 1)?;
        validate_non_empty_string("output_dir", &self.output_dir)?;
        validate_non_empty_string("log_file", &self.log_file)?;
        Ok(())
    }
}
