use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of rows the upstream API returns per request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Inclusive grant-date range to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// One page of the upstream result set. Built by the pagination driver,
/// consumed once when the request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub page_size: u64,
    pub range: DateRange,
}

/// The six fields retained from a raw upstream grant object. Everything
/// else the API returns is dropped at projection time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentRecord {
    #[serde(rename = "patentNumber")]
    pub patent_number: Option<String>,
    #[serde(rename = "patentApplicationNumber")]
    pub patent_application_number: Option<String>,
    #[serde(rename = "assigneeEntityName")]
    pub assignee_entity_name: Option<String>,
    #[serde(rename = "filingDate")]
    pub filing_date: Option<String>,
    #[serde(rename = "grantDate")]
    pub grant_date: Option<String>,
    #[serde(rename = "inventionTitle")]
    pub invention_title: Option<String>,
}

/// Result of one page fetch. `total_count` is only meaningful on the
/// probe request; the upstream echoes it on every page regardless.
#[derive(Debug, Clone, Default)]
pub struct PageResult {
    pub total_count: Option<u64>,
    pub records: Vec<PatentRecord>,
}

/// Per-run accounting. Failed offsets are recorded rather than silently
/// folded into the output, so a partial result is distinguishable from a
/// complete one.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub total_count: u64,
    pub fetched_records: u64,
    pub pages_ok: u64,
    pub failed_offsets: Vec<u64>,
    pub artifacts: Vec<PathBuf>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failed_offsets.is_empty()
    }
}
