use crate::domain::model::PatentRecord;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Destination for projected records. The consolidated form is used by the
/// sequential driver; chunks are written independently by the fan-out driver.
pub trait RecordSink: Send + Sync {
    fn write_consolidated(&self, records: &[PatentRecord]) -> Result<PathBuf>;
    fn write_chunk(&self, records: &[PatentRecord]) -> Result<PathBuf>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn page_size(&self) -> u64;
    fn concurrency(&self) -> usize;
}
