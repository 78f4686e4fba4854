use crate::core::{fetcher::PageFetcher, link};
use crate::domain::model::{DateRange, PageRequest, RunReport};
use crate::domain::ports::{ConfigProvider, RecordSink};
use crate::utils::error::{FetchError, Result};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;

/// Drives the three-phase run: probe for the total count, fetch every page,
/// flush to the sink. Neither phase is retried or resumed.
pub struct PaginationDriver<S: RecordSink, C: ConfigProvider> {
    fetcher: PageFetcher,
    sink: S,
    config: C,
}

/// Offsets 0, page_size, 2*page_size, ... strictly below the total count.
fn page_offsets(total_count: u64, page_size: u64) -> Vec<u64> {
    (0..total_count).step_by(page_size as usize).collect()
}

impl<S: RecordSink, C: ConfigProvider> PaginationDriver<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self {
            fetcher: PageFetcher::new(),
            sink,
            config,
        }
    }

    /// Minimal request (offset 0, one row) issued solely to learn the total
    /// record count. Any failure here is fatal: no output is produced.
    async fn probe(&self, range: &DateRange) -> Result<u64> {
        let request = PageRequest {
            offset: 0,
            page_size: 1,
            range: *range,
        };
        let link = link::grants_link(self.config.api_base_url(), &request);
        let page = self
            .fetcher
            .fetch_page(&link)
            .await
            .map_err(|e| FetchError::Probe {
                reason: e.to_string(),
            })?;

        page.total_count.ok_or_else(|| FetchError::Probe {
            reason: "upstream response carried no recordTotalQuantity".to_string(),
        })
    }

    /// Fetches pages one at a time in ascending offset order and writes a
    /// single consolidated artifact. A failed page is skipped and its offset
    /// recorded in the report rather than silently shrinking the output.
    pub async fn run_sequential(&self, range: &DateRange) -> Result<RunReport> {
        let total_count = self.probe(range).await?;
        tracing::info!(
            "Total patents between {} - {} are {}",
            range.from_date,
            range.to_date,
            total_count
        );

        let mut report = RunReport {
            total_count,
            ..Default::default()
        };
        let mut all_records = Vec::new();

        for offset in page_offsets(total_count, self.config.page_size()) {
            tracing::info!("Fetching started from {}", offset);
            let request = PageRequest {
                offset,
                page_size: self.config.page_size(),
                range: *range,
            };
            let link = link::grants_link(self.config.api_base_url(), &request);
            match self.fetcher.fetch_page(&link).await {
                Ok(page) => {
                    report.pages_ok += 1;
                    report.fetched_records += page.records.len() as u64;
                    all_records.extend(page.records);
                    tracing::info!(
                        "Fetched {}/{} patents",
                        report.fetched_records,
                        total_count
                    );
                }
                Err(e) => {
                    tracing::warn!("Error fetching page at offset {}: {}", offset, e);
                    report.failed_offsets.push(offset);
                }
            }
        }

        let path = self.sink.write_consolidated(&all_records)?;
        report.artifacts.push(path);
        Ok(report)
    }

    /// Fetches all pages with bounded fan-out; each completed page is
    /// projected and flushed immediately to its own chunk artifact. Every
    /// page settles independently, so one failure never discards the
    /// results of the others.
    pub async fn run_concurrent(&self, range: &DateRange) -> Result<RunReport> {
        let total_count = self.probe(range).await?;
        tracing::info!(
            "Total patents between {} - {} are {}",
            range.from_date,
            range.to_date,
            total_count
        );

        let page_size = self.config.page_size();
        let outcomes: Vec<(u64, Result<(u64, PathBuf)>)> =
            stream::iter(page_offsets(total_count, page_size))
                .map(|offset| {
                    let request = PageRequest {
                        offset,
                        page_size,
                        range: *range,
                    };
                    let link = link::grants_link(self.config.api_base_url(), &request);
                    async move { (offset, self.fetch_and_flush(&link).await) }
                })
                .buffer_unordered(self.config.concurrency())
                .collect()
                .await;

        let mut report = RunReport {
            total_count,
            ..Default::default()
        };
        for (offset, outcome) in outcomes {
            match outcome {
                Ok((fetched, path)) => {
                    report.pages_ok += 1;
                    report.fetched_records += fetched;
                    report.artifacts.push(path);
                }
                Err(e) => {
                    tracing::warn!("Error fetching page at offset {}: {}", offset, e);
                    report.failed_offsets.push(offset);
                }
            }
        }
        report.failed_offsets.sort_unstable();

        tracing::info!(
            "Fetched {}/{} patents into {} chunk(s)",
            report.fetched_records,
            report.total_count,
            report.artifacts.len()
        );
        Ok(report)
    }

    async fn fetch_and_flush(&self, link: &str) -> Result<(u64, PathBuf)> {
        let page = self.fetcher.fetch_page(link).await?;
        let fetched = page.records.len() as u64;
        let path = self.sink.write_chunk(&page.records)?;
        Ok((fetched, path))
    }
}
