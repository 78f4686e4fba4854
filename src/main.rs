use clap::Parser;
use patent_fetcher::utils::{logger, validation::Validate};
use patent_fetcher::{CliConfig, DateRange, FetchMode, PaginationDriver, ParquetSink};
use std::path::Path;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(Path::new(&config.log_file), config.verbose)?;

    tracing::info!("Starting patent-fetcher");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let range = DateRange {
        from_date: config.from_date,
        to_date: config.to_date,
    };
    let mode = config.mode;
    let sink = ParquetSink::new(&config.output_dir);
    let driver = PaginationDriver::new(sink, config);

    let started = Instant::now();
    let outcome = match mode {
        FetchMode::Sequential => driver.run_sequential(&range).await,
        FetchMode::Concurrent => driver.run_concurrent(&range).await,
    };
    let elapsed_min = started.elapsed().as_secs_f64() / 60.0;

    match outcome {
        Ok(report) => {
            tracing::info!("Total execution time: {:.2} min", elapsed_min);
            if report.is_complete() {
                tracing::info!(
                    "Fetched {}/{} patents into {} file(s). END",
                    report.fetched_records,
                    report.total_count,
                    report.artifacts.len()
                );
                println!(
                    "Fetched {}/{} patents into {} file(s)",
                    report.fetched_records,
                    report.total_count,
                    report.artifacts.len()
                );
            } else {
                tracing::warn!(
                    "Partial result: {}/{} patents fetched; failed offsets: {:?}",
                    report.fetched_records,
                    report.total_count,
                    report.failed_offsets
                );
                eprintln!(
                    "partial result: {}/{} patents fetched; failed offsets: {:?}",
                    report.fetched_records, report.total_count, report.failed_offsets
                );
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
