use crate::domain::model::PatentRecord;
use crate::domain::ports::RecordSink;
use crate::utils::error::Result;
use polars::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Writes record collections as Snappy-compressed Parquet files under a
/// single output directory, created on demand. Chunk filenames carry a
/// fresh UUID so concurrent pages can never collide.
pub struct ParquetSink {
    output_dir: PathBuf,
}

impl ParquetSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn write(&self, file_name: &str, records: &[PatentRecord]) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(file_name);

        let mut df = dataframe(records)?;
        let mut file = fs::File::create(&path)?;
        ParquetWriter::new(&mut file)
            .with_compression(ParquetCompression::Snappy)
            .finish(&mut df)?;

        tracing::debug!("Wrote {} record(s) to {}", records.len(), path.display());
        Ok(path)
    }
}

impl RecordSink for ParquetSink {
    fn write_consolidated(&self, records: &[PatentRecord]) -> Result<PathBuf> {
        self.write("patent_data.parquet", records)
    }

    fn write_chunk(&self, records: &[PatentRecord]) -> Result<PathBuf> {
        self.write(&format!("split_{}.parquet", Uuid::new_v4()), records)
    }
}

/// Column names match the upstream field names so downstream consumers see
/// the same schema the API exposes.
fn dataframe(records: &[PatentRecord]) -> Result<DataFrame> {
    fn column(
        records: &[PatentRecord],
        get: impl Fn(&PatentRecord) -> &Option<String>,
    ) -> Vec<Option<String>> {
        records.iter().map(|r| get(r).clone()).collect()
    }

    let df = df!(
        "patentNumber" => column(records, |r| &r.patent_number),
        "patentApplicationNumber" => column(records, |r| &r.patent_application_number),
        "assigneeEntityName" => column(records, |r| &r.assignee_entity_name),
        "filingDate" => column(records, |r| &r.filing_date),
        "grantDate" => column(records, |r| &r.grant_date),
        "inventionTitle" => column(records, |r| &r.invention_title),
    )?;
    Ok(df)
}

/// Reads a Parquet artifact back into a DataFrame. Used by tests and handy
/// for ad-hoc inspection of fetched data.
pub fn read_parquet(path: &Path) -> Result<DataFrame> {
    let file = fs::File::open(path)?;
    let df = ParquetReader::new(file).finish()?;
    Ok(df)
}
