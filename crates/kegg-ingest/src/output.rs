//! Writers for parsed list records

use std::io::Write;

use kegg_common::types::{Category, ListRecord};
use kegg_common::{KeggError, Result};
use serde::{Deserialize, Serialize};
use serde_jsonlines::WriteExt;

/// Serialization format for parsed records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
    /// Tab-separated values with a header row
    Tsv,
}

/// Write `records` of `category` to `writer` in the given format
pub fn write_records<W: Write>(
    mut writer: W,
    category: &Category,
    records: &[ListRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        },
        OutputFormat::Jsonl => {
            writer.write_json_lines(records)?;
        },
        OutputFormat::Tsv => {
            let header = ListRecord::tsv_header(category)
                .ok_or_else(|| KeggError::UnsupportedCategory(category.to_string()))?;
            writeln!(writer, "{}", header)?;
            for record in records {
                writeln!(writer, "{}", record.to_tsv())?;
            }
        },
    }

    writer.flush()?;
    Ok(())
}
