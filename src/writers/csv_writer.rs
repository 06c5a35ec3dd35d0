use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;
use crate::models::Row;

/// Appends processed chunks to a single output file with one shared header.
///
/// The first chunk replaces any prior output and writes the header;
/// subsequent chunks append rows only. Output row order is chunk-arrival
/// order, which equals source order.
pub struct ChunkedCsvWriter {
    path: PathBuf,
    header: Vec<String>,
    chunks_written: usize,
    rows_written: u64,
}

impl ChunkedCsvWriter {
    /// Prepare a writer for `path`, creating the parent directory if absent.
    /// Nothing is written until the first chunk arrives.
    pub fn create(path: &Path, header: Vec<String>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            header,
            chunks_written: 0,
            rows_written: 0,
        })
    }

    /// Write one chunk. Missing cells serialize as empty fields and quoting
    /// is minimal: only fields that require escaping are quoted.
    pub fn write_chunk(&mut self, rows: &[Row]) -> Result<()> {
        let first = self.chunks_written == 0;
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(first)
            .append(!first)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .has_headers(false)
            .from_writer(file);

        if first {
            writer.write_record(&self.header)?;
        }
        for row in rows {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        writer.flush()?;

        self.chunks_written += 1;
        self.rows_written += rows.len() as u64;
        Ok(())
    }

    pub fn chunks_written(&self) -> usize {
        self.chunks_written
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }
}
