use crate::error::{ProcessingError, Result};
use crate::models::{row_from_record, Row};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// Streaming CSV reader that yields bounded-size chunks of rows in source
/// order. Only one chunk is resident in memory at a time, so arbitrarily
/// large files can be processed.
pub struct ChunkReader {
    reader: csv::Reader<File>,
    header: Vec<String>,
    chunk_size: usize,
    record: StringRecord,
    rows_read: u64,
}

impl ChunkReader {
    /// Open a delimited file with a header row. A missing file or a file
    /// that cannot be parsed as tabular data is a fatal error.
    pub fn open(path: &Path, chunk_size: usize) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(|field| field.to_string())
            .collect();
        if header.is_empty() {
            return Err(ProcessingError::InvalidFormat(format!(
                "{}: source has no header row",
                path.display()
            )));
        }

        Ok(Self {
            reader,
            header,
            chunk_size: chunk_size.max(1),
            record: StringRecord::new(),
            rows_read: 0,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Total rows handed out so far
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Read the next chunk of up to `chunk_size` rows. Returns `None` once
    /// the source is exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<Vec<Row>>> {
        let width = self.header.len();
        let mut rows = Vec::with_capacity(self.chunk_size.min(16_384));

        while rows.len() < self.chunk_size {
            if !self.reader.read_record(&mut self.record)? {
                break;
            }
            rows.push(row_from_record(&self.record, width));
            self.rows_read += 1;
        }

        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows))
        }
    }
}
