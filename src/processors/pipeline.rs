use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::ColumnIndex;
use crate::processors::{Imputer, MedianAggregator, Normalizer};
use crate::readers::ChunkReader;
use crate::utils::constants::{DEFAULT_CLEAN_CHUNK_SIZE, DERIVED_COLUMNS};
use crate::utils::progress::ProgressReporter;
use crate::writers::ChunkedCsvWriter;

/// Recognized cleaning options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub chunk_size: usize,
    pub impute_weather: bool,
    pub fill_end_with_start: bool,
    pub drop_missing_start_coordinates: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CLEAN_CHUNK_SIZE,
            impute_weather: true,
            fill_end_with_start: false,
            drop_missing_start_coordinates: false,
        }
    }
}

/// Diagnostics from a completed cleaning run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub rows_processed: u64,
    pub rows_written: u64,
    pub rows_dropped: u64,
    pub chunks_written: usize,
    pub medians_from_rows: Option<u64>,
}

/// Two-phase streaming cleaning pipeline.
///
/// Phase 1 scans the whole source and finalizes the median table; phase 2
/// re-reads the source chunk by chunk, normalizing, imputing and appending
/// to the output. The phases are strictly sequential and single-threaded:
/// the median table is complete and immutable before any imputation starts.
pub struct CleaningPipeline {
    options: PipelineOptions,
}

impl CleaningPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn run(
        &self,
        source: &Path,
        output: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<PipelineReport> {
        // Phase 1: full aggregation scan
        let medians = if self.options.impute_weather {
            if let Some(p) = progress {
                p.set_message("Computing city-level weather medians...");
            }
            let table = MedianAggregator::new(self.options.chunk_size).aggregate(source)?;
            Some(table)
        } else {
            None
        };

        // Phase 2: normalize, impute and write chunk by chunk
        let mut reader = ChunkReader::open(source, self.options.chunk_size)?;
        let index = ColumnIndex::from_header(reader.header());

        let mut output_header = reader.header().to_vec();
        output_header.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));
        let mut writer = ChunkedCsvWriter::create(output, output_header)?;

        let normalizer = Normalizer::new()
            .with_fill_end_with_start(self.options.fill_end_with_start)
            .with_drop_missing_start_coordinates(self.options.drop_missing_start_coordinates);
        let imputer = medians.as_ref().map(Imputer::new);

        let mut rows_processed: u64 = 0;
        let mut rows_dropped: u64 = 0;

        while let Some(chunk) = reader.next_chunk()? {
            rows_processed += chunk.len() as u64;
            let (mut rows, dropped) = normalizer.normalize_chunk(chunk, &index);
            rows_dropped += dropped;

            if let Some(imputer) = &imputer {
                imputer.impute_chunk(&mut rows, &index);
            }

            writer.write_chunk(&rows)?;
            info!(
                rows_processed,
                chunk = writer.chunks_written(),
                "processed chunk"
            );
            if let Some(p) = progress {
                p.set_message(&format!("Processed {} rows...", rows_processed));
            }
        }

        Ok(PipelineReport {
            rows_processed,
            rows_written: writer.rows_written(),
            rows_dropped,
            chunks_written: writer.chunks_written(),
            medians_from_rows: medians.map(|m| m.rows_scanned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("accidents.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_end_to_end_clean_and_impute() {
        let dir = TempDir::new().unwrap();
        let source = write_source(
            &dir,
            "ID,City,Start_Time,Temperature(F),Amenity,Start_Lat\n\
             A-1,Dayton,2016-02-08 05:46:00,36.9,Yes,39.9\n\
             A-2,Dayton,2016-02-08 06:07:59,,No,40.1\n\
             A-3,Dublin,bad-date,50.0,,95.0\n",
        );
        let output = dir.path().join("cleaned").join("out.csv");

        let report = CleaningPipeline::new(PipelineOptions {
            chunk_size: 2,
            ..Default::default()
        })
        .run(&source, &output, None)
        .unwrap();

        assert_eq!(report.rows_processed, 3);
        assert_eq!(report.rows_written, 3);
        assert_eq!(report.rows_dropped, 0);
        assert_eq!(report.chunks_written, 2);
        assert_eq!(report.medians_from_rows, Some(3));

        let content = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "ID,City,Start_Time,Temperature(F),Amenity,Start_Lat,\
             has_end_coordinates,start_hour,start_date"
        );
        // Missing temperature filled with the Dayton median
        assert_eq!(
            lines[2],
            "A-2,Dayton,2016-02-08 06:07:59,36.9,false,40.1,false,6,2016-02-08"
        );
        // Bad date nulled, out-of-range latitude nulled, empty flag false
        assert_eq!(lines[3], "A-3,Dublin,,50,false,,false,,");
    }

    #[test]
    fn test_imputation_disabled_leaves_missing_cells() {
        let dir = TempDir::new().unwrap();
        let source = write_source(
            &dir,
            "ID,City,Temperature(F)\n\
             A-1,Dayton,36.9\n\
             A-2,Dayton,\n",
        );
        let output = dir.path().join("out.csv");

        let report = CleaningPipeline::new(PipelineOptions {
            chunk_size: 10,
            impute_weather: false,
            ..Default::default()
        })
        .run(&source, &output, None)
        .unwrap();

        assert_eq!(report.medians_from_rows, None);
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.lines().nth(2).unwrap().starts_with("A-2,Dayton,,"));
    }

    #[test]
    fn test_drop_policy_reported() {
        let dir = TempDir::new().unwrap();
        let source = write_source(
            &dir,
            "ID,Start_Lat,Start_Lng\n\
             A-1,39.9,-84.0\n\
             A-2,,-84.0\n",
        );
        let output = dir.path().join("out.csv");

        let report = CleaningPipeline::new(PipelineOptions {
            chunk_size: 10,
            impute_weather: false,
            drop_missing_start_coordinates: true,
            ..Default::default()
        })
        .run(&source, &output, None)
        .unwrap();

        assert_eq!(report.rows_dropped, 1);
        assert_eq!(report.rows_written, 1);
    }
}
