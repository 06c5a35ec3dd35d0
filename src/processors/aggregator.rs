use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::ColumnIndex;
use crate::utils::constants::{CITY_COLUMN, WEATHER_COLUMNS};
use crate::utils::parsing::parse_float;

/// Finalized per-city and global medians for the weather columns.
///
/// Built once per pipeline run from a complete scan of the source and
/// immutable afterwards. Cities or columns with no observed values simply
/// have no entry; an absent median is never substituted with zero.
#[derive(Debug, Clone)]
pub struct MedianTable {
    by_city: HashMap<String, HashMap<&'static str, f64>>,
    global: HashMap<&'static str, f64>,
    rows_scanned: u64,
}

impl MedianTable {
    pub fn city_median(&self, city: &str, column: &str) -> Option<f64> {
        self.by_city.get(city).and_then(|m| m.get(column)).copied()
    }

    pub fn global_median(&self, column: &str) -> Option<f64> {
        self.global.get(column).copied()
    }

    /// Number of source rows the table was computed from
    pub fn rows_scanned(&self) -> u64 {
        self.rows_scanned
    }

    pub fn city_count(&self) -> usize {
        self.by_city.len()
    }
}

/// First streaming pass: accumulates non-missing weather values per city and
/// globally, then finalizes the medians. The scan is independent of the main
/// cleaning pass; two full reads of the source are the price of computing
/// groupwise medians without buffering the whole dataset.
///
/// This is a narrow read: only the city field and the weather fields are
/// extracted from each record, full rows are never materialized.
pub struct MedianAggregator {
    chunk_size: usize,
}

impl MedianAggregator {
    /// `chunk_size` sets the logging cadence of the scan; the pass itself
    /// streams record by record.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Scan the entire source and compute the median table. Every record
    /// contributes to the accumulated lists, so the result reflects the
    /// whole source rather than any single chunk.
    pub fn aggregate(&self, source: &Path) -> Result<MedianTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(source)?;
        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(|field| field.to_string())
            .collect();
        let index = ColumnIndex::from_header(&header);

        let city_pos = index.get(CITY_COLUMN);
        let weather_positions: Vec<(&'static str, usize)> = WEATHER_COLUMNS
            .iter()
            .filter_map(|&column| index.get(column).map(|pos| (column, pos)))
            .collect();

        let mut city_values: HashMap<String, HashMap<&'static str, Vec<f64>>> = HashMap::new();
        let mut global_values: HashMap<&'static str, Vec<f64>> = HashMap::new();
        let mut record = StringRecord::new();
        let mut rows_scanned: u64 = 0;

        while reader.read_record(&mut record)? {
            rows_scanned += 1;
            let city = city_pos
                .and_then(|pos| record.get(pos))
                .filter(|value| !value.is_empty());
            for &(column, pos) in &weather_positions {
                let Some(value) = record.get(pos).and_then(parse_float) else {
                    continue;
                };
                if let Some(city) = city {
                    city_values
                        .entry(city.to_string())
                        .or_default()
                        .entry(column)
                        .or_default()
                        .push(value);
                }
                global_values.entry(column).or_default().push(value);
            }
            if rows_scanned % self.chunk_size as u64 == 0 {
                debug!(rows_scanned, "aggregation scan progress");
            }
        }

        let by_city = city_values
            .into_iter()
            .map(|(city, columns)| {
                let medians = columns
                    .into_iter()
                    .filter_map(|(column, values)| median(values).map(|m| (column, m)))
                    .collect();
                (city, medians)
            })
            .collect();

        let global = global_values
            .into_iter()
            .filter_map(|(column, values)| median(values).map(|m| (column, m)))
            .collect();

        let table = MedianTable {
            by_city,
            global,
            rows_scanned,
        };
        info!(
            rows = table.rows_scanned,
            cities = table.city_count(),
            "median aggregation complete"
        );
        Ok(table)
    }
}

/// Standard sample median: mean of the two middle values for even-length
/// input, `None` for empty input.
fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}
