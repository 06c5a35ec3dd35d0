use chrono::Timelike;

use crate::models::{ColumnIndex, Row};
use crate::utils::constants::{
    BOOL_COLUMNS, DATETIME_OUTPUT_FORMAT, DATE_COLUMNS, DATE_OUTPUT_FORMAT, DISTANCE_COLUMN,
    END_LAT_COLUMN, END_LNG_COLUMN, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
    START_LAT_COLUMN, START_LNG_COLUMN, START_TIME_COLUMN, WEATHER_COLUMNS, ZIPCODE_COLUMN,
};
use crate::utils::parsing::{
    extract_zipcode, format_float, parse_datetime, parse_float, parse_truthy, validate_coordinate,
};

/// Per-chunk field normalizer.
///
/// Coerces every classified field to its declared type, appends the derived
/// columns (`has_end_coordinates`, `start_hour`, `start_date`) and applies
/// the optional coordinate policies. Field-level parse failures are not
/// errors: the value becomes missing (or false for flag columns) and
/// processing continues.
pub struct Normalizer {
    fill_end_with_start: bool,
    drop_missing_start_coordinates: bool,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            fill_end_with_start: false,
            drop_missing_start_coordinates: false,
        }
    }

    pub fn with_fill_end_with_start(mut self, enabled: bool) -> Self {
        self.fill_end_with_start = enabled;
        self
    }

    pub fn with_drop_missing_start_coordinates(mut self, enabled: bool) -> Self {
        self.drop_missing_start_coordinates = enabled;
        self
    }

    /// Normalize a chunk in place. Returns the surviving rows (each extended
    /// with the derived columns) and the number of rows removed by the
    /// `drop_missing_start_coordinates` policy.
    pub fn normalize_chunk(&self, rows: Vec<Row>, index: &ColumnIndex) -> (Vec<Row>, u64) {
        let mut normalized = Vec::with_capacity(rows.len());
        let mut dropped: u64 = 0;

        let start_lat = index.get(START_LAT_COLUMN);
        let start_lng = index.get(START_LNG_COLUMN);

        for row in rows {
            let row = self.normalize_row(row, index);

            if self.drop_missing_start_coordinates {
                let missing_start = match (start_lat, start_lng) {
                    (Some(lat), Some(lng)) => row[lat].is_none() || row[lng].is_none(),
                    _ => false,
                };
                if missing_start {
                    dropped += 1;
                    continue;
                }
            }

            normalized.push(row);
        }

        (normalized, dropped)
    }

    fn normalize_row(&self, mut row: Row, index: &ColumnIndex) -> Row {
        // Timestamps: unparseable values become missing, never an error.
        // The parsed start time is kept for the derived hour/date columns.
        let mut start_time = None;
        for column in DATE_COLUMNS {
            if let Some(pos) = index.get(column) {
                let parsed = row[pos].as_deref().and_then(parse_datetime);
                if column == START_TIME_COLUMN {
                    start_time = parsed;
                }
                row[pos] = parsed.map(|dt| dt.format(DATETIME_OUTPUT_FORMAT).to_string());
            }
        }

        // Numeric measurements
        for column in WEATHER_COLUMNS.iter().chain([&DISTANCE_COLUMN]) {
            if let Some(pos) = index.get(column) {
                row[pos] = row[pos]
                    .as_deref()
                    .and_then(parse_float)
                    .map(format_float);
            }
        }

        // Road feature flags: always exactly true or false
        for column in BOOL_COLUMNS {
            if let Some(pos) = index.get(column) {
                let flag = row[pos].as_deref().map(parse_truthy).unwrap_or(false);
                row[pos] = Some(flag.to_string());
            }
        }

        if let Some(pos) = index.get(ZIPCODE_COLUMN) {
            row[pos] = row[pos].as_deref().and_then(extract_zipcode);
        }

        // Coordinates: out-of-range values become missing, never clamped
        for (column, min, max) in [
            (START_LAT_COLUMN, MIN_LATITUDE, MAX_LATITUDE),
            (START_LNG_COLUMN, MIN_LONGITUDE, MAX_LONGITUDE),
            (END_LAT_COLUMN, MIN_LATITUDE, MAX_LATITUDE),
            (END_LNG_COLUMN, MIN_LONGITUDE, MAX_LONGITUDE),
        ] {
            if let Some(pos) = index.get(column) {
                row[pos] = row[pos]
                    .as_deref()
                    .and_then(|v| validate_coordinate(v, min, max))
                    .map(format_float);
            }
        }

        let end_lat = index.get(END_LAT_COLUMN);
        let end_lng = index.get(END_LNG_COLUMN);
        let mut has_end = match (end_lat, end_lng) {
            (Some(lat), Some(lng)) => row[lat].is_some() && row[lng].is_some(),
            _ => false,
        };

        // Backfill end coordinates from start coordinates. This runs after
        // range validation, so an invalid start value is never copied.
        if self.fill_end_with_start && !has_end {
            if let (Some(s_lat), Some(s_lng), Some(e_lat), Some(e_lng)) = (
                index.get(START_LAT_COLUMN),
                index.get(START_LNG_COLUMN),
                end_lat,
                end_lng,
            ) {
                row[e_lat] = row[s_lat].clone();
                row[e_lng] = row[s_lng].clone();
                has_end = row[e_lat].is_some() && row[e_lng].is_some();
            }
        }

        // Derived columns, appended in output order
        row.push(Some(has_end.to_string()));
        row.push(start_time.map(|dt| dt.hour().to_string()));
        row.push(start_time.map(|dt| dt.date().format(DATE_OUTPUT_FORMAT).to_string()));

        row
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
