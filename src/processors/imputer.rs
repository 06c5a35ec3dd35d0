use crate::models::{ColumnIndex, Row};
use crate::processors::aggregator::MedianTable;
use crate::utils::constants::{CITY_COLUMN, WEATHER_COLUMNS};
use crate::utils::parsing::format_float;

/// Second-pass imputation of missing weather values.
///
/// Each missing cell is filled independently: city median first, global
/// median as the fallback, untouched if neither exists. Non-missing values
/// are never altered.
pub struct Imputer<'a> {
    medians: &'a MedianTable,
}

impl<'a> Imputer<'a> {
    pub fn new(medians: &'a MedianTable) -> Self {
        Self { medians }
    }

    /// Fill missing weather cells across a normalized chunk
    pub fn impute_chunk(&self, rows: &mut [Row], index: &ColumnIndex) {
        let city_pos = index.get(CITY_COLUMN);
        let weather_positions: Vec<(&'static str, usize)> = WEATHER_COLUMNS
            .iter()
            .filter_map(|&column| index.get(column).map(|pos| (column, pos)))
            .collect();

        for row in rows.iter_mut() {
            for &(column, pos) in &weather_positions {
                if row[pos].is_some() {
                    continue;
                }
                let city_median = city_pos
                    .and_then(|p| row[p].as_deref())
                    .and_then(|city| self.medians.city_median(city, column));
                let fill = city_median.or_else(|| self.medians.global_median(column));
                if let Some(value) = fill {
                    row[pos] = Some(format_float(value));
                }
            }
        }
    }
}
