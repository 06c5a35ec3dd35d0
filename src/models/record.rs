use csv::StringRecord;

/// A single dataset row, positionally aligned with the source header.
/// `None` marks a missing value: an empty source field or a field that
/// failed type coercion.
pub type Row = Vec<Option<String>>;

/// Convert a raw CSV record into a row of `width` fields. Short records are
/// padded with missing values and overlong records are truncated, so every
/// row stays aligned with the header.
pub fn row_from_record(record: &StringRecord, width: usize) -> Row {
    let mut row: Row = Vec::with_capacity(width);
    for i in 0..width {
        let value = record.get(i).unwrap_or("");
        if value.is_empty() {
            row.push(None);
        } else {
            row.push(Some(value.to_string()));
        }
    }
    row
}
