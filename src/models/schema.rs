use std::collections::HashMap;

/// Column name to position lookup built once from the source header.
///
/// Expected columns that are absent from a particular export simply resolve
/// to `None`; the dependent transformation is skipped rather than errored.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
    width: usize,
}

impl ColumnIndex {
    pub fn from_header(header: &[String]) -> Self {
        let positions = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            positions,
            width: header.len(),
        }
    }

    /// Position of a column, if the source has it
    pub fn get(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Number of columns in the source header
    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lookup() {
        let index = ColumnIndex::from_header(&header(&["ID", "City", "Start_Lat"]));
        assert_eq!(index.get("ID"), Some(0));
        assert_eq!(index.get("Start_Lat"), Some(2));
        assert_eq!(index.get("End_Lat"), None);
        assert_eq!(index.width(), 3);
    }
}
