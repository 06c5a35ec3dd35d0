pub mod record;
pub mod schema;

pub use record::{row_from_record, Row};
pub use schema::ColumnIndex;
