pub mod constants;
pub mod parsing;
pub mod progress;

pub use constants::*;
pub use parsing::{extract_zipcode, parse_datetime, parse_float, parse_truthy, validate_coordinate};
pub use progress::ProgressReporter;
