pub mod reservoir;

pub use reservoir::{sample_file, ReservoirSampler, SampleReport};
