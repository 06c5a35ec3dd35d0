pub mod aggregator;
pub mod imputer;
pub mod normalizer;
pub mod pipeline;

pub use aggregator::{MedianAggregator, MedianTable};
pub use imputer::Imputer;
pub use normalizer::Normalizer;
pub use pipeline::{CleaningPipeline, PipelineOptions, PipelineReport};
