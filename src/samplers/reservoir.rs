use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::Row;
use crate::readers::ChunkReader;
use crate::utils::progress::ProgressReporter;
use crate::writers::ChunkedCsvWriter;

/// Fixed-capacity uniform random sample over an unbounded record stream
/// (Algorithm R).
///
/// The k-th observed record (1-indexed) is appended directly while the
/// reservoir has room; afterwards a uniform j in [0, k-1] either overwrites
/// slot j (j < capacity) or discards the record. Every subset of `capacity`
/// records is equally likely, in O(capacity) memory, in one forward pass.
///
/// Final slot order is arbitrary; consumers must not assume the sample
/// preserves stream order.
pub struct ReservoirSampler<T> {
    capacity: usize,
    seen: u64,
    reservoir: Vec<T>,
    rng: StdRng,
}

impl<T> ReservoirSampler<T> {
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            capacity,
            seen: 0,
            reservoir: Vec::with_capacity(capacity),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Offer the next stream record to the reservoir
    pub fn observe(&mut self, item: T) {
        self.seen += 1;
        if self.reservoir.len() < self.capacity {
            self.reservoir.push(item);
        } else if self.capacity > 0 {
            let slot = self.rng.gen_range(0..self.seen);
            if (slot as usize) < self.capacity {
                self.reservoir[slot as usize] = item;
            }
        }
    }

    /// Total records offered so far
    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn len(&self) -> usize {
        self.reservoir.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservoir.is_empty()
    }

    /// Consume the sampler, returning the final sample in slot order
    pub fn into_sample(self) -> Vec<T> {
        self.reservoir
    }
}

/// Diagnostics from a completed sampling run
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub rows_seen: u64,
    pub rows_sampled: usize,
    pub seed: u64,
}

/// Stream a delimited file through a seeded reservoir and write the sample
/// with the source header. Output size is min(sample_size, total rows).
pub fn sample_file(
    source: &Path,
    output: &Path,
    sample_size: usize,
    seed: u64,
    chunk_size: usize,
    progress: Option<&ProgressReporter>,
) -> Result<SampleReport> {
    let mut reader = ChunkReader::open(source, chunk_size)?;
    let header = reader.header().to_vec();
    let mut sampler: ReservoirSampler<Row> = ReservoirSampler::new(sample_size, seed);

    while let Some(chunk) = reader.next_chunk()? {
        for row in chunk {
            sampler.observe(row);
        }
        if let Some(p) = progress {
            p.set_message(&format!("Scanned {} rows...", sampler.seen()));
        }
    }

    let rows_seen = sampler.seen();
    let sample = sampler.into_sample();
    let rows_sampled = sample.len();

    let mut writer = ChunkedCsvWriter::create(output, header)?;
    writer.write_chunk(&sample)?;

    info!(rows_seen, rows_sampled, seed, "reservoir sampling complete");
    Ok(SampleReport {
        rows_seen,
        rows_sampled,
        seed,
    })
}
