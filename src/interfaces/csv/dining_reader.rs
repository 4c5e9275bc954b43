use crate::domain::dining::Dining;
use crate::error::{Result, RewardError};
use std::io::Read;

/// Reads dining events from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Dining>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct DiningReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DiningReader<R> {
    /// Creates a new `DiningReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes dining events.
    ///
    /// This allows for processing large batches in a streaming fashion without
    /// loading the entire file into memory.
    pub fn dinings(self) -> impl Iterator<Item = Result<Dining>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RewardError::from))
    }
}
