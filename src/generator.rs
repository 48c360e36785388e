//! Record generator.
//!
//! Produces the ordered dataset: names are derived from the 1-based index,
//! ages are drawn uniformly from `[MIN_AGE, MAX_AGE]` through the injected
//! `RandomSource`.

use crate::error::Result;
use crate::record::{Dataset, Record, AGE_SPAN};
use crate::source::RandomSource;

/// Number of records a default run generates
pub const DEFAULT_COUNT: usize = 10_000;

/// Generates user records from a random source.
pub struct Generator<S> {
    source: S,
}

impl<S: RandomSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate `count` records, `User1` through `User{count}`.
    ///
    /// Fails with `SourceUnavailable` as soon as the source does; no partial
    /// dataset is returned.
    pub fn generate(&mut self, count: usize) -> Result<Dataset> {
        let mut data = Vec::with_capacity(count);
        for index in 1..=count {
            data.push(self.next_record(index)?);
        }
        Ok(data)
    }

    fn next_record(&mut self, index: usize) -> Result<Record> {
        let offset = self.source.next_in(0..=AGE_SPAN - 1)?;
        Ok(Record::at_index(index, offset))
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
