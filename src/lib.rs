//! Seeded fixture generator for user list documents.
//!
//! Generates `User1..UserN` records with uniformly random ages in `[18, 77]`,
//! wraps them with a presentation descriptor and writes the result as one
//! JSON document.
//!
//! # Example
//!
//! ```rust
//! use user_list_seeder::{
//!     assemble_and_write, Encoding, Generator, PresentationDescriptor, SeededSource,
//! };
//!
//! // Seed the source for reproducible ages
//! let mut gen = Generator::new(SeededSource::seeded(42));
//! let records = gen.generate(3).unwrap();
//!
//! let mut out: Vec<u8> = Vec::new();
//! assemble_and_write(records, PresentationDescriptor::user_list(), &mut out, Encoding::Pretty)
//!     .unwrap();
//!
//! println!("{}", String::from_utf8(out).unwrap());
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod record;
pub mod sink;
pub mod source;
pub mod writer;

pub use config::SeedConfig;
pub use document::{Document, DocumentSummary, Encoding, PresentationDescriptor};
pub use error::{Result, SeedError};
pub use generator::{Generator, DEFAULT_COUNT};
pub use record::{Dataset, Record, MAX_AGE, MIN_AGE};
pub use sink::{FileSink, Sink, StdoutSink};
pub use source::{RandomSource, RngSource, SeededSource};
pub use writer::{assemble_and_write, write_document, WriteReport};
