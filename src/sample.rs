//! Struct `Sample` represents a one-dimensional regression sample.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;

/// Provides synthetic samples.
pub mod synthetic;


pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
