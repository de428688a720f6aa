//! Struct `Sample` represents a batch sample of categorical data.

// Provides feature struct.
pub(crate) mod feature_struct;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use feature_struct::Feature;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
