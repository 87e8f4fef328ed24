//! Content extraction adapters.

mod mxfile_extractor;

pub use mxfile_extractor::MxfileExtractor;
