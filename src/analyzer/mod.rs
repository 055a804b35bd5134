// file: src/analyzer/mod.rs
// description: analysis routines module exports
// reference: internal module structure

pub mod conversion;
pub mod frequency;
pub mod statistics;
pub mod word_count;

pub use conversion::{Conversion, convert_all, to_binary, to_hexadecimal};
pub use statistics::Statistics;
pub use word_count::{WordFrequencies, count_words};
