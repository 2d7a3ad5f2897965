//! Shared utility modules.

pub mod levenshtein;

pub use levenshtein::{levenshtein_distance, normalized_distance};
