//! Text analysis primitives shared by the lexicon and the repair engine.

pub mod stem;

pub use stem::{PorterStemmer, Stemmer};
