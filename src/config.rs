//! Configuration for the lexicon, the repair engine and the keyword normalizer.
//!
//! Every section has defaults, so a configuration file only needs to name the
//! values it changes:
//!
//! ```json
//! {
//!   "lexicon": { "stems_path": "/usr/share/notemend/stems.t",
//!                "words_path": "/usr/share/notemend/words.t" },
//!   "repair": { "edit_strategy": "literal" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NotemendError, Result};
use crate::keyword::KeywordConfig;
use crate::lexicon::LexiconConfig;
use crate::repair::RepairConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotemendConfig {
    pub lexicon: LexiconConfig,
    pub repair: RepairConfig,
    pub keyword: KeywordConfig,
}

impl NotemendConfig {
    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: NotemendConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no component can work with.
    pub fn validate(&self) -> Result<()> {
        let distance = self.keyword.max_abbreviation_distance;
        if !(0.0..=1.0).contains(&distance) {
            return Err(NotemendError::config(format!(
                "keyword.max_abbreviation_distance must be within 0.0..=1.0, got {distance}"
            )));
        }
        if self.lexicon.stems_path == self.lexicon.words_path {
            return Err(NotemendError::config(
                "lexicon.stems_path and lexicon.words_path must differ",
            ));
        }
        Ok(())
    }
}
