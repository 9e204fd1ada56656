//! Transformer configuration.
//!
//! ```
//! use lexfeat::config::TransformerConfig;
//!
//! let config = TransformerConfig::from_json_str(r#"{"field": "phonology"}"#)
//!     .expect("valid config");
//! assert_eq!(config.field, "phonology");
//! assert_eq!(config.vec_len, 0);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Field read from input records when none is configured.
pub const DEFAULT_FIELD: &str = "orthography";

/// Settings shared by every transformer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformerConfig {
    /// Record field to featurize, e.g. `"orthography"` or `"phonology"`.
    #[serde(default = "default_field")]
    pub field: String,
    /// Output row width. Transformers that derive it during fit overwrite it.
    #[serde(default)]
    pub vec_len: usize,
}

fn default_field() -> String {
    DEFAULT_FIELD.to_string()
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
            vec_len: 0,
        }
    }
}

impl TransformerConfig {
    /// Config reading `field` with an unset row width.
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            vec_len: 0,
        }
    }

    /// Sets the output row width.
    #[must_use]
    pub fn with_vec_len(mut self, vec_len: usize) -> Self {
        self.vec_len = vec_len;
        self
    }

    /// Parses a config from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or wrongly typed keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
