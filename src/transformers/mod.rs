//! Word transformers.
//!
//! - [`FeatureTransformer`]: shared configuration and fitted state. It
//!   implements [`WordTransformer`](crate::traits::WordTransformer) without
//!   overriding anything, so `vectorize` and `inverse_transform` are
//!   unsupported on it.
//! - [`LinearTransformer`]: concatenates per-symbol feature vectors into
//!   fixed-width slots.

mod linear;

pub use linear::LinearTransformer;

use crate::config::TransformerConfig;
use crate::error::{LexfeatError, Result};
use crate::features::FeatureLookup;
use crate::traits::WordTransformer;
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// Base state shared by transformers that read a feature lookup.
///
/// # Example
///
/// ```
/// use lexfeat::prelude::*;
///
/// let lookup = FeatureLookup::single([("a", vec![1.0])]);
/// let base = FeatureTransformer::new(lookup, "orthography");
///
/// assert!(!base.is_fitted());
/// assert!(base.check(&["aa"]).is_ok());
/// assert!(base.check(&["ab"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTransformer {
    features: FeatureLookup,
    field: String,
    vec_len: usize,
    fitted: bool,
}

impl FeatureTransformer {
    /// Creates an unfitted transformer with `vec_len == 0`.
    #[must_use]
    pub fn new(features: FeatureLookup, field: impl Into<String>) -> Self {
        Self {
            features,
            field: field.into(),
            vec_len: 0,
            fitted: false,
        }
    }

    /// Creates an unfitted transformer from a config.
    #[must_use]
    pub fn from_config(config: &TransformerConfig, features: FeatureLookup) -> Self {
        Self::new(features, config.field.clone()).with_vec_len(config.vec_len)
    }

    /// Sets the output row width.
    #[must_use]
    pub fn with_vec_len(mut self, vec_len: usize) -> Self {
        self.vec_len = vec_len;
        self
    }

    /// The feature lookup.
    #[must_use]
    pub fn features(&self) -> &FeatureLookup {
        &self.features
    }

    /// Record field this transformer reads.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Output row width.
    #[must_use]
    pub fn vec_len(&self) -> usize {
        self.vec_len
    }

    /// Longest vector in the primary feature table.
    #[must_use]
    pub fn dlen(&self) -> usize {
        self.features.dlen()
    }

    /// Returns true once a fit has completed.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Records the outcome of a fit: the derived row width, and that
    /// `transform` may now run.
    pub fn mark_fitted(&mut self, vec_len: usize) {
        self.vec_len = vec_len;
        self.fitted = true;
    }

    /// Fails if any symbol in `words` is missing from the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`LexfeatError::UnknownSymbols`] holding exactly the unknown
    /// symbols.
    pub fn check<W: Word>(&self, words: &[W]) -> Result<()> {
        let unknown = self
            .features
            .unknown(words.iter().flat_map(|w| w.symbols()));
        if unknown.is_empty() {
            return Ok(());
        }
        tracing::warn!(
            unknown = unknown.len(),
            field = %self.field,
            "input contains symbols missing from the feature lookup"
        );
        Err(LexfeatError::UnknownSymbols { symbols: unknown })
    }
}

impl WordTransformer for FeatureTransformer {
    fn base(&self) -> &FeatureTransformer {
        self
    }

    fn name(&self) -> &'static str {
        "FeatureTransformer"
    }
}
