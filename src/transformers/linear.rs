//! Slot-based linear featurizer.

use super::FeatureTransformer;
use crate::config::TransformerConfig;
use crate::error::{LexfeatError, Result};
use crate::features::FeatureLookup;
use crate::primitives::Vector;
use crate::traits::WordTransformer;
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// Concatenates per-symbol feature vectors.
///
/// Each symbol occupies a slot as wide as the longest vector in the lookup.
/// A shorter vector fills the start of its slot and leaves zeros after it,
/// so ragged tables still produce aligned slots. Fitting records the longest
/// word and sets `vec_len = max_word_length * slot_width`. Words shorter than
/// that are zero-padded by `transform`. Longer words fail with
/// [`LexfeatError::DimensionMismatch`].
///
/// # Example
///
/// ```
/// use lexfeat::prelude::*;
///
/// let lookup = FeatureLookup::single([("a", vec![1.0, 0.0]), ("b", vec![0.0, 1.0])]);
/// let mut transformer = LinearTransformer::new(lookup, "orthography");
/// transformer.fit(&["ab", "b"]).expect("known symbols");
///
/// assert_eq!(transformer.base().vec_len(), 4);
/// let x = transformer.transform(&["b"]).expect("fitted");
/// assert_eq!(x.row_slice(0), &[0.0, 1.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearTransformer {
    base: FeatureTransformer,
    max_word_length: Option<usize>,
}

impl LinearTransformer {
    /// Creates an unfitted transformer reading `field`.
    #[must_use]
    pub fn new(features: FeatureLookup, field: impl Into<String>) -> Self {
        Self {
            base: FeatureTransformer::new(features, field),
            max_word_length: None,
        }
    }

    /// Creates an unfitted transformer from a config. The configured
    /// `vec_len` is replaced on fit.
    #[must_use]
    pub fn from_config(config: &TransformerConfig, features: FeatureLookup) -> Self {
        Self {
            base: FeatureTransformer::from_config(config, features),
            max_word_length: None,
        }
    }

    /// Width of one symbol slot.
    #[must_use]
    pub fn slot_width(&self) -> usize {
        self.base.features().max_dim()
    }

    /// Longest word seen during fit, in symbols.
    #[must_use]
    pub fn max_word_length(&self) -> Option<usize> {
        self.max_word_length
    }
}

impl WordTransformer for LinearTransformer {
    fn base(&self) -> &FeatureTransformer {
        &self.base
    }

    fn name(&self) -> &'static str {
        "LinearTransformer"
    }

    fn fit<W: Word>(&mut self, words: &[W]) -> Result<()> {
        self.check(words)?;
        let max_word_length = words.iter().map(Word::symbol_count).max().unwrap_or(0);
        let vec_len = max_word_length * self.slot_width();
        self.max_word_length = Some(max_word_length);
        self.base.mark_fitted(vec_len);
        tracing::debug!(
            words = words.len(),
            max_word_length,
            slot_width = self.slot_width(),
            vec_len,
            "fit linear transformer"
        );
        Ok(())
    }

    fn vectorize(&self, word: &dyn Word) -> Result<Vector<f32>> {
        let features = self.base.features();
        let slot = self.slot_width();
        let mut out = vec![0.0; word.symbol_count() * slot];
        for (idx, symbol) in word.symbols().enumerate() {
            let Some(vector) = features.get(symbol) else {
                return Err(LexfeatError::UnknownSymbols {
                    symbols: features.unknown(word.symbols()),
                });
            };
            let start = idx * slot;
            out[start..start + vector.len()].copy_from_slice(vector.as_slice());
        }
        Ok(Vector::from_vec(out))
    }
}

#[cfg(test)]
#[path = "linear_tests.rs"]
mod tests;
