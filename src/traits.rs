//! Core trait for word featurizers.
//!
//! [`WordTransformer`] follows the fit/transform convention: `fit` prepares
//! derived configuration, `vectorize` turns one word into a vector, and
//! `transform` stacks those vectors into a zero-padded matrix.

use crate::error::{LexfeatError, Result};
use crate::primitives::{Matrix, Vector};
use crate::transformers::FeatureTransformer;
use crate::word::{Record, Word};

/// Featurizes batches of words against a feature lookup.
///
/// Implementors supply [`base`](WordTransformer::base) and usually override
/// [`fit`](WordTransformer::fit) and [`vectorize`](WordTransformer::vectorize).
/// The provided `transform` takes care of the fitted check, padding, and
/// row-width validation.
///
/// # Examples
///
/// ```
/// use lexfeat::prelude::*;
///
/// let lookup = FeatureLookup::single([("a", vec![1.0]), ("b", vec![2.0])]);
/// let mut transformer = LinearTransformer::new(lookup, "orthography");
///
/// let x = transformer.fit_transform(&["ab", "a"]).expect("known symbols");
/// assert_eq!(x.shape(), (2, 2));
/// assert_eq!(x.as_slice(), &[1.0, 2.0, 1.0, 0.0]);
/// ```
pub trait WordTransformer {
    /// Shared configuration and fitted state.
    fn base(&self) -> &FeatureTransformer;

    /// Name used in error messages.
    fn name(&self) -> &'static str {
        // Generic arguments carry their own paths; strip them first.
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }

    /// Fails with [`LexfeatError::UnknownSymbols`] if any word holds a
    /// symbol the lookup does not know.
    ///
    /// `transform` never calls this; run it explicitly as a pre-check.
    ///
    /// # Errors
    ///
    /// Returns the exact set of unknown symbols.
    fn check<W: Word>(&self, words: &[W]) -> Result<()> {
        self.base().check(words)
    }

    /// Fits the transformer. The default does nothing and leaves the
    /// transformer unfitted.
    ///
    /// # Errors
    ///
    /// Implementations return an error if the words cannot be fit.
    fn fit<W: Word>(&mut self, words: &[W]) -> Result<()> {
        let _ = words;
        Ok(())
    }

    /// Converts one word to a 1D feature vector no wider than `vec_len`.
    ///
    /// # Errors
    ///
    /// Returns [`LexfeatError::Unsupported`] unless overridden.
    fn vectorize(&self, word: &dyn Word) -> Result<Vector<f32>> {
        let _ = word;
        Err(LexfeatError::Unsupported {
            transformer: self.name(),
            operation: "vectorize",
        })
    }

    /// Recovers the symbol sequences a matrix was built from.
    ///
    /// # Errors
    ///
    /// Returns [`LexfeatError::Unsupported`] unless overridden.
    fn inverse_transform(&self, x: &Matrix<f32>) -> Result<Vec<Vec<String>>> {
        let _ = x;
        Err(LexfeatError::Unsupported {
            transformer: self.name(),
            operation: "inverse_transform",
        })
    }

    /// Transforms a batch into an `N x vec_len` matrix. Each row holds the
    /// word's vector, left-aligned, followed by zeros.
    ///
    /// # Errors
    ///
    /// - [`LexfeatError::NotFitted`] before a successful fit
    /// - [`LexfeatError::DimensionMismatch`] if a word's vector is wider than `vec_len`
    /// - any error from `vectorize`
    fn transform<W: Word>(&self, words: &[W]) -> Result<Matrix<f32>> {
        let base = self.base();
        if !base.is_fitted() {
            return Err(LexfeatError::NotFitted {
                transformer: self.name(),
            });
        }
        let vec_len = base.vec_len();
        tracing::debug!(
            transformer = self.name(),
            rows = words.len(),
            vec_len,
            "transforming batch"
        );

        let mut total = Matrix::zeros(words.len(), vec_len);
        for (idx, word) in words.iter().enumerate() {
            let x = self.vectorize(word)?;
            tracing::trace!(row = idx, len = x.len(), "vectorized word");
            total.copy_into_row(idx, x.as_slice())?;
        }
        Ok(total)
    }

    /// Fits on `words`, then transforms them.
    ///
    /// # Errors
    ///
    /// Propagates errors from `fit` and `transform`.
    fn fit_transform<W: Word>(&mut self, words: &[W]) -> Result<Matrix<f32>> {
        self.fit(words)?;
        self.transform(words)
    }

    /// Reads the configured field from each record and transforms the
    /// resulting words.
    ///
    /// # Errors
    ///
    /// Returns [`LexfeatError::InvalidInput`] if a record lacks the field,
    /// otherwise as [`transform`](WordTransformer::transform).
    fn transform_records<R: Record>(&self, records: &[R]) -> Result<Matrix<f32>> {
        let words = extract_field(records, self.base().field())?;
        self.transform(&words)
    }

    /// Same output as [`transform`](WordTransformer::transform), with words
    /// vectorized on the rayon thread pool.
    ///
    /// # Errors
    ///
    /// As [`transform`](WordTransformer::transform).
    #[cfg(feature = "parallel")]
    fn transform_par<W>(&self, words: &[W]) -> Result<Matrix<f32>>
    where
        Self: Sync,
        W: Word + Sync,
    {
        use rayon::prelude::*;

        let base = self.base();
        if !base.is_fitted() {
            return Err(LexfeatError::NotFitted {
                transformer: self.name(),
            });
        }
        tracing::debug!(
            transformer = self.name(),
            rows = words.len(),
            vec_len = base.vec_len(),
            "transforming batch in parallel"
        );
        let rows: Vec<Vector<f32>> = words
            .par_iter()
            .map(|word| self.vectorize(word))
            .collect::<Result<_>>()?;
        Matrix::from_padded_rows(&rows, base.vec_len())
    }
}

/// Pulls `field` out of every record.
///
/// # Errors
///
/// Returns [`LexfeatError::InvalidInput`] naming the first record without it.
pub fn extract_field<'a, R: Record>(records: &'a [R], field: &str) -> Result<Vec<&'a dyn Word>> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            record.field(field).ok_or_else(|| {
                tracing::warn!(record = idx, field, "record is missing field");
                LexfeatError::InvalidInput {
                    message: format!("record {idx} has no field {field:?}"),
                }
            })
        })
        .collect()
}
