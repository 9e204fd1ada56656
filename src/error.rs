//! Error types for lexfeat operations.
//!
//! Every failure is returned to the caller at the point of violation;
//! nothing is retried and no partial matrices escape a failed batch.

use std::collections::BTreeSet;

/// Main error type for lexfeat operations.
///
/// # Examples
///
/// ```
/// use lexfeat::error::LexfeatError;
///
/// let err = LexfeatError::DimensionMismatch {
///     expected: "vec_len=4".to_string(),
///     actual: "6".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum LexfeatError {
    /// One or more symbols are absent from the feature lookup.
    #[error("sequence contained unknown symbols: {}", join_symbols(.symbols))]
    UnknownSymbols {
        /// Exactly the symbols that were not found, sorted.
        symbols: BTreeSet<String>,
    },

    /// Input that cannot be featurized for reasons other than unknown symbols.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the problem
        message: String,
    },

    /// `transform` was called before the transformer was fit.
    #[error("{transformer} has not been fit yet")]
    NotFitted {
        /// Name of the transformer
        transformer: &'static str,
    },

    /// The operation has no implementation on this transformer.
    #[error("{operation} is not supported by {transformer}")]
    Unsupported {
        /// Name of the transformer
        transformer: &'static str,
        /// Name of the missing operation
        operation: &'static str,
    },

    /// A vector or matrix does not have the expected shape.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Feature table could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while reading a feature table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_symbols(symbols: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = symbols.iter().map(|s| format!("{s:?}")).collect();
    format!("{{{}}}", quoted.join(", "))
}

impl LexfeatError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an unknown-symbols error from any symbol collection.
    #[must_use]
    pub fn unknown_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownSymbols {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LexfeatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = LexfeatError::dimension_mismatch("vec_len", 2, 4);
        let msg = err.to_string();
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains("vec_len=2"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_unknown_symbols_display_is_sorted() {
        let err = LexfeatError::unknown_symbols(["z", "q"]);
        assert_eq!(
            err.to_string(),
            "sequence contained unknown symbols: {\"q\", \"z\"}"
        );
    }

    #[test]
    fn test_unknown_symbols_deduplicates() {
        let err = LexfeatError::unknown_symbols(["x", "x", "y"]);
        match err {
            LexfeatError::UnknownSymbols { symbols } => assert_eq!(symbols.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_not_fitted_display() {
        let err = LexfeatError::NotFitted {
            transformer: "LinearTransformer",
        };
        assert_eq!(err.to_string(), "LinearTransformer has not been fit yet");
    }

    #[test]
    fn test_unsupported_display() {
        let err = LexfeatError::Unsupported {
            transformer: "FeatureTransformer",
            operation: "vectorize",
        };
        let msg = err.to_string();
        assert!(msg.contains("vectorize"));
        assert!(msg.contains("FeatureTransformer"));
    }

    #[test]
    fn test_serialization_from_serde_json() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: LexfeatError = parse.expect_err("truncated json").into();
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "features.json");
        let err: LexfeatError = io.into();
        assert!(matches!(err, LexfeatError::Io(_)));
        assert!(err.to_string().contains("features.json"));
    }
}
