//! Lexfeat: symbol-level feature transformers for word lists.
//!
//! A word is a sequence of symbols (letters or phonemes). Each symbol is
//! looked up in a feature table, a transformer turns the word into a
//! vector, and a batch of words becomes a fixed-width `f32` matrix whose
//! short rows are zero-padded on the right.
//!
//! # Quick Start
//!
//! ```
//! use lexfeat::prelude::*;
//!
//! let lookup = FeatureLookup::single([
//!     ("c", vec![1.0, 0.0, 0.0]),
//!     ("a", vec![0.0, 1.0, 0.0]),
//!     ("t", vec![0.0, 0.0, 1.0]),
//! ]);
//!
//! let mut transformer = LinearTransformer::new(lookup, "orthography");
//! transformer.check(&["cat", "act", "at"]).expect("known symbols");
//!
//! let x = transformer.fit_transform(&["cat", "act", "at"]).expect("fit");
//! assert_eq!(x.shape(), (3, 9));
//! // "at" is shorter than the longest word and ends in zeros.
//! assert_eq!(&x.row_slice(2)[6..], &[0.0, 0.0, 0.0]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Vector and Matrix types
//! - [`word`]: symbol sequences and input records
//! - [`features`]: feature tables and single/paired lookups
//! - [`traits`]: the [`WordTransformer`] fit/vectorize/transform contract
//! - [`transformers`]: the base transformer and the linear featurizer
//! - [`config`]: serde-backed transformer settings
//! - [`error`]: error type and `Result` alias

pub mod config;
pub mod error;
pub mod features;
pub mod prelude;
pub mod primitives;
pub mod traits;
pub mod transformers;
pub mod word;

pub use error::{LexfeatError, Result};
pub use features::{FeatureLookup, FeatureTable};
pub use primitives::{Matrix, Vector};
pub use traits::WordTransformer;
pub use transformers::{FeatureTransformer, LinearTransformer};
