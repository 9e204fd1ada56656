//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lexfeat::prelude::*;
//! ```

pub use crate::config::TransformerConfig;
pub use crate::error::{LexfeatError, Result};
pub use crate::features::{FeatureLookup, FeatureTable};
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::WordTransformer;
pub use crate::transformers::{FeatureTransformer, LinearTransformer};
pub use crate::word::{Record, Word};
