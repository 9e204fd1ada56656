//! Symbol feature tables.
//!
//! A [`FeatureTable`] maps each symbol to a numeric feature vector. A
//! [`FeatureLookup`] is either one table or a pair of tables. The pair is for
//! schemes with two disjoint alphabets, e.g. vowels and consonants that are
//! scored by different feature sets.
//!
//! # Example
//!
//! ```
//! use lexfeat::features::FeatureLookup;
//!
//! let lookup = FeatureLookup::single([("a", vec![1.0, 0.0]), ("b", vec![0.0, 1.0])]);
//! assert_eq!(lookup.dlen(), 2);
//! assert!(lookup.contains("a"));
//! assert!(!lookup.contains("c"));
//! ```

use crate::error::Result;
use crate::primitives::Vector;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// Mapping from symbol to feature vector.
///
/// Vector lengths may differ between symbols; `dlen` records the longest.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "HashMap<String, Vec<f32>>",
    into = "HashMap<String, Vec<f32>>"
)]
pub struct FeatureTable {
    entries: HashMap<String, Vector<f32>>,
    dlen: usize,
}

impl FeatureTable {
    /// Builds a table from `(symbol, vector)` pairs.
    ///
    /// A symbol that appears twice keeps its last vector.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Vec<f32>>,
    {
        let entries: HashMap<String, Vector<f32>> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), Vector::from_vec(v.into())))
            .collect();
        let dlen = entries.values().map(Vector::len).max().unwrap_or(0);
        Self { entries, dlen }
    }

    /// Longest vector length in the table (0 for an empty table).
    #[must_use]
    pub fn dlen(&self) -> usize {
        self.dlen
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feature vector for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Vector<f32>> {
        self.entries.get(symbol)
    }

    /// Returns true if `symbol` has an entry.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Iterates over the symbols in arbitrary order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl From<HashMap<String, Vec<f32>>> for FeatureTable {
    fn from(map: HashMap<String, Vec<f32>>) -> Self {
        Self::new(map)
    }
}

impl From<FeatureTable> for HashMap<String, Vec<f32>> {
    fn from(table: FeatureTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(k, v)| (k, v.into_vec()))
            .collect()
    }
}

/// One feature table, or two tables consulted together.
///
/// In JSON a single lookup is an object of `symbol -> [numbers]`. A paired
/// lookup is a two-element array of such objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureLookup {
    /// A single alphabet.
    Single(FeatureTable),
    /// Two parallel alphabets; the first is the primary table.
    Paired(FeatureTable, FeatureTable),
}

impl FeatureLookup {
    /// Builds a single-table lookup.
    pub fn single<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Vec<f32>>,
    {
        let table = FeatureTable::new(entries);
        tracing::debug!(
            symbols = table.len(),
            dlen = table.dlen(),
            "built single feature lookup"
        );
        Self::Single(table)
    }

    /// Builds a two-table lookup.
    pub fn paired<I1, I2, K1, K2, V1, V2>(primary: I1, secondary: I2) -> Self
    where
        I1: IntoIterator<Item = (K1, V1)>,
        I2: IntoIterator<Item = (K2, V2)>,
        K1: Into<String>,
        K2: Into<String>,
        V1: Into<Vec<f32>>,
        V2: Into<Vec<f32>>,
    {
        let primary = FeatureTable::new(primary);
        let secondary = FeatureTable::new(secondary);
        tracing::debug!(
            primary = primary.len(),
            secondary = secondary.len(),
            dlen = primary.dlen(),
            "built paired feature lookup"
        );
        Self::Paired(primary, secondary)
    }

    /// Parses a lookup from JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text is neither a
    /// `symbol -> [numbers]` object nor a pair of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexfeat::features::FeatureLookup;
    ///
    /// let lookup = FeatureLookup::from_json_str(r#"[{"a": [1, 0]}, {"k": [0, 0, 1]}]"#)
    ///     .expect("valid paired lookup");
    /// assert!(lookup.is_paired());
    /// assert_eq!(lookup.dlen(), 2);
    /// assert_eq!(lookup.max_dim(), 3);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lookup: Self = serde_json::from_str(json)?;
        tracing::debug!(
            symbols = lookup.len(),
            paired = lookup.is_paired(),
            "loaded feature lookup from json"
        );
        Ok(lookup)
    }

    /// Reads and parses a JSON lookup file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a serialization
    /// error if its contents are malformed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// The primary table.
    #[must_use]
    pub fn primary(&self) -> &FeatureTable {
        match self {
            Self::Single(table) | Self::Paired(table, _) => table,
        }
    }

    /// The secondary table of a paired lookup.
    #[must_use]
    pub fn secondary(&self) -> Option<&FeatureTable> {
        match self {
            Self::Single(_) => None,
            Self::Paired(_, table) => Some(table),
        }
    }

    /// Returns true for a two-table lookup.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        matches!(self, Self::Paired(..))
    }

    /// Longest vector in the primary table.
    #[must_use]
    pub fn dlen(&self) -> usize {
        self.primary().dlen()
    }

    /// Longest vector across every table.
    #[must_use]
    pub fn max_dim(&self) -> usize {
        self.tables().map(FeatureTable::dlen).max().unwrap_or(0)
    }

    /// Returns true if any table has an entry for `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.tables().any(|t| t.contains(symbol))
    }

    /// Feature vector for `symbol`, searching the primary table first.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Vector<f32>> {
        self.tables().find_map(|t| t.get(symbol))
    }

    /// Union of all known symbols.
    #[must_use]
    pub fn symbols(&self) -> BTreeSet<&str> {
        self.tables().flat_map(FeatureTable::symbols).collect()
    }

    /// Number of distinct known symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols().len()
    }

    /// Returns true if no table has any symbol.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables().all(FeatureTable::is_empty)
    }

    /// Collects the symbols from `symbols` that no table knows about.
    pub fn unknown<'a, I>(&self, symbols: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        symbols
            .into_iter()
            .filter(|s| !self.contains(s))
            .map(str::to_string)
            .collect()
    }

    fn tables(&self) -> impl Iterator<Item = &FeatureTable> {
        std::iter::once(self.primary()).chain(self.secondary())
    }
}

impl From<FeatureTable> for FeatureLookup {
    fn from(table: FeatureTable) -> Self {
        Self::Single(table)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
