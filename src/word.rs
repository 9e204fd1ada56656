//! Symbol sequences and the records that carry them.
//!
//! A word is anything that can be read as a sequence of symbols. Plain
//! strings yield one symbol per character, which suits orthographic forms;
//! slices of strings yield one symbol per element, which suits phonological
//! transcriptions where a phoneme may span several characters.
//!
//! # Examples
//!
//! ```
//! use lexfeat::word::Word;
//!
//! let orthography = "cat";
//! assert_eq!(orthography.symbols().collect::<Vec<_>>(), vec!["c", "a", "t"]);
//!
//! let phonology = vec!["k", "ae", "t"];
//! assert_eq!(phonology.symbols().count(), 3);
//! ```

use std::collections::{BTreeMap, HashMap};

/// A sequence of symbols.
pub trait Word {
    /// Iterates over the symbols of the word, in order.
    fn symbols(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Number of symbols in the word.
    fn symbol_count(&self) -> usize {
        self.symbols().count()
    }
}

impl Word for str {
    fn symbols(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            self.char_indices()
                .map(move |(idx, ch)| &self[idx..idx + ch.len_utf8()]),
        )
    }

    fn symbol_count(&self) -> usize {
        self.chars().count()
    }
}

impl Word for String {
    fn symbols(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_str().symbols()
    }

    fn symbol_count(&self) -> usize {
        self.as_str().symbol_count()
    }
}

impl<S: AsRef<str>> Word for [S] {
    fn symbols(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(<S as AsRef<str>>::as_ref))
    }

    fn symbol_count(&self) -> usize {
        self.len()
    }
}

impl<S: AsRef<str>> Word for Vec<S> {
    fn symbols(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_slice().symbols()
    }

    fn symbol_count(&self) -> usize {
        self.len()
    }
}

impl<T: Word + ?Sized> Word for &T {
    fn symbols(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).symbols()
    }

    fn symbol_count(&self) -> usize {
        (**self).symbol_count()
    }
}

/// An input record with named fields, e.g. `{"orthography": "cat",
/// "phonology": ["k", "ae", "t"]}`.
///
/// Transformers read a single configured field from each record.
pub trait Record {
    /// Returns the word stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&dyn Word>;
}

impl<V: Word> Record for HashMap<String, V> {
    fn field(&self, name: &str) -> Option<&dyn Word> {
        self.get(name).map(|v| v as &dyn Word)
    }
}

impl<V: Word> Record for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<&dyn Word> {
        self.get(name).map(|v| v as &dyn Word)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&dyn Word> {
        (**self).field(name)
    }
}
