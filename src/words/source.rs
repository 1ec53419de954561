//! Category-aware word selection
//!
//! A `WordSource` holds a general pool plus named category pools and hands
//! out random words. When a word is drawn without a category filter, its
//! category is determined after the fact by scanning the category lists;
//! words in no list get the `"mixed"` pseudo-category. The scan is
//! O(categories × words-per-category), fine at this scale.

use rand::prelude::IndexedRandom;
use std::fmt;

/// Error type for word selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    /// The requested pool (general or a named category) has no words
    NoWordsAvailable,
    /// A named category was requested but does not exist
    UnknownCategory(String),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable => write!(f, "No words available"),
            Self::UnknownCategory(name) => write!(f, "Category '{name}' not found"),
        }
    }
}

impl std::error::Error for WordSourceError {}

/// A pool of words, optionally grouped into named categories
///
/// Categories keep their insertion order so menus are stable.
#[derive(Debug, Clone)]
pub struct WordSource {
    general: Vec<String>,
    categories: Vec<(String, Vec<String>)>,
}

impl WordSource {
    /// Build a source from explicit pools
    ///
    /// Category names are lowercased; order is preserved.
    #[must_use]
    pub fn new(general: Vec<String>, categories: Vec<(String, Vec<String>)>) -> Self {
        let categories = categories
            .into_iter()
            .map(|(name, words)| (name.to_lowercase(), words))
            .collect();
        Self {
            general,
            categories,
        }
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        let to_owned = |list: &[&str]| list.iter().map(ToString::to_string).collect();

        Self::new(
            to_owned(super::GENERAL),
            vec![
                ("animals".to_string(), to_owned(super::ANIMALS)),
                ("countries".to_string(), to_owned(super::COUNTRIES)),
                ("programming".to_string(), to_owned(super::PROGRAMMING)),
                ("science".to_string(), to_owned(super::SCIENCE)),
            ],
        )
    }

    /// Available category names, in menu order
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Draw a random word
    ///
    /// With a category name, draws uniformly from that category's pool. With
    /// `None`, draws from the general pool and classifies the word after the
    /// fact. Returns the word together with its actual category name.
    ///
    /// # Errors
    ///
    /// `UnknownCategory` if the named category does not exist;
    /// `NoWordsAvailable` if the selected pool is empty.
    pub fn random_word(
        &self,
        category: Option<&str>,
    ) -> Result<(String, String), WordSourceError> {
        match category {
            None => {
                let word = self
                    .general
                    .choose(&mut rand::rng())
                    .ok_or(WordSourceError::NoWordsAvailable)?;
                let actual = self.classify(word);
                Ok((word.clone(), actual))
            }
            Some(name) => {
                let name = name.to_lowercase();
                let words = self
                    .categories
                    .iter()
                    .find(|(cat, _)| *cat == name)
                    .map(|(_, words)| words)
                    .ok_or_else(|| WordSourceError::UnknownCategory(name.clone()))?;

                let word = words
                    .choose(&mut rand::rng())
                    .ok_or(WordSourceError::NoWordsAvailable)?;
                Ok((word.clone(), name))
            }
        }
    }

    /// Number of words in a category, or in the general pool for `None`
    #[must_use]
    pub fn word_count(&self, category: Option<&str>) -> usize {
        match category {
            None => self.general.len(),
            Some(name) => {
                let name = name.to_lowercase();
                self.categories
                    .iter()
                    .find(|(cat, _)| *cat == name)
                    .map_or(0, |(_, words)| words.len())
            }
        }
    }

    /// True when no pool has any words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.categories.iter().all(|(_, words)| words.is_empty())
    }

    /// Find the category a word belongs to, `"mixed"` when in none
    fn classify(&self, word: &str) -> String {
        for (name, words) in &self.categories {
            if words.iter().any(|w| w == word) {
                return name.clone();
            }
        }
        "mixed".to_string()
    }
}
