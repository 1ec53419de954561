//! Word sources for Hangman
//!
//! Provides embedded word lists compiled into the binary plus a loader for
//! word files on disk, and the category-aware random selection over them.

mod embedded;
pub mod loader;
mod source;

pub use source::{WordSource, WordSourceError};

pub(crate) use embedded::{ANIMALS, COUNTRIES, GENERAL, PROGRAMMING, SCIENCE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_are_lowercase() {
        for &word in GENERAL {
            assert_eq!(word, word.to_lowercase(), "'{word}' not lowercase");
        }
    }

    #[test]
    fn builtin_category_lists_nonempty() {
        for list in [ANIMALS, COUNTRIES, PROGRAMMING, SCIENCE] {
            assert!(!list.is_empty());
        }
    }

    #[test]
    fn builtin_source_has_four_categories() {
        let source = WordSource::builtin();
        assert_eq!(
            source.categories(),
            vec!["animals", "countries", "programming", "science"]
        );
    }
}
