//! Word file loading utilities
//!
//! Loads a `WordSource` from a words directory laid out as `words.txt` plus
//! `categories/<name>.txt` files. The category-to-filename mapping is passed
//! in rather than baked into the loading logic, so alternative layouts can be
//! wired up without touching the loader.

use super::WordSource;
use std::fs;
use std::io;
use std::path::Path;

/// The standard category layout: (category name, file under `categories/`)
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("animals", "animals.txt"),
    ("countries", "countries.txt"),
    ("programming", "programming.txt"),
    ("science", "science.txt"),
];

/// Load a word source from a directory using the standard category layout
///
/// # Errors
///
/// Returns an I/O error if an existing word file cannot be read. Missing
/// files are skipped, leaving that pool empty.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> io::Result<WordSource> {
    load_with_categories(dir, DEFAULT_CATEGORIES)
}

/// Load a word source from a directory with an explicit category mapping
///
/// Reads `<dir>/words.txt` into the general pool and each mapped file under
/// `<dir>/categories/` into its category pool.
///
/// # Errors
///
/// Returns an I/O error if an existing word file cannot be read.
pub fn load_with_categories<P: AsRef<Path>>(
    dir: P,
    categories: &[(&str, &str)],
) -> io::Result<WordSource> {
    let dir = dir.as_ref();

    let general_path = dir.join("words.txt");
    let general = if general_path.exists() {
        read_word_file(&general_path)?
    } else {
        Vec::new()
    };

    let categories_dir = dir.join("categories");
    let mut pools = Vec::with_capacity(categories.len());
    for (name, file_name) in categories {
        let path = categories_dir.join(file_name);
        let words = if path.exists() {
            read_word_file(&path)?
        } else {
            Vec::new()
        };
        pools.push(((*name).to_string(), words));
    }

    Ok(WordSource::new(general, pools))
}

/// Read one word-per-line file, normalizing and skipping unusable entries
///
/// Entries are trimmed and lowercased. Lines that are empty or contain
/// characters other than ASCII letters, spaces and hyphens are dropped.
fn read_word_file(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let word = line.trim().to_lowercase();
            if valid_entry(&word) { Some(word) } else { None }
        })
        .collect();

    Ok(words)
}

fn valid_entry(word: &str) -> bool {
    !word.is_empty()
        && word.chars().any(|c| c.is_ascii_alphabetic())
        && word
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' ' || c == '-')
}
