//! Build script to generate embedded word lists
//!
//! Reads the word list files under data/ and generates Rust source with
//! const arrays, so the binary can play without any files on disk.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Category pools shipped with the game: (const name, source file, doc line).
const CATEGORY_LISTS: &[(&str, &str, &str)] = &[
    ("ANIMALS", "data/categories/animals.txt", "Animal words"),
    ("COUNTRIES", "data/categories/countries.txt", "Country names"),
    (
        "PROGRAMMING",
        "data/categories/programming.txt",
        "Programming terms",
    ),
    ("SCIENCE", "data/categories/science.txt", "Science terms"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    // General pool used for unfiltered ("mixed") draws
    generate_word_list(
        "data/words.txt",
        &out_dir.join("general.rs"),
        "GENERAL",
        "General word pool for unfiltered draws",
    );

    for (const_name, input, doc) in CATEGORY_LISTS {
        let file_name = format!("{}.rs", const_name.to_lowercase());
        generate_word_list(input, &out_dir.join(file_name), const_name, doc);
        println!("cargo:rerun-if-changed={input}");
    }

    println!("cargo:rerun-if-changed=data/words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
}
