//! Plain-text word list parser.
//!
//! # Format
//! ```text
//! cat = gato
//! house: casa
//! dog - perro
//! ```
//!
//! Each non-blank line holds an English term and its Spanish translation
//! separated by `=`, `:` or `-`. Anything after a second separator is ignored.

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

const SEPARATORS: &[char] = &['=', ':', '-'];

/// A term/translation pair read from a word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWord {
    pub term: String,
    pub translation: String,
    pub line_number: usize,
}

/// Parse a word list into term/translation pairs.
///
/// Lines without a separator are skipped.
pub fn parse_word_list(content: &str) -> Result<Vec<ParsedWord>, ImportError> {
    let mut words = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut parts = line.split(SEPARATORS).map(str::trim);
        let (Some(term), Some(translation)) = (parts.next(), parts.next()) else {
            continue;
        };

        if term.is_empty() || translation.is_empty() {
            return Err(ImportError::EmptyField { line: line_number });
        }

        words.push(ParsedWord {
            term: term.to_string(),
            translation: translation.to_string(),
            line_number,
        });
    }

    if words.is_empty() {
        return Err(ImportError::NoWords);
    }
    Ok(words)
}
