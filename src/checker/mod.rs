pub mod dictionary;
pub mod tokenizer;

use crate::Token;
use dictionary::{Dictionary, DictionaryError};
use std::path::Path;
use tokenizer::RawTokens;

/// Contraction suffixes tried in order against the end of a token. The order
/// is deliberate: `n't` must be tried before the shorter `'t`.
const CONTRACTION_SUFFIXES: [&str; 8] = ["n't", "'t", "'re", "'ve", "'ll", "'d", "'m", "'s"];

/// Contraction stems that are valid even when absent from the dictionary
/// ("won't", "can't" and friends).
const IRREGULAR_STEMS: [&str; 15] = [
    "won", "can", "don", "doesn", "didn", "shouldn", "wouldn", "couldn", "isn", "aren", "wasn",
    "weren", "hasn", "haven", "hadn",
];

/// Classifies candidate words as correctly or incorrectly spelled.
///
/// Raw dictionary membership is softened by a fixed cascade of heuristics
/// covering numbers, decade notation, hyphenated compounds, possessives and
/// contractions. The cascade order is load-bearing; see `is_valid`.
pub struct Checker {
    dictionary: Dictionary,
}

impl Checker {
    pub fn new(wordlist: &Path) -> Result<Self, DictionaryError> {
        let dictionary = Dictionary::from_wordlist(wordlist)?;
        Ok(Self { dictionary })
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Scan one span and classify every candidate word in it.
    ///
    /// `base` is the span's byte offset in the full input, so the returned
    /// tokens carry absolute offsets regardless of chunking.
    pub fn check_span(&self, span: &str, base: usize) -> Vec<Token> {
        RawTokens::new(span, base)
            .map(|raw| Token {
                start: raw.start,
                len: raw.len(),
                valid: self.is_valid(raw.text),
            })
            .collect()
    }

    /// The classification cascade. Rules are evaluated in this exact order
    /// and the first match wins; in particular the mixed letters+digits
    /// rejection must run before the plain dictionary lookup and the
    /// compound rule, and after the decade rule.
    pub fn is_valid(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }

        if is_number(word) {
            return true;
        }

        if is_decade(word) {
            return true;
        }

        // Mixed letters and digits ("p34r") are invalid unless the token is
        // a hyphenated join of a dictionary word and a digit-bearing suffix.
        if has_letters(word) && has_digits(word) {
            if let Some((prefix, suffix)) = word.split_once('-') {
                if self.dictionary.contains_ignore_case(prefix) && has_digits(suffix) {
                    return true;
                }
            }
            return false;
        }

        if self.dictionary.contains_ignore_case(word) {
            return true;
        }

        // Hyphenated compounds: both halves must stand on their own.
        if let Some((left, right)) = word.split_once('-') {
            if !left.is_empty()
                && !right.is_empty()
                && self.dictionary.contains_ignore_case(left)
                && self.dictionary.contains_ignore_case(right)
            {
                return true;
            }
        }

        // Possessives: dog's, dogs'.
        if word.len() > 2 {
            if let Some(stem) = word.strip_suffix("'s").or_else(|| word.strip_suffix("s'")) {
                if self.dictionary.contains_ignore_case(stem) {
                    return true;
                }
            }
        }

        // Contractions: the base is always the text before the first
        // apostrophe, whichever suffix matched.
        if let Some(apostrophe) = word.find('\'') {
            for suffix in CONTRACTION_SUFFIXES {
                if word.len() <= suffix.len() {
                    continue;
                }
                let Some(tail) = word.get(word.len() - suffix.len()..) else {
                    continue;
                };
                if !tail.eq_ignore_ascii_case(suffix) {
                    continue;
                }

                let base = &word[..apostrophe];
                if self.dictionary.contains_ignore_case(base) {
                    return true;
                }
                if IRREGULAR_STEMS.contains(&base.to_lowercase().as_str()) {
                    return true;
                }
            }
        }

        false
    }
}

// ASCII on both sides: non-ASCII characters are neither letters nor digits
// as far as the mixed rule is concerned.
fn has_letters(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphabetic())
}

fn has_digits(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_digit())
}

/// Digits with optional separators and signs: `3.14`, `-5`, `1,000`.
fn is_number(word: &str) -> bool {
    let mut has_digit = false;
    for c in word.chars() {
        if c.is_ascii_digit() {
            has_digit = true;
        } else if !matches!(c, ',' | '.' | '-' | '+') {
            return false;
        }
    }
    has_digit
}

/// Decade notation: `1960s`, or `mid-1970s` once the mixed rule has handed
/// over the purely numeric part (`1970s` itself matches here).
fn is_decade(word: &str) -> bool {
    let Some(without_s) = word.strip_suffix('s') else {
        return false;
    };
    if !without_s.ends_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    without_s.chars().all(|c| c.is_ascii_digit() || c == '-') && has_digits(without_s)
}
