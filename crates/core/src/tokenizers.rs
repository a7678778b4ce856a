//! Unit tokenizers
//!
//! Provides the `Tokenizer` trait and the two granularities the engine diffs
//! at: whole lines and single characters. Tokenizers never normalize; two
//! units are equal only when their text is exactly equal.

/// Splits text into the comparable units of one diff pass.
pub trait Tokenizer {
    /// The unit produced for each element of the input.
    type Unit<'a>: PartialEq + Clone;

    /// Split `text` into units, in order.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Self::Unit<'a>>;

    /// Owned text of a single unit.
    fn unit_text(&self, unit: &Self::Unit<'_>) -> String;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;
}

/// Line tokenizer.
///
/// Splits on `\n` only, keeping empty lines as empty units. A trailing
/// delimiter yields a trailing empty unit, so `"a\n"` is `["a", ""]`. Empty
/// input yields no units at all. `\r` is not treated specially and stays
/// part of the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTokenizer;

impl Tokenizer for LineTokenizer {
    type Unit<'a> = &'a str;

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.is_empty() {
            return Vec::new();
        }
        text.split('\n').collect()
    }

    fn unit_text(&self, unit: &&str) -> String {
        (*unit).to_string()
    }

    fn name(&self) -> &str {
        "line"
    }
}

/// Character tokenizer (one unit per Unicode scalar value)
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterTokenizer;

impl Tokenizer for CharacterTokenizer {
    type Unit<'a> = char;

    fn tokenize<'a>(&self, text: &'a str) -> Vec<char> {
        text.chars().collect()
    }

    fn unit_text(&self, unit: &char) -> String {
        unit.to_string()
    }

    fn name(&self) -> &str {
        "character"
    }
}
