// File:    alphabet.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Builds keyed working alphabets and normalizes raw text into cipher symbols.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Working alphabets and text normalization.

/// The 26 upper-case letters in natural order.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// The ten decimal digits.
pub const DIGITS: &str = "0123456789";
/// Letters followed by digits: the 36-symbol domain most ciphers work in.
pub const ALPHANUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Extra symbol appended for the Hill cipher so the modulus becomes prime.
pub const HILL_PAD: char = '-';

/// An ordered sequence of unique symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from a keyword.
    ///
    /// The unique letters of the keyword come first, in order of first
    /// occurrence, followed by the unused letters A-Z. Digits are appended
    /// when `include_digits` is set. Characters of the keyword that are not
    /// letters are ignored, so any keyword yields a valid alphabet.
    #[must_use]
    pub fn from_keyword(keyword: &str, include_digits: bool) -> Self {
        let mut symbols: Vec<char> = Vec::with_capacity(ALPHANUM.len());
        let keyword_letters = keyword
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase());

        for letter in keyword_letters.chain(LETTERS.chars()) {
            if !symbols.contains(&letter) {
                symbols.push(letter);
            }
        }
        if include_digits {
            symbols.extend(DIGITS.chars());
        }
        Self { symbols }
    }

    /// The plain 36-symbol letters-then-digits alphabet.
    #[must_use]
    pub fn alphanumeric() -> Self {
        Self::from_keyword("", true)
    }

    /// The 37-symbol alphabet used by the Hill cipher.
    #[must_use]
    pub fn hill() -> Self {
        let mut alphabet = Self::alphanumeric();
        alphabet.symbols.push(HILL_PAD);
        alphabet
    }

    /// Builds an alphabet from an explicit symbol list.
    ///
    /// Repeated symbols are dropped so the no-duplicate invariant holds.
    #[must_use]
    pub fn from_symbols(symbols: &str) -> Self {
        let mut unique: Vec<char> = Vec::with_capacity(symbols.len());
        for symbol in symbols.chars() {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        Self { symbols: unique }
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Position of `symbol`, if present.
    #[must_use]
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Whether `symbol` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbol at `index`, wrapping around the alphabet length.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty.
    #[must_use]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index % self.symbols.len()]
    }

    /// The symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Strips everything but ASCII letters and digits and upper-cases the rest.
///
/// This is the plaintext normalization step of the encrypt pipeline and the
/// default ciphertext normalization of the decrypt pipeline.
#[must_use]
pub fn normalize_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Normalizes plaintext before masking and enciphering.
#[must_use]
pub fn normalize_plaintext(text: &str) -> String {
    normalize_alphanumeric(text)
}
