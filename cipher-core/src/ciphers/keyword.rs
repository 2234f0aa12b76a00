// File:    keyword.rs
// Author:  apezoo
// Date:    2025-08-06
//
// Description: Monoalphabetic substitution against a keyword-derived alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, cipher_position, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;

/// Substitutes each symbol with the symbol at the same position of a keyed
/// alphabet (keyword letters, remaining letters, then digits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    keyword: String,
    keyed: Alphabet,
}

impl Keyword {
    /// Builds the cipher from a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the keyword contains anything
    /// but letters.
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        if let Some(bad) = keyword.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(CipherError::InvalidKey(format!(
                "keywords may only contain letters, found '{bad}'"
            )));
        }
        let keyword = keyword.to_ascii_uppercase();
        let keyed = Alphabet::from_keyword(&keyword, true);
        Ok(Self { keyword, keyed })
    }

    /// The upper-cased keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The substitution alphabet.
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.keyed
    }
}

impl Transform for Keyword {
    fn name(&self) -> &'static str {
        "Keyword"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        plaintext
            .chars()
            .map(|c| Ok(self.keyed.symbol(plain_position(&alphanum, c)?)))
            .collect()
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        ciphertext
            .chars()
            .map(|c| Ok(alphanum.symbol(cipher_position(&self.keyed, c, self.name())?)))
            .collect()
    }
}
