// File:    bifid.rs
// Author:  apezoo
// Date:    2025-08-07
//
// Description: Bifid fractionation over a keyed 6x6 square.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, cipher_position, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;

const SIDE: usize = 6;

/// Fractionating cipher over a 6×6 square filled with a keyed alphabet.
///
/// Each symbol is split into its row and column. All rows are written out
/// first, then all columns, and the combined stream is read back two
/// coordinates at a time to pick the cipher symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bifid {
    square: Alphabet,
}

impl Bifid {
    /// Builds the square from a keyword.
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
        Ok(Self {
            square: Alphabet::from_keyword(keyword, true),
        })
    }

    /// The square, read row by row.
    #[must_use]
    pub const fn square(&self) -> &Alphabet {
        &self.square
    }
}

impl Transform for Bifid {
    fn name(&self) -> &'static str {
        "Bifid"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let mut rows = Vec::with_capacity(plaintext.len());
        let mut cols = Vec::with_capacity(plaintext.len());
        for c in plaintext.chars() {
            let index = plain_position(&self.square, c)?;
            rows.push(index / SIDE);
            cols.push(index % SIDE);
        }
        rows.append(&mut cols);
        Ok(rows
            .chunks(2)
            .map(|pair| self.square.symbol(pair[0] * SIDE + pair[1]))
            .collect())
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let mut stream = Vec::with_capacity(ciphertext.len() * 2);
        for c in ciphertext.chars() {
            let index = cipher_position(&self.square, c, self.name())?;
            stream.push(index / SIDE);
            stream.push(index % SIDE);
        }
        let (rows, cols) = stream.split_at(stream.len() / 2);
        Ok(rows
            .iter()
            .zip(cols)
            .map(|(row, col)| self.square.symbol(row * SIDE + col))
            .collect())
    }
}
