// File:    hill.rs
// Author:  apezoo
// Date:    2025-08-08
//
// Description: Hill cipher on 3-symbol blocks over the 37-symbol alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, cipher_position, plain_position};
use crate::alphabet::{Alphabet, HILL_PAD};
use crate::error::CipherError;
use crate::matrix::KeyMatrix;
use crate::random::RandomSource;

const BLOCK: usize = 3;

/// Multiplies 3-symbol blocks by a keyword-derived matrix modulo 37.
///
/// The alphabet is letters, digits and `-`; the extra symbol makes the
/// modulus prime and doubles as block padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill {
    matrix: KeyMatrix,
    inverse: KeyMatrix,
}

impl Hill {
    /// Builds the key matrix and its inverse from a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the keyword holds symbols
    /// outside the Hill alphabet or yields a matrix with no inverse modulo 37.
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        let matrix = KeyMatrix::from_keyword(keyword)?;
        let inverse = matrix.inverse()?;
        Ok(Self { matrix, inverse })
    }

    /// The encryption matrix.
    #[must_use]
    pub const fn matrix(&self) -> &KeyMatrix {
        &self.matrix
    }

    /// The decryption matrix.
    #[must_use]
    pub const fn inverse(&self) -> &KeyMatrix {
        &self.inverse
    }

    fn transform_blocks(alphabet: &Alphabet, indices: &[usize], matrix: &KeyMatrix) -> String {
        indices
            .chunks(BLOCK)
            .flat_map(|block| matrix.apply([block[0], block[1], block[2]]))
            .map(|index| alphabet.symbol(index))
            .collect()
    }
}

impl Transform for Hill {
    fn name(&self) -> &'static str {
        "Hill"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let alphabet = Alphabet::hill();
        let mut indices = plaintext
            .chars()
            .map(|c| plain_position(&alphabet, c))
            .collect::<Result<Vec<_>, _>>()?;
        let pad = alphabet.len() - 1;
        while indices.len() % BLOCK != 0 {
            indices.push(pad);
        }
        Ok(Self::transform_blocks(&alphabet, &indices, &self.matrix))
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let alphabet = Alphabet::hill();
        let indices = ciphertext
            .chars()
            .map(|c| cipher_position(&alphabet, c, self.name()))
            .collect::<Result<Vec<_>, _>>()?;
        if indices.len() % BLOCK != 0 {
            return Err(CipherError::InvalidCiphertext(
                "Hill ciphertext length must be a multiple of 3".to_string(),
            ));
        }
        let mut plaintext = Self::transform_blocks(&alphabet, &indices, &self.inverse);
        for _ in 1..BLOCK {
            if plaintext.ends_with(HILL_PAD) {
                plaintext.pop();
            }
        }
        Ok(plaintext)
    }

    fn normalize_ciphertext(&self, raw: &str) -> String {
        raw.chars()
            .filter(|&c| c.is_ascii_alphanumeric() || c == HILL_PAD)
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}
