// File:    atbash.rs
// Author:  apezoo
// Date:    2025-08-05
//
// Description: Atbash mirror substitution over the letters+digits alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, cipher_position, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;

/// Mirrors the alphabet: the first symbol swaps with the last, and so on.
///
/// Because the domain includes the digits, letters near the start map onto
/// digits (`A` becomes `9`) and vice versa. The transform is its own inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atbash;

impl Atbash {
    fn mirror(alphabet: &Alphabet, index: usize) -> char {
        alphabet.symbol(alphabet.len() - 1 - index)
    }
}

impl Transform for Atbash {
    fn name(&self) -> &'static str {
        "Atbash"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        plaintext
            .chars()
            .map(|c| Ok(Self::mirror(&alphanum, plain_position(&alphanum, c)?)))
            .collect()
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        ciphertext
            .chars()
            .map(|c| {
                Ok(Self::mirror(
                    &alphanum,
                    cipher_position(&alphanum, c, self.name())?,
                ))
            })
            .collect()
    }
}
