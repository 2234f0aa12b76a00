// File:    caesar.rs
// Author:  apezoo
// Date:    2025-08-05
//
// Description: Caesar shift by three over the letters+digits alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, cipher_position, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;

/// How far each symbol moves.
pub const SHIFT: usize = 3;

/// Shifts every symbol three places along `A`-`Z`, `0`-`9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caesar;

impl Transform for Caesar {
    fn name(&self) -> &'static str {
        "Caesar"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        plaintext
            .chars()
            .map(|c| Ok(alphanum.symbol(plain_position(&alphanum, c)? + SHIFT)))
            .collect()
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        let modulus = alphanum.len();
        ciphertext
            .chars()
            .map(|c| {
                let index = cipher_position(&alphanum, c, self.name())?;
                Ok(alphanum.symbol(index + modulus - SHIFT))
            })
            .collect()
    }
}
