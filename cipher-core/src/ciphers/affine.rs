// File:    affine.rs
// Author:  apezoo
// Date:    2025-08-06
//
// Description: Affine substitution c = a*p + b modulo 36.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, cipher_position, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;

const MODULUS: usize = 36;

/// Multipliers offered to users; every one of them is a unit modulo 36.
pub const SUGGESTED_MULTIPLIERS: [i64; 11] = [5, 7, 11, 13, 17, 19, 23, 25, 29, 31, 35];

/// Maps symbol `p` to `(a·p + b) mod 36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    multiplier: usize,
    offset: usize,
    inverse: usize,
}

impl Affine {
    /// Builds the cipher from its two key numbers.
    ///
    /// The offset may be any integer, negative ones included.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `multiplier` shares a factor
    /// with 36, since the mapping would then not be reversible.
    pub fn new(multiplier: i64, offset: i64) -> Result<Self, CipherError> {
        let a = residue(multiplier);
        let inverse = (1..MODULUS)
            .find(|x| (a * x) % MODULUS == 1)
            .ok_or_else(|| {
                CipherError::InvalidKey(format!(
                    "multiplier {multiplier} is not coprime to 36; use one of {SUGGESTED_MULTIPLIERS:?}"
                ))
            })?;
        Ok(Self {
            multiplier: a,
            offset: residue(offset),
            inverse,
        })
    }

    /// Multiplier reduced modulo 36.
    #[must_use]
    pub const fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// Multiplicative inverse of the multiplier modulo 36.
    #[must_use]
    pub const fn inverse(&self) -> usize {
        self.inverse
    }
}

fn residue(value: i64) -> usize {
    usize::try_from(value.rem_euclid(36)).unwrap_or_default()
}

impl Transform for Affine {
    fn name(&self) -> &'static str {
        "Affine"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        plaintext
            .chars()
            .map(|c| {
                let p = plain_position(&alphanum, c)?;
                Ok(alphanum.symbol(self.multiplier * p + self.offset))
            })
            .collect()
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        let modulus = alphanum.len();
        ciphertext
            .chars()
            .map(|c| {
                let index = cipher_position(&alphanum, c, self.name())?;
                Ok(alphanum.symbol(self.inverse * (index + modulus - self.offset)))
            })
            .collect()
    }
}
