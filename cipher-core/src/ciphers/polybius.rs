// File:    polybius.rs
// Author:  apezoo
// Date:    2025-08-06
//
// Description: Polybius square: each symbol becomes its 1-based row and column digits.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;

/// Side of the square.
pub const SIDE: usize = 6;

/// Lays the 36 letters and digits out in a 6×6 grid and replaces each
/// symbol with its row and column number, both counted from 1.
///
/// The ciphertext is therefore a run of two-digit numbers from 11 to 66.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolybiusSquare;

impl PolybiusSquare {
    fn coordinate(digit: char) -> Result<usize, CipherError> {
        digit
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .filter(|d| (1..=SIDE).contains(d))
            .map(|d| d - 1)
            .ok_or_else(|| {
                CipherError::InvalidCiphertext(format!(
                    "'{digit}' is not a Polybius coordinate (1-{SIDE})"
                ))
            })
    }

    fn digit(coordinate: usize) -> char {
        // Coordinates are below SIDE, so the digit always exists.
        u32::try_from(coordinate + 1)
            .ok()
            .and_then(|d| char::from_digit(d, 10))
            .unwrap_or('1')
    }
}

impl Transform for PolybiusSquare {
    fn name(&self) -> &'static str {
        "Polybius Square"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        let mut ciphertext = String::with_capacity(plaintext.len() * 2);
        for c in plaintext.chars() {
            let index = plain_position(&alphanum, c)?;
            ciphertext.push(Self::digit(index / SIDE));
            ciphertext.push(Self::digit(index % SIDE));
        }
        Ok(ciphertext)
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let digits: Vec<char> = ciphertext.chars().collect();
        if digits.len() % 2 != 0 {
            return Err(CipherError::InvalidCiphertext(
                "Polybius ciphertext must be made of two-digit numbers".to_string(),
            ));
        }
        let alphanum = Alphabet::alphanumeric();
        digits
            .chunks(2)
            .map(|pair| {
                let row = Self::coordinate(pair[0])?;
                let col = Self::coordinate(pair[1])?;
                Ok(alphanum.symbol(row * SIDE + col))
            })
            .collect()
    }

    fn normalize_ciphertext(&self, raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }
}
