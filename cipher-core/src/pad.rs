// File:    pad.rs
// Author:  apezoo
// Date:    2025-08-04
//
// Description: Modular one-time pad masking applied to normalized plaintext.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! One-time pad masking.
//!
//! The pad code is a word whose symbols are read as positions in the
//! 36-symbol letters+digits alphabet. Masking adds those positions to the
//! text symbol by symbol, modulo 36, repeating the code when it is shorter
//! than the text. Unmasking subtracts them again.

use crate::alphabet::Alphabet;
use crate::error::CipherError;

/// A repeating numeric mask derived from a code word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimePad {
    shifts: Vec<usize>,
}

impl OneTimePad {
    /// Derives the pad from `code`.
    ///
    /// An empty code yields a pad that leaves text untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the code contains anything but
    /// letters and digits.
    pub fn new(code: &str) -> Result<Self, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        let shifts = code
            .chars()
            .map(|c| {
                alphanum.position(c.to_ascii_uppercase()).ok_or_else(|| {
                    CipherError::InvalidKey(format!(
                        "one-time pad codes may only contain letters and digits, found '{c}'"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { shifts })
    }

    /// Whether the pad changes nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.shifts.iter().all(|&s| s == 0)
    }

    /// The numeric shifts, in order.
    #[must_use]
    pub fn shifts(&self) -> &[usize] {
        &self.shifts
    }

    /// Adds the pad to normalized plaintext.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidSymbol`] for a symbol outside the
    /// letters+digits alphabet.
    pub fn mask(&self, text: &str) -> Result<String, CipherError> {
        self.apply(text, true).map_err(CipherError::InvalidSymbol)
    }

    /// Removes the pad from deciphered text.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidCiphertext`] for a symbol outside the
    /// letters+digits alphabet.
    pub fn unmask(&self, text: &str) -> Result<String, CipherError> {
        self.apply(text, false).map_err(|c| {
            CipherError::InvalidCiphertext(format!(
                "symbol '{c}' cannot be unmasked by a one-time pad"
            ))
        })
    }

    fn apply(&self, text: &str, forward: bool) -> Result<String, char> {
        if self.shifts.is_empty() {
            return Ok(text.to_string());
        }
        let alphanum = Alphabet::alphanumeric();
        let modulus = alphanum.len();
        text.chars()
            .zip(self.shifts.iter().cycle())
            .map(|(c, &shift)| {
                let index = alphanum.position(c).ok_or(c)?;
                let moved = if forward {
                    index + shift
                } else {
                    index + modulus - shift
                };
                Ok(alphanum.symbol(moved % modulus))
            })
            .collect()
    }
}
