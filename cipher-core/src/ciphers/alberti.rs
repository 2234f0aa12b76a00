// File:    alberti.rs
// Author:  apezoo
// Date:    2025-08-09
//
// Description: Alberti cipher disk with randomly scheduled rotor changes announced in-line.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;
use log::debug;

/// The fixed outer disk.
pub const STABILIS: &str = "ABCDEFGILMNOPQRSTVXZ1234";
/// The rotating inner disk.
pub const MOBILIS: &str = "gklnprtvz&xysomqihfdbace";
/// Marks a substituted symbol in the pre-processed plaintext.
pub const ESCAPE: char = '4';
/// Symbols missing from the outer disk and the disk symbol standing in for each.
pub const SUBSTITUTES: [(char, char); 13] = [
    ('H', 'I'),
    ('J', 'G'),
    ('K', 'C'),
    ('U', 'V'),
    ('W', 'X'),
    ('Y', 'Z'),
    ('0', 'O'),
    ('4', 'F'),
    ('5', 'S'),
    ('6', 'B'),
    ('7', 'A'),
    ('8', 'M'),
    ('9', 'R'),
];

/// Shortest and longest run of symbols enciphered under one rotor setting.
const RUN_LENGTH: (usize, usize) = (5, 15);

/// The Alberti polyalphabetic cipher.
///
/// Plaintext symbols are found on the outer disk (upper case) and replaced
/// by the inner-disk symbol (lower case) the rotor currently lines up with
/// them. The rotor setting is picked at random and changed after every run
/// of 5 to 15 symbols; each new setting is written into the ciphertext as
/// the upper-case outer-disk symbol it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alberti {
    index_letter: char,
}

impl Alberti {
    /// Builds the cipher around an index letter from the inner disk.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `index_letter` is not on the
    /// inner disk (either case is accepted).
    pub fn new(index_letter: char) -> Result<Self, CipherError> {
        let lower = index_letter.to_ascii_lowercase();
        if MOBILIS.contains(lower) {
            Ok(Self {
                index_letter: lower,
            })
        } else {
            Err(CipherError::InvalidKey(format!(
                "'{index_letter}' is not on the inner disk; choose one of {MOBILIS}"
            )))
        }
    }

    /// The index letter the disks were set with.
    #[must_use]
    pub const fn index_letter(&self) -> char {
        self.index_letter
    }

    /// Rewrites symbols missing from the outer disk as escape + substitute.
    fn escape(plaintext: &str) -> String {
        let mut escaped = String::with_capacity(plaintext.len());
        for c in plaintext.chars() {
            match SUBSTITUTES.iter().find(|&&(missing, _)| missing == c) {
                Some(&(_, substitute)) => {
                    escaped.push(ESCAPE);
                    escaped.push(substitute);
                }
                None => escaped.push(c),
            }
        }
        escaped
    }

    /// Reverses [`Self::escape`].
    fn unescape(text: &str) -> Result<String, CipherError> {
        let mut restored = String::with_capacity(text.len());
        let mut escaped = false;
        for c in text.chars() {
            if escaped {
                let original = SUBSTITUTES
                    .iter()
                    .find(|&&(_, substitute)| substitute == c)
                    .map(|&(missing, _)| missing)
                    .ok_or_else(|| {
                        CipherError::InvalidCiphertext(format!(
                            "'{c}' cannot follow the Alberti escape symbol"
                        ))
                    })?;
                restored.push(original);
                escaped = false;
            } else if c == ESCAPE {
                escaped = true;
            } else {
                restored.push(c);
            }
        }
        Ok(restored)
    }
}

impl Transform for Alberti {
    fn name(&self) -> &'static str {
        "Alberti"
    }

    fn encode(&self, plaintext: &str, rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let stabilis = Alphabet::from_symbols(STABILIS);
        let mobilis = Alphabet::from_symbols(MOBILIS);
        let last_setting = stabilis.len() - 1;

        let escaped = Self::escape(plaintext);
        let mut ciphertext = String::with_capacity(escaped.len() * 2);
        let mut key = rng.pick(0, last_setting);
        let mut remaining = rng.pick(RUN_LENGTH.0, RUN_LENGTH.1);
        ciphertext.push(stabilis.symbol(key));
        debug!("Alberti rotor starts at '{}'", stabilis.symbol(key));

        for c in escaped.chars() {
            let index = plain_position(&stabilis, c)?;
            ciphertext.push(mobilis.symbol(index + key));
            remaining -= 1;
            if remaining == 0 {
                key = rng.pick(0, last_setting);
                remaining = rng.pick(RUN_LENGTH.0, RUN_LENGTH.1);
                ciphertext.push(stabilis.symbol(key));
            }
        }
        Ok(ciphertext)
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let stabilis = Alphabet::from_symbols(STABILIS);
        let mobilis = Alphabet::from_symbols(MOBILIS);
        let modulus = mobilis.len();

        let mut key = None;
        let mut plaintext = String::with_capacity(ciphertext.len());
        for c in ciphertext.chars() {
            if let Some(setting) = stabilis.position(c) {
                key = Some(setting);
            } else if let Some(index) = mobilis.position(c) {
                let setting = key.ok_or_else(|| {
                    CipherError::InvalidCiphertext(
                        "Alberti ciphertext must start with a rotor setting".to_string(),
                    )
                })?;
                plaintext.push(stabilis.symbol(index + modulus - setting));
            } else {
                return Err(CipherError::InvalidCiphertext(format!(
                    "'{c}' is on neither Alberti disk"
                )));
            }
        }
        Self::unescape(&plaintext)
    }

    /// Keeps only symbols from either disk, preserving case, since case tells
    /// rotor settings apart from enciphered symbols.
    fn normalize_ciphertext(&self, raw: &str) -> String {
        raw.chars()
            .filter(|&c| STABILIS.contains(c) || MOBILIS.contains(c))
            .collect()
    }
}
