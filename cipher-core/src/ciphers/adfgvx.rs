// File:    adfgvx.rs
// Author:  apezoo
// Date:    2025-08-08
//
// Description: ADFGVX: bigram substitution followed by keyed columnar transposition.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, plain_position};
use crate::alphabet::{Alphabet, LETTERS};
use crate::error::CipherError;
use crate::random::RandomSource;

/// Row and column labels of the substitution square.
pub const CODE: [char; 6] = ['A', 'D', 'F', 'G', 'V', 'X'];
/// Symbol used to fill the last row of the transposition rectangle.
pub const NULL: char = 'V';

/// The ADFGVX cipher.
///
/// Every symbol is first replaced by its row and column label in a 6×6
/// square. The resulting stream is written in rows under the permutation
/// keyword and read out column by column, in the alphabetical order of the
/// keyword's letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adfgvx {
    square: Alphabet,
    column_order: Vec<usize>,
}

impl Adfgvx {
    /// Builds the cipher from the substitution keyword and the permutation
    /// keyword.
    ///
    /// The square holds the keyword alphabet with the digits `1`-`9`, `0`
    /// slotted in right after the letters `A`-`J` respectively.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if either keyword contains
    /// anything but letters, or the permutation keyword is empty.
    pub fn new(keyword: &str, permutation: &str) -> Result<Self, CipherError> {
        for word in [keyword, permutation] {
            if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
                return Err(CipherError::InvalidKey(format!(
                    "keywords may only contain letters, found '{bad}'"
                )));
            }
        }
        if permutation.is_empty() {
            return Err(CipherError::InvalidKey(
                "ADFGVX needs a permutation keyword of at least one letter".to_string(),
            ));
        }

        let mut symbols = String::with_capacity(36);
        for letter in Alphabet::from_keyword(keyword, false).symbols() {
            symbols.push(*letter);
            if let Some(rank) = LETTERS.chars().take(10).position(|l| l == *letter) {
                symbols.push(paired_digit(rank));
            }
        }

        let permutation: Vec<char> = permutation.chars().map(|c| c.to_ascii_uppercase()).collect();
        let mut column_order: Vec<usize> = (0..permutation.len()).collect();
        column_order.sort_by_key(|&i| (permutation[i], i));

        Ok(Self {
            square: Alphabet::from_symbols(&symbols),
            column_order,
        })
    }

    /// The substitution square, read row by row.
    #[must_use]
    pub const fn square(&self) -> &Alphabet {
        &self.square
    }

    /// Indices of the written columns, in the order they are emitted.
    #[must_use]
    pub fn column_order(&self) -> &[usize] {
        &self.column_order
    }

    fn bigram(&self, symbol: char) -> Result<[char; 2], CipherError> {
        let index = plain_position(&self.square, symbol)?;
        Ok([CODE[index / CODE.len()], CODE[index % CODE.len()]])
    }

    fn symbol_for(&self, bigram: &[char]) -> Result<char, CipherError> {
        let label = |c: char| {
            CODE.iter().position(|&l| l == c).ok_or_else(|| {
                CipherError::InvalidCiphertext(format!("'{c}' is not an ADFGVX symbol"))
            })
        };
        let row = label(bigram[0])?;
        let col = label(bigram[1])?;
        Ok(self.square.symbol(row * CODE.len() + col))
    }
}

/// Digit that follows the `rank`-th letter: A→1 … I→9, J→0.
fn paired_digit(rank: usize) -> char {
    u32::try_from((rank + 1) % 10)
        .ok()
        .and_then(|d| char::from_digit(d, 10))
        .unwrap_or('0')
}

impl Transform for Adfgvx {
    fn name(&self) -> &'static str {
        "ADFGVX"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let mut stream = Vec::with_capacity(plaintext.len() * 2);
        for c in plaintext.chars() {
            stream.extend(self.bigram(c)?);
        }
        let width = self.column_order.len();
        while stream.len() % width != 0 {
            stream.push(NULL);
        }

        let mut columns = vec![String::new(); width];
        for (i, &c) in stream.iter().enumerate() {
            columns[i % width].push(c);
        }
        Ok(self
            .column_order
            .iter()
            .map(|&col| columns[col].as_str())
            .collect())
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let symbols: Vec<char> = ciphertext.chars().collect();
        let width = self.column_order.len();
        if symbols.len() % width != 0 {
            return Err(CipherError::InvalidCiphertext(
                "the ciphertext length does not fit the permutation keyword".to_string(),
            ));
        }
        if let Some(bad) = symbols.iter().find(|c| !CODE.contains(c)) {
            return Err(CipherError::InvalidCiphertext(format!(
                "'{bad}' is not an ADFGVX symbol"
            )));
        }

        let height = symbols.len() / width;
        let empty: &[char] = &[];
        let mut columns = vec![empty; width];
        for (chunk, &col) in symbols.chunks(height.max(1)).zip(&self.column_order) {
            columns[col] = chunk;
        }
        let mut stream: Vec<char> = (0..height)
            .flat_map(|row| columns.iter().map(move |column| column[row]))
            .collect();

        // At most width - 1 nulls were added, and the real stream has even length.
        let floor = stream.len().saturating_sub(width - 1);
        let mut end = stream.len();
        while end > floor && stream[end - 1] == NULL {
            end -= 1;
        }
        if end % 2 == 1 {
            end += 1;
        }
        stream.truncate(end);

        stream
            .chunks(2)
            .map(|bigram| self.symbol_for(bigram))
            .collect()
    }
}
