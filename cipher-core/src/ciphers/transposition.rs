// File:    transposition.rs
// Author:  apezoo
// Date:    2025-08-07
//
// Description: Fixed-width boustrophedon transposition.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::{Transform, cipher_position, plain_position};
use crate::alphabet::Alphabet;
use crate::error::CipherError;
use crate::random::RandomSource;

/// Number of columns in the transposition grid.
pub const GRID_WIDTH: usize = 7;

/// Writes the message down the columns of a grid seven columns wide, then
/// reads the rows back alternately left-to-right and right-to-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transposition;

impl Transposition {
    fn row_count(len: usize) -> usize {
        len.div_ceil(GRID_WIDTH)
    }
}

impl Transform for Transposition {
    fn name(&self) -> &'static str {
        "Transposition"
    }

    fn encode(&self, plaintext: &str, _rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        let symbols: Vec<char> = plaintext.chars().collect();
        if let Some(&bad) = symbols.iter().find(|&&c| plain_position(&alphanum, c).is_err()) {
            return Err(CipherError::InvalidSymbol(bad));
        }
        let height = Self::row_count(symbols.len());
        if height <= 1 {
            return Ok(plaintext.to_string());
        }

        let mut rows = vec![String::new(); height];
        for (i, &c) in symbols.iter().enumerate() {
            rows[i % height].push(c);
        }
        Ok(rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                if r % 2 == 0 {
                    row.clone()
                } else {
                    row.chars().rev().collect()
                }
            })
            .collect())
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        let alphanum = Alphabet::alphanumeric();
        let symbols: Vec<char> = ciphertext.chars().collect();
        for &c in &symbols {
            cipher_position(&alphanum, c, self.name())?;
        }
        let len = symbols.len();
        if len <= GRID_WIDTH {
            return Ok(ciphertext.to_string());
        }

        let height = Self::row_count(len);
        let mut rows: Vec<Vec<char>> = Vec::with_capacity(height);
        let mut rest = symbols.as_slice();
        for r in 0..height {
            let row_len = len / height + usize::from(r < len % height);
            let (row, tail) = rest.split_at(row_len);
            let mut row = row.to_vec();
            if r % 2 == 1 {
                row.reverse();
            }
            rows.push(row);
            rest = tail;
        }
        Ok((0..len).map(|i| rows[i % height][i / height]).collect())
    }
}
