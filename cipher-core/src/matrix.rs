// File:    matrix.rs
// Author:  apezoo
// Date:    2025-08-05
//
// Description: 3x3 key matrices over the integers modulo 37 for the Hill cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Modular 3×3 matrices.

use crate::alphabet::Alphabet;
use crate::error::CipherError;

/// Size of the Hill alphabet; prime, so every non-zero determinant is invertible.
pub const MODULUS: usize = 37;

/// A 3×3 matrix with entries in `0..MODULUS`, stored row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatrix {
    cells: [[usize; 3]; 3],
}

impl KeyMatrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        cells: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// Creates a matrix from rows; entries are reduced modulo 37.
    #[must_use]
    pub fn from_rows(rows: [[usize; 3]; 3]) -> Self {
        let mut cells = rows;
        for cell in cells.iter_mut().flatten() {
            *cell %= MODULUS;
        }
        Self { cells }
    }

    /// Builds a key matrix from the first nine symbols of `keyword`.
    ///
    /// Each symbol contributes its position in the 37-symbol Hill alphabet.
    /// Missing cells of a short keyword are filled with 0, 1, 2, ... in turn.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the keyword contains a symbol
    /// outside the Hill alphabet.
    pub fn from_keyword(keyword: &str) -> Result<Self, CipherError> {
        let alphabet = Alphabet::hill();
        let mut values = [0usize; 9];
        let mut symbols = keyword.chars().map(|c| c.to_ascii_uppercase());
        let mut filler = 0;
        for value in &mut values {
            *value = match symbols.next() {
                Some(c) => alphabet.position(c).ok_or_else(|| {
                    CipherError::InvalidKey(format!("'{c}' cannot appear in a Hill keyword"))
                })?,
                None => {
                    filler += 1;
                    filler - 1
                }
            };
        }
        Ok(Self::from_rows([
            [values[0], values[1], values[2]],
            [values[3], values[4], values[5]],
            [values[6], values[7], values[8]],
        ]))
    }

    /// The entries, row by row.
    #[must_use]
    pub const fn rows(&self) -> [[usize; 3]; 3] {
        self.cells
    }

    /// Determinant modulo 37.
    #[must_use]
    pub fn determinant(&self) -> usize {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.cells;
        let positive = a * e * i + b * f * g + c * d * h;
        let negative = a * f * h + b * d * i + c * e * g;
        sub_mod(positive, negative)
    }

    /// Computes the inverse as `det⁻¹ · adj(M) mod 37`.
    ///
    /// The determinant's inverse is found by scanning `0..37` for the value
    /// `x` with `det · x ≡ 1`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when the determinant is zero
    /// modulo 37.
    pub fn inverse(&self) -> Result<Self, CipherError> {
        let determinant = self.determinant();
        let determinant_inverse = (0..MODULUS)
            .find(|x| (determinant * x) % MODULUS == 1)
            .ok_or_else(|| {
                CipherError::InvalidKey(
                    "the key matrix is not invertible modulo 37; choose another keyword"
                        .to_string(),
                )
            })?;

        let adjugate = self.adjugate();
        let mut cells = [[0usize; 3]; 3];
        for (row, adj_row) in cells.iter_mut().zip(adjugate.iter()) {
            for (cell, &adj) in row.iter_mut().zip(adj_row.iter()) {
                *cell = (determinant_inverse * adj) % MODULUS;
            }
        }
        Ok(Self { cells })
    }

    /// Transposed cofactor matrix, modulo 37.
    fn adjugate(&self) -> [[usize; 3]; 3] {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.cells;
        [
            [
                sub_mod(e * i, f * h),
                sub_mod(c * h, b * i),
                sub_mod(b * f, c * e),
            ],
            [
                sub_mod(f * g, d * i),
                sub_mod(a * i, c * g),
                sub_mod(c * d, a * f),
            ],
            [
                sub_mod(d * h, e * g),
                sub_mod(b * g, a * h),
                sub_mod(a * e, b * d),
            ],
        ]
    }

    /// Multiplies the matrix by a column vector, modulo 37.
    #[must_use]
    pub fn apply(&self, vector: [usize; 3]) -> [usize; 3] {
        let mut out = [0usize; 3];
        for (slot, row) in out.iter_mut().zip(self.cells.iter()) {
            *slot = row
                .iter()
                .zip(vector.iter())
                .map(|(m, v)| m * v)
                .sum::<usize>()
                % MODULUS;
        }
        out
    }

    /// Matrix product `self · other`, modulo 37.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut cells = [[0usize; 3]; 3];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3)
                    .map(|k| self.cells[r][k] * other.cells[k][c])
                    .sum::<usize>()
                    % MODULUS;
            }
        }
        Self { cells }
    }
}

fn sub_mod(lhs: usize, rhs: usize) -> usize {
    (lhs % MODULUS + MODULUS - rhs % MODULUS) % MODULUS
}
