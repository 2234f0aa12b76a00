// File:    mod.rs
// Author:  apezoo
// Date:    2025-08-05
//
// Description: The shared transform capability and the ten classical cipher implementations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Classical ciphers.
//!
//! Every cipher implements [`Transform`]. Encoding expects normalized
//! plaintext (upper-case letters and digits); decoding expects text that has
//! been through the cipher's own [`Transform::normalize_ciphertext`].

use crate::alphabet::{Alphabet, normalize_alphanumeric};
use crate::error::CipherError;
use crate::random::RandomSource;

/// The ADFGVX cipher.
pub mod adfgvx;
/// The Affine cipher.
pub mod affine;
/// The Alberti cipher.
pub mod alberti;
/// The Atbash cipher.
pub mod atbash;
/// The Bifid cipher.
pub mod bifid;
/// The Caesar cipher.
pub mod caesar;
/// The Hill cipher.
pub mod hill;
/// The Keyword cipher.
pub mod keyword;
/// The Polybius Square cipher.
pub mod polybius;
/// The boustrophedon transposition cipher.
pub mod transposition;

pub use adfgvx::Adfgvx;
pub use affine::Affine;
pub use alberti::Alberti;
pub use atbash::Atbash;
pub use bifid::Bifid;
pub use caesar::Caesar;
pub use hill::Hill;
pub use keyword::Keyword;
pub use polybius::PolybiusSquare;
pub use transposition::Transposition;

/// The encode/decode capability shared by all ciphers.
pub trait Transform {
    /// Human-readable cipher name.
    fn name(&self) -> &'static str;

    /// Enciphers normalized plaintext.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidSymbol`] if the plaintext holds a symbol
    /// outside the cipher's domain.
    fn encode(&self, plaintext: &str, rng: &mut dyn RandomSource) -> Result<String, CipherError>;

    /// Deciphers normalized ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidCiphertext`] if the ciphertext holds
    /// foreign symbols or has a length the cipher cannot produce.
    fn decode(&self, ciphertext: &str) -> Result<String, CipherError>;

    /// Strips everything the cipher never emits.
    ///
    /// The default keeps letters and digits and upper-cases them.
    fn normalize_ciphertext(&self, raw: &str) -> String {
        normalize_alphanumeric(raw)
    }
}

/// Position of a plaintext symbol.
pub(crate) fn plain_position(alphabet: &Alphabet, symbol: char) -> Result<usize, CipherError> {
    alphabet
        .position(symbol)
        .ok_or(CipherError::InvalidSymbol(symbol))
}

/// Position of a ciphertext symbol.
pub(crate) fn cipher_position(
    alphabet: &Alphabet,
    symbol: char,
    cipher: &str,
) -> Result<usize, CipherError> {
    alphabet.position(symbol).ok_or_else(|| {
        CipherError::InvalidCiphertext(format!("'{symbol}' is not a valid {cipher} symbol"))
    })
}
