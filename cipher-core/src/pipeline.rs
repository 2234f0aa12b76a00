// File:    pipeline.rs
// Author:  apezoo
// Date:    2025-08-10
//
// Description: Fixed-order composition of escaping, normalization, pad masking and the cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The encrypt and decrypt pipelines.
//!
//! Encrypt: intelligent encoding (optional), plaintext normalization,
//! one-time pad masking (optional), cipher encode.
//!
//! Decrypt: cipher-specific ciphertext normalization, cipher decode,
//! one-time pad unmasking (optional), intelligent decoding (optional; it
//! only acts on text that starts with the message marker).

use crate::alphabet::normalize_plaintext;
use crate::ciphers::Transform;
use crate::dispatch::Options;
use crate::error::CipherError;
use crate::intelligent;
use crate::random::RandomSource;
use log::debug;

/// Runs the encrypt pipeline.
///
/// # Errors
///
/// Any error from the pad or the cipher.
pub fn encrypt(
    cipher: &dyn Transform,
    text: &str,
    options: &Options,
    rng: &mut dyn RandomSource,
) -> Result<String, CipherError> {
    let escaped = if options.intelligent {
        intelligent::encode(text, rng)
    } else {
        text.to_string()
    };
    let normalized = normalize_plaintext(&escaped);
    debug!("normalized plaintext holds {} symbols", normalized.len());
    let masked = match &options.pad {
        Some(pad) => pad.mask(&normalized)?,
        None => normalized,
    };
    cipher.encode(&masked, rng)
}

/// Runs the decrypt pipeline.
///
/// # Errors
///
/// Any error from the cipher or the pad.
pub fn decrypt(
    cipher: &dyn Transform,
    text: &str,
    options: &Options,
) -> Result<String, CipherError> {
    let normalized = cipher.normalize_ciphertext(text);
    debug!("normalized ciphertext holds {} symbols", normalized.len());
    let deciphered = cipher.decode(&normalized)?;
    let unmasked = match &options.pad {
        Some(pad) => pad.unmask(&deciphered)?,
        None => deciphered,
    };
    Ok(if options.intelligent {
        intelligent::decode(&unmasked)
    } else {
        unmasked
    })
}
