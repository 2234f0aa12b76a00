// File:    error.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Error taxonomy shared by every cipher, the pipeline and the prompt flow.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Errors produced while building keys or transforming text.

use thiserror::Error;

/// Everything that can go wrong inside a single request.
///
/// None of these are fatal to the process: the request boundary in
/// [`crate::dispatch`] turns them into a diagnostic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key has the wrong format or lies outside the accepted range.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The ciphertext contains foreign symbols or has an impossible length.
    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    /// A plaintext symbol lies outside the cipher's domain.
    #[error("symbol '{0}' cannot be enciphered")]
    InvalidSymbol(char),

    /// The cipher tag was not recognized.
    #[error("unknown cipher '{0}'")]
    UnknownVariant(String),

    /// The user chose to abandon the request.
    #[error("aborted by user")]
    UserAbort,
}

impl CipherError {
    /// Returns `true` for an explicit cancellation rather than a failure.
    #[must_use]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::UserAbort)
    }
}
