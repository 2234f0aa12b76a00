// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for cipher-core, tying alphabets, ciphers, masking and the pipeline together.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! This library provides ten classical ciphers and the pipeline around them:
//! keyed alphabets, intelligent escaping of spacing and punctuation, and an
//! optional one-time pad mask.
//!
//! ```
//! use cipher_core::dispatch::{process, KeyMaterial, Mode, Options, Request, Variant};
//! use cipher_core::random::RngSource;
//!
//! let request = Request::new(
//!     Variant::Caesar,
//!     Mode::Encrypt,
//!     "hello",
//!     &KeyMaterial::default(),
//!     Options::default(),
//! )
//! .unwrap();
//! let response = process(&request, &mut RngSource::seeded(7));
//! assert_eq!(response.output, "KHOOR");
//! ```

/// Working alphabets and text normalization.
pub mod alphabet;
/// The ten cipher algorithms.
pub mod ciphers;
/// Cipher selection and the request boundary.
pub mod dispatch;
/// Error types.
pub mod error;
/// Intelligent escaping of spacing, case and punctuation.
pub mod intelligent;
/// Key matrices for the Hill cipher.
pub mod matrix;
/// One-time pad masking.
pub mod pad;
/// Encrypt and decrypt pipelines.
pub mod pipeline;
/// The contract for interactive front ends.
pub mod prompt;
/// Injectable randomness.
pub mod random;

pub use dispatch::{Cipher, KeyMaterial, Mode, Options, Request, Response, Variant, process};
pub use error::CipherError;
