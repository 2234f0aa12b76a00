// File:    dispatch.rs
// Author:  apezoo
// Date:    2025-08-10
//
// Description: Maps cipher tags and key material to cipher instances and handles requests end to end.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Request dispatch.
//!
//! A [`Request`] pairs a ready-to-use [`Cipher`] with a [`Mode`], the raw
//! text and the pipeline options. [`process`] is the request boundary: it
//! runs the pipeline and turns any failure into a diagnostic instead of
//! passing it on.

use crate::ciphers::{
    Adfgvx, Affine, Alberti, Atbash, Bifid, Caesar, Hill, Keyword, PolybiusSquare, Transform,
    Transposition,
};
use crate::error::CipherError;
use crate::pad::OneTimePad;
use crate::pipeline;
use crate::random::RandomSource;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// ADFGVX substitution and transposition.
    Adfgvx,
    /// Affine substitution.
    Affine,
    /// Alberti cipher disk.
    Alberti,
    /// Atbash mirror substitution.
    Atbash,
    /// Bifid fractionation.
    Bifid,
    /// Caesar shift.
    Caesar,
    /// Hill matrix cipher.
    Hill,
    /// Keyword substitution.
    Keyword,
    /// Polybius square.
    Polybius,
    /// Boustrophedon transposition.
    Transposition,
}

impl Variant {
    /// Every variant, in menu order.
    pub const ALL: [Self; 10] = [
        Self::Adfgvx,
        Self::Affine,
        Self::Alberti,
        Self::Atbash,
        Self::Bifid,
        Self::Caesar,
        Self::Hill,
        Self::Keyword,
        Self::Polybius,
        Self::Transposition,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Adfgvx => "ADFGVX",
            Self::Affine => "Affine",
            Self::Alberti => "Alberti",
            Self::Atbash => "Atbash",
            Self::Bifid => "Bifid",
            Self::Caesar => "Caesar",
            Self::Hill => "Hill",
            Self::Keyword => "Keyword",
            Self::Polybius => "Polybius Square",
            Self::Transposition => "Transposition",
        }
    }

    /// Single-key menu shortcut.
    #[must_use]
    pub const fn keystroke(self) -> char {
        match self {
            Self::Adfgvx => 'A',
            Self::Affine => 'F',
            Self::Alberti => 'L',
            Self::Atbash => 'S',
            Self::Bifid => 'B',
            Self::Caesar => 'C',
            Self::Hill => 'I',
            Self::Keyword => 'K',
            Self::Polybius => 'P',
            Self::Transposition => 'T',
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CipherError;

    /// Accepts a display name, a name without spaces or dashes, or a keystroke,
    /// in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|variant| {
                let name: String = variant
                    .name()
                    .chars()
                    .filter(|c| *c != ' ')
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                let short = format!("{variant:?}").to_ascii_lowercase();
                let key = variant.keystroke().to_ascii_lowercase().to_string();
                wanted == name || wanted == short || wanted == key
            })
            .ok_or_else(|| CipherError::UnknownVariant(s.to_string()))
    }
}

/// Direction of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => f.write_str("Encrypt"),
            Self::Decrypt => f.write_str("Decrypt"),
        }
    }
}

/// Raw key fields as supplied from outside the core.
///
/// Which fields are required depends on the variant; unused ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMaterial {
    /// Keyword (Keyword, Bifid, Hill) or substitution keyword (ADFGVX).
    pub keyword: Option<String>,
    /// Permutation keyword (ADFGVX).
    pub permutation: Option<String>,
    /// Multiplier (Affine).
    pub multiplier: Option<i64>,
    /// Offset (Affine).
    pub offset: Option<i64>,
    /// Index letter (Alberti).
    pub index_letter: Option<char>,
}

fn required<'a, T>(field: Option<&'a T>, what: &str, variant: Variant) -> Result<&'a T, CipherError>
where
    T: ?Sized,
{
    field.ok_or_else(|| CipherError::InvalidKey(format!("the {variant} cipher needs {what}")))
}

/// A cipher together with its validated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    /// ADFGVX.
    Adfgvx(Adfgvx),
    /// Affine.
    Affine(Affine),
    /// Alberti.
    Alberti(Alberti),
    /// Atbash.
    Atbash(Atbash),
    /// Bifid.
    Bifid(Bifid),
    /// Caesar.
    Caesar(Caesar),
    /// Hill.
    Hill(Hill),
    /// Keyword.
    Keyword(Keyword),
    /// Polybius square.
    Polybius(PolybiusSquare),
    /// Transposition.
    Transposition(Transposition),
}

impl Cipher {
    /// Builds the cipher for `variant` from raw key material.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if a required field is missing or
    /// the key fails the cipher's own validation.
    pub fn build(variant: Variant, keys: &KeyMaterial) -> Result<Self, CipherError> {
        let keyword = || required(keys.keyword.as_deref(), "a keyword", variant);
        let cipher = match variant {
            Variant::Adfgvx => Self::Adfgvx(Adfgvx::new(
                keyword()?,
                required(keys.permutation.as_deref(), "a permutation keyword", variant)?,
            )?),
            Variant::Affine => Self::Affine(Affine::new(
                *required(keys.multiplier.as_ref(), "a multiplier", variant)?,
                *required(keys.offset.as_ref(), "an offset", variant)?,
            )?),
            Variant::Alberti => Self::Alberti(Alberti::new(*required(
                keys.index_letter.as_ref(),
                "an index letter",
                variant,
            )?)?),
            Variant::Atbash => Self::Atbash(Atbash),
            Variant::Bifid => Self::Bifid(Bifid::new(keyword()?)?),
            Variant::Caesar => Self::Caesar(Caesar),
            Variant::Hill => Self::Hill(Hill::new(keyword()?)?),
            Variant::Keyword => Self::Keyword(Keyword::new(keyword()?)?),
            Variant::Polybius => Self::Polybius(PolybiusSquare),
            Variant::Transposition => Self::Transposition(Transposition),
        };
        Ok(cipher)
    }

    /// The tag of this cipher.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Adfgvx(_) => Variant::Adfgvx,
            Self::Affine(_) => Variant::Affine,
            Self::Alberti(_) => Variant::Alberti,
            Self::Atbash(_) => Variant::Atbash,
            Self::Bifid(_) => Variant::Bifid,
            Self::Caesar(_) => Variant::Caesar,
            Self::Hill(_) => Variant::Hill,
            Self::Keyword(_) => Variant::Keyword,
            Self::Polybius(_) => Variant::Polybius,
            Self::Transposition(_) => Variant::Transposition,
        }
    }

    fn inner(&self) -> &dyn Transform {
        match self {
            Self::Adfgvx(c) => c,
            Self::Affine(c) => c,
            Self::Alberti(c) => c,
            Self::Atbash(c) => c,
            Self::Bifid(c) => c,
            Self::Caesar(c) => c,
            Self::Hill(c) => c,
            Self::Keyword(c) => c,
            Self::Polybius(c) => c,
            Self::Transposition(c) => c,
        }
    }
}

impl Transform for Cipher {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn encode(&self, plaintext: &str, rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        self.inner().encode(plaintext, rng)
    }

    fn decode(&self, ciphertext: &str) -> Result<String, CipherError> {
        self.inner().decode(ciphertext)
    }

    fn normalize_ciphertext(&self, raw: &str) -> String {
        self.inner().normalize_ciphertext(raw)
    }
}

/// Optional pipeline stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Escape spacing, case and punctuation before enciphering, and restore
    /// them after deciphering.
    pub intelligent: bool,
    /// One-time pad applied to the plaintext domain.
    pub pad: Option<OneTimePad>,
}

/// One encrypt or decrypt job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The cipher with its key.
    pub cipher: Cipher,
    /// Direction.
    pub mode: Mode,
    /// Raw input text.
    pub text: String,
    /// Optional stages.
    pub options: Options,
}

impl Request {
    /// Builds a request, validating the key material for `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the key material does not suit
    /// the variant.
    pub fn new(
        variant: Variant,
        mode: Mode,
        text: impl Into<String>,
        keys: &KeyMaterial,
        options: Options,
    ) -> Result<Self, CipherError> {
        Ok(Self {
            cipher: Cipher::build(variant, keys)?,
            mode,
            text: text.into(),
            options,
        })
    }

    /// Runs the pipeline, propagating failures.
    ///
    /// # Errors
    ///
    /// Any error raised by a pipeline stage.
    pub fn run(&self, rng: &mut dyn RandomSource) -> Result<String, CipherError> {
        debug!(
            "{} request with the {} cipher on {} characters",
            self.mode,
            self.cipher.name(),
            self.text.chars().count()
        );
        match self.mode {
            Mode::Encrypt => pipeline::encrypt(&self.cipher, &self.text, &self.options, rng),
            Mode::Decrypt => pipeline::decrypt(&self.cipher, &self.text, &self.options),
        }
    }
}

/// Outcome of a processed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Cipher used.
    pub variant: Variant,
    /// Direction.
    pub mode: Mode,
    /// Resulting text; empty if the request failed.
    pub output: String,
    /// Why the request failed, if it did.
    pub diagnostic: Option<String>,
}

impl Response {
    /// Whether the request produced output.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.diagnostic.is_none()
    }
}

/// Processes a request, never letting a failure escape.
///
/// A failing stage abandons the whole request: the response carries an empty
/// output and the error message as its diagnostic.
pub fn process(request: &Request, rng: &mut dyn RandomSource) -> Response {
    let (output, diagnostic) = match request.run(rng) {
        Ok(output) => (output, None),
        Err(e) => {
            warn!(
                "{} with the {} cipher abandoned: {e}",
                request.mode,
                request.cipher.name()
            );
            (String::new(), Some(e.to_string()))
        }
    };
    Response {
        variant: request.cipher.variant(),
        mode: request.mode,
        output,
        diagnostic,
    }
}
