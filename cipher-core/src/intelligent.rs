// File:    intelligent.rs
// Author:  apezoo
// Date:    2025-08-03
//
// Description: Reversible escaping of spaces, capitals and punctuation into rare letter bigrams.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Intelligent encoding.
//!
//! Ciphers only carry letters and digits. Before normalization, the encoder
//! rewrites every space, capital letter and common punctuation mark as a
//! bigram that practically never occurs in natural language, so the
//! decrypting side can restore them. The whole message is wrapped in the
//! `ZX` marker, which also lets the decoder recognize encoded text.

use crate::random::RandomSource;

/// Opens and closes an encoded message.
pub const MESSAGE_MARKER: &str = "ZX";
/// Precedes a literal upper-case letter.
pub const CAPITAL_MARKER: &str = "GX";
/// Interchangeable markers for a space; one is chosen at random each time.
pub const SPACE_MARKERS: [&str; 5] = ["FQ", "JX", "QK", "WZ", "ZJ"];
/// Fixed markers for the supported punctuation.
pub const PUNCTUATION_MARKERS: [(char, &str); 9] = [
    ('.', "HX"),
    (',', "JQ"),
    ('?', "PZ"),
    ('!', "QG"),
    ('\'', "QY"),
    ('"', "QZ"),
    (':', "WQ"),
    (';', "XJ"),
    ('-', "ZQ"),
];

/// Escapes `text` so spacing, case and punctuation survive a cipher.
///
/// Characters that are neither escaped nor letters/digits are upper-cased
/// and passed through; normalization removes them afterwards.
pub fn encode(text: &str, rng: &mut dyn RandomSource) -> String {
    let mut encoded = String::with_capacity(text.len() * 2 + 4);
    encoded.push_str(MESSAGE_MARKER);
    for c in text.chars() {
        if c == ' ' {
            let marker = SPACE_MARKERS[rng.pick(0, SPACE_MARKERS.len() - 1)];
            encoded.push_str(marker);
        } else if let Some(marker) = punctuation_marker(c) {
            encoded.push_str(marker);
        } else if c.is_ascii_uppercase() {
            encoded.push_str(CAPITAL_MARKER);
            encoded.push(c);
        } else {
            encoded.extend(c.to_uppercase());
        }
    }
    encoded.push_str(MESSAGE_MARKER);
    encoded
}

/// Whether `text` carries the leading message marker.
#[must_use]
pub fn is_encoded(text: &str) -> bool {
    text.starts_with(MESSAGE_MARKER)
}

/// Restores spacing, case and punctuation.
///
/// Text without the leading marker is returned unchanged. An unrecognized
/// window emits its first symbol in lower case and advances by a single
/// symbol, so markers are found even when they straddle an odd offset.
#[must_use]
pub fn decode(text: &str) -> String {
    if !is_encoded(text) {
        return text.to_string();
    }
    let symbols: Vec<char> = text.chars().collect();
    let mut decoded = String::with_capacity(symbols.len());
    let mut pos = MESSAGE_MARKER.len();

    while pos + 1 < symbols.len() {
        let window = [symbols[pos], symbols[pos + 1]];
        match Marker::parse(window) {
            Some(Marker::EndOfMessage) => break,
            Some(Marker::Capital) => {
                if let Some(&letter) = symbols.get(pos + 2) {
                    decoded.push(letter);
                }
                pos += 3;
            }
            Some(Marker::Literal(c)) => {
                decoded.push(c);
                pos += 2;
            }
            None => {
                decoded.push(window[0].to_ascii_lowercase());
                pos += 1;
            }
        }
    }
    decoded
}

enum Marker {
    EndOfMessage,
    Capital,
    Literal(char),
}

impl Marker {
    fn parse(window: [char; 2]) -> Option<Self> {
        let matches = |marker: &str| {
            let mut chars = marker.chars();
            chars.next() == Some(window[0]) && chars.next() == Some(window[1])
        };
        if matches(MESSAGE_MARKER) {
            Some(Self::EndOfMessage)
        } else if matches(CAPITAL_MARKER) {
            Some(Self::Capital)
        } else if SPACE_MARKERS.iter().any(|m| matches(*m)) {
            Some(Self::Literal(' '))
        } else {
            PUNCTUATION_MARKERS
                .iter()
                .find(|(_, m)| matches(*m))
                .map(|&(c, _)| Self::Literal(c))
        }
    }
}

fn punctuation_marker(c: char) -> Option<&'static str> {
    PUNCTUATION_MARKERS
        .iter()
        .find(|&&(p, _)| p == c)
        .map(|&(_, marker)| marker)
}
