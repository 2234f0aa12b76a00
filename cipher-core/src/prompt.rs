// File:    prompt.rs
// Author:  apezoo
// Date:    2025-08-11
//
// Description: Contract for the interactive front end and the key-gathering flow built on it.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The prompt contract.
//!
//! The core never reads a terminal. A front end implements [`Prompter`]
//! with three primitives; the validation loops for keywords and key numbers
//! are provided on top of them, and [`gather_key_material`] /
//! [`gather_options`] ask for exactly what a request needs.

use crate::alphabet::{ALPHANUM, HILL_PAD, LETTERS};
use crate::ciphers::affine::SUGGESTED_MULTIPLIERS;
use crate::ciphers::alberti::MOBILIS;
use crate::dispatch::{KeyMaterial, Mode, Options, Variant};
use crate::error::CipherError;
use crate::pad::OneTimePad;

/// Blocking user interaction, implemented outside the core.
pub trait Prompter {
    /// Shows `prompt` and returns the reply; an empty reply may mean the
    /// user wants to abort.
    fn prompt_text(&mut self, prompt: &str) -> String;

    /// Asks a yes/no question.
    fn prompt_yes_no(&mut self, prompt: &str) -> bool;

    /// Shows a message that needs no reply.
    fn notify(&mut self, message: &str);

    /// Asks for a keyword until it is valid or the user aborts.
    ///
    /// Spaces are stripped and the result is upper-cased. Every remaining
    /// symbol must appear in `allowed` (compared case-insensitively).
    /// Returns `None` if the user aborts.
    fn prompt_keyword(
        &mut self,
        prompt: &str,
        allowed: &str,
        min_len: Option<usize>,
        max_len: Option<usize>,
    ) -> Option<String> {
        let allowed = allowed.to_uppercase();
        loop {
            let reply: String = self
                .prompt_text(prompt)
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_uppercase();
            if reply.is_empty() {
                if self.prompt_yes_no("You did not enter anything.  Do you want to abort?") {
                    return None;
                }
                continue;
            }
            let len = reply.chars().count();
            if min_len.is_some_and(|min| len < min) {
                self.notify("Sorry, your entry is too short.");
                continue;
            }
            if max_len.is_some_and(|max| len > max) {
                self.notify("Sorry, your entry is too long.");
                continue;
            }
            if reply.chars().any(|c| !allowed.contains(c)) {
                self.notify("Sorry, your entry includes forbidden characters.");
                continue;
            }
            return Some(reply);
        }
    }

    /// Asks for a whole number until it is valid or the user aborts.
    ///
    /// The number must be in `allowed` when given, and within `lower..=upper`
    /// for whichever bounds are given. Returns `None` if the user aborts.
    fn prompt_key_number(
        &mut self,
        prompt: &str,
        allowed: Option<&[i64]>,
        lower: Option<i64>,
        upper: Option<i64>,
    ) -> Option<i64> {
        loop {
            let reply = self.prompt_text(prompt);
            let reply = reply.trim();
            if reply.is_empty() {
                if self.prompt_yes_no("You did not enter anything.  Do you want to abort?") {
                    return None;
                }
                continue;
            }
            let Ok(number) = reply.parse::<i64>() else {
                self.notify("Sorry, that was not a number.");
                continue;
            };
            if allowed.is_some_and(|values| !values.contains(&number)) {
                self.notify("Sorry, that is not a valid key number for this cipher.");
            } else if lower.is_some_and(|low| number < low) {
                self.notify("Sorry, that number is too small.");
            } else if upper.is_some_and(|high| number > high) {
                self.notify("Sorry, that number is too large.");
            } else {
                return Some(number);
            }
        }
    }
}

/// Longest useful Hill keyword: one symbol per matrix cell.
const HILL_KEYWORD_MAX: usize = 9;

/// Asks for the key fields `variant` needs.
///
/// # Errors
///
/// Returns [`CipherError::UserAbort`] as soon as the user abandons a prompt.
pub fn gather_key_material(
    prompter: &mut dyn Prompter,
    variant: Variant,
    mode: Mode,
) -> Result<KeyMaterial, CipherError> {
    let used = match mode {
        Mode::Encrypt => "for this message",
        Mode::Decrypt => "that was used to encrypt this message",
    };
    let mut keys = KeyMaterial::default();
    match variant {
        Variant::Atbash | Variant::Caesar | Variant::Polybius | Variant::Transposition => {}
        Variant::Keyword | Variant::Bifid => {
            keys.keyword = Some(ask_keyword(
                prompter,
                &format!("Please enter the keyword {used}:  "),
                None,
            )?);
        }
        Variant::Hill => {
            keys.keyword = Some(
                prompter
                    .prompt_keyword(
                        &format!(
                            "Please enter the keyword (up to {HILL_KEYWORD_MAX} letters, digits or '{HILL_PAD}') {used}:  "
                        ),
                        &format!("{ALPHANUM}{HILL_PAD}"),
                        None,
                        Some(HILL_KEYWORD_MAX),
                    )
                    .ok_or(CipherError::UserAbort)?,
            );
        }
        Variant::Adfgvx => {
            keys.keyword = Some(ask_keyword(
                prompter,
                &format!("Please enter the keyword {used}:  "),
                None,
            )?);
            keys.permutation = Some(ask_keyword(
                prompter,
                "This cipher also requires a permutation keyword:  ",
                None,
            )?);
        }
        Variant::Affine => {
            keys.multiplier = Some(
                prompter
                    .prompt_key_number(
                        &format!(
                            "Please enter the first key number {used}; it must be one of {SUGGESTED_MULTIPLIERS:?}:  "
                        ),
                        Some(SUGGESTED_MULTIPLIERS.as_slice()),
                        None,
                        None,
                    )
                    .ok_or(CipherError::UserAbort)?,
            );
            keys.offset = Some(
                prompter
                    .prompt_key_number(
                        "Please enter the second key number; it can be any number:  ",
                        None,
                        None,
                        None,
                    )
                    .ok_or(CipherError::UserAbort)?,
            );
        }
        Variant::Alberti => {
            let letter = prompter
                .prompt_keyword(
                    &format!("Please enter the index letter {used}, one of: {MOBILIS}  "),
                    MOBILIS,
                    Some(1),
                    Some(1),
                )
                .ok_or(CipherError::UserAbort)?;
            keys.index_letter = letter.chars().next();
        }
    }
    Ok(keys)
}

fn ask_keyword(
    prompter: &mut dyn Prompter,
    prompt: &str,
    max_len: Option<usize>,
) -> Result<String, CipherError> {
    prompter
        .prompt_keyword(prompt, LETTERS, None, max_len)
        .ok_or(CipherError::UserAbort)
}

/// Asks whether to use intelligent encoding (encrypt only) and a one-time pad.
///
/// When decrypting, intelligent decoding stays enabled because it only acts
/// on text that carries the message marker. Declining to enter a pad code
/// after asking for a pad falls back to no pad if the user confirms.
///
/// # Errors
///
/// Returns [`CipherError::UserAbort`] if the user abandons the pad code and
/// does not want to continue without it.
pub fn gather_options(prompter: &mut dyn Prompter, mode: Mode) -> Result<Options, CipherError> {
    let intelligent = match mode {
        Mode::Encrypt => prompter.prompt_yes_no(
            "Use intelligent encryption to keep spaces, capitals and punctuation?",
        ),
        Mode::Decrypt => true,
    };
    let mut pad = None;
    if prompter.prompt_yes_no("Do you want to use a one-time pad on this cipher?") {
        match prompter.prompt_keyword("Enter a one-time code now:  ", ALPHANUM, None, None) {
            Some(code) => pad = Some(OneTimePad::new(&code)?),
            None => {
                let verb = mode.to_string().to_lowercase();
                if !prompter.prompt_yes_no(&format!(
                    "Do you want to {verb} this message without a one-time pad code?"
                )) {
                    return Err(CipherError::UserAbort);
                }
            }
        }
    }
    Ok(Options { intelligent, pad })
}
