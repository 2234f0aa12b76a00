#![allow(missing_docs)]
use cipher_core::ciphers::Caesar;
use cipher_core::dispatch::{
    Cipher, KeyMaterial, Mode, Options, Request, Response, Variant, process,
};
use cipher_core::error::CipherError;
use cipher_core::pad::OneTimePad;
use cipher_core::pipeline;
use cipher_core::prompt::{Prompter, gather_key_material, gather_options};
use cipher_core::random::{RngSource, ScriptedSource};
use std::collections::VecDeque;

/// Answers prompts from a fixed script and records every notification.
#[derive(Default)]
struct ScriptedPrompter {
    replies: VecDeque<&'static str>,
    answers: VecDeque<bool>,
    notices: Vec<String>,
}

impl ScriptedPrompter {
    fn new(replies: &[&'static str], answers: &[bool]) -> Self {
        Self {
            replies: replies.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
            notices: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_text(&mut self, _prompt: &str) -> String {
        self.replies.pop_front().unwrap_or_default().to_string()
    }

    fn prompt_yes_no(&mut self, _prompt: &str) -> bool {
        self.answers.pop_front().unwrap_or(true)
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[test]
fn test_pipeline_round_trip_with_pad_and_intelligent_encoding() {
    let options = Options {
        intelligent: true,
        pad: Some(OneTimePad::new("KEY").unwrap()),
    };
    let text = "Hello, world!";
    let mut rng = ScriptedSource::new([0]);

    let ciphertext = pipeline::encrypt(&Caesar, text, &options, &mut rng).unwrap();
    assert!(ciphertext.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(pipeline::decrypt(&Caesar, &ciphertext, &options).unwrap(), text);
}

#[test]
fn test_pipeline_without_options_normalizes_plaintext() {
    let options = Options::default();
    let mut rng = ScriptedSource::default();
    let ciphertext = pipeline::encrypt(&Caesar, "hello, world", &options, &mut rng).unwrap();
    assert_eq!(ciphertext, "KHOORZRUOG");
    assert_eq!(
        pipeline::decrypt(&Caesar, "khoor zruog", &options).unwrap(),
        "HELLOWORLD"
    );
}

#[test]
fn test_empty_pad_code_is_identity() {
    let pad = OneTimePad::new("").unwrap();
    assert!(pad.is_identity());
    assert_eq!(pad.mask("ABC").unwrap(), "ABC");
    assert!(OneTimePad::new("A-B").is_err());
}

#[test]
fn test_pad_shifts_cycle_over_text() {
    let pad = OneTimePad::new("b1").unwrap();
    assert_eq!(pad.shifts(), &[1, 27]);
    assert_eq!(pad.mask("AAAA").unwrap(), "B1B1");
    assert_eq!(pad.unmask("B1B1").unwrap(), "AAAA");
}

#[test]
fn test_every_variant_round_trips_through_requests() {
    let keys = KeyMaterial {
        keyword: Some("SECRET".to_string()),
        permutation: Some("GERMAN".to_string()),
        multiplier: Some(7),
        offset: Some(3),
        index_letter: Some('k'),
    };
    let message = "Meet me at 10, by the old mill.";
    for variant in Variant::ALL {
        let options = Options {
            intelligent: true,
            pad: Some(OneTimePad::new("PAD9").unwrap()),
        };
        let mut rng = RngSource::seeded(42);
        let encrypt =
            Request::new(variant, Mode::Encrypt, message, &keys, options.clone()).unwrap();
        let encrypted = process(&encrypt, &mut rng);
        assert!(encrypted.is_success(), "{variant}: {:?}", encrypted.diagnostic);

        let decrypt =
            Request::new(variant, Mode::Decrypt, encrypted.output, &keys, options).unwrap();
        let decrypted = process(&decrypt, &mut rng);
        assert_eq!(decrypted.output, message, "{variant}");
    }
}

#[test]
fn test_process_reports_failure_as_diagnostic() {
    let request = Request::new(
        Variant::Polybius,
        Mode::Decrypt,
        "115",
        &KeyMaterial::default(),
        Options::default(),
    )
    .unwrap();
    let response = process(&request, &mut ScriptedSource::default());
    assert!(!response.is_success());
    assert!(response.output.is_empty());
    assert!(
        response
            .diagnostic
            .as_deref()
            .is_some_and(|d| d.starts_with("invalid ciphertext"))
    );
}

#[test]
fn test_request_requires_key_material() {
    let missing = Request::new(
        Variant::Affine,
        Mode::Encrypt,
        "text",
        &KeyMaterial::default(),
        Options::default(),
    );
    assert!(matches!(missing, Err(CipherError::InvalidKey(_))));

    let keys = KeyMaterial {
        keyword: Some("AAA".to_string()),
        ..KeyMaterial::default()
    };
    assert!(matches!(
        Cipher::build(Variant::Hill, &keys),
        Err(CipherError::InvalidKey(_))
    ));
}

#[test]
fn test_variant_parses_names_and_keystrokes() {
    assert_eq!("caesar".parse::<Variant>().unwrap(), Variant::Caesar);
    assert_eq!("Polybius Square".parse::<Variant>().unwrap(), Variant::Polybius);
    assert_eq!("polybius".parse::<Variant>().unwrap(), Variant::Polybius);
    assert_eq!("i".parse::<Variant>().unwrap(), Variant::Hill);
    assert_eq!("ADFGVX".parse::<Variant>().unwrap(), Variant::Adfgvx);
    assert!(matches!(
        "vigenere".parse::<Variant>(),
        Err(CipherError::UnknownVariant(_))
    ));
}

#[test]
fn test_keystrokes_are_unique() {
    let mut keys: Vec<char> = Variant::ALL.iter().map(|v| v.keystroke()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Variant::ALL.len());
}

#[test]
fn test_response_serializes_to_json() {
    let response = Response {
        variant: Variant::Polybius,
        mode: Mode::Encrypt,
        output: "1154".to_string(),
        diagnostic: None,
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["variant"], "polybius");
    assert_eq!(json["mode"], "encrypt");
    assert_eq!(json["output"], "1154");

    let back: Response = serde_json::from_value(json).unwrap();
    assert_eq!(back, response);
}

#[test]
fn test_gather_key_material_for_adfgvx() {
    let mut prompter = ScriptedPrompter::new(&["privacy", "ger man"], &[]);
    let keys = gather_key_material(&mut prompter, Variant::Adfgvx, Mode::Encrypt).unwrap();
    assert_eq!(keys.keyword.as_deref(), Some("PRIVACY"));
    assert_eq!(keys.permutation.as_deref(), Some("GERMAN"));
}

#[test]
fn test_gather_key_material_reprompts_until_valid() {
    // Not a number, not a suggested multiplier, then valid; offset may be negative.
    let mut prompter = ScriptedPrompter::new(&["five", "6", "5", "-4"], &[]);
    let keys = gather_key_material(&mut prompter, Variant::Affine, Mode::Decrypt).unwrap();
    assert_eq!(keys.multiplier, Some(5));
    assert_eq!(keys.offset, Some(-4));
    assert_eq!(prompter.notices.len(), 2);
}

#[test]
fn test_gather_key_material_rejects_forbidden_keyword_characters() {
    let mut prompter = ScriptedPrompter::new(&["key1", "key"], &[]);
    let keys = gather_key_material(&mut prompter, Variant::Keyword, Mode::Encrypt).unwrap();
    assert_eq!(keys.keyword.as_deref(), Some("KEY"));
    assert_eq!(
        prompter.notices,
        vec!["Sorry, your entry includes forbidden characters.".to_string()]
    );
}

#[test]
fn test_gather_key_material_limits_hill_keyword_length() {
    let mut prompter = ScriptedPrompter::new(&["ABCDEFGHIJ", "GYBNQKURP"], &[]);
    let keys = gather_key_material(&mut prompter, Variant::Hill, Mode::Encrypt).unwrap();
    assert_eq!(keys.keyword.as_deref(), Some("GYBNQKURP"));
    assert_eq!(prompter.notices, vec!["Sorry, your entry is too long.".to_string()]);
}

#[test]
fn test_gather_key_material_hill_keyword_takes_digits_and_dash() {
    let mut prompter = ScriptedPrompter::new(&["gybnq-1rp"], &[]);
    let keys = gather_key_material(&mut prompter, Variant::Hill, Mode::Encrypt).unwrap();
    assert_eq!(keys.keyword.as_deref(), Some("GYBNQ-1RP"));
    assert!(prompter.notices.is_empty());
    assert!(Cipher::build(Variant::Hill, &keys).is_ok());
}

#[test]
fn test_gather_key_material_alberti_index_letter() {
    let mut prompter = ScriptedPrompter::new(&["ab", "w", "k"], &[]);
    let keys = gather_key_material(&mut prompter, Variant::Alberti, Mode::Encrypt).unwrap();
    assert_eq!(keys.index_letter, Some('K'));
    assert!(Cipher::build(Variant::Alberti, &keys).is_ok());
}

#[test]
fn test_empty_reply_can_abort() {
    let mut prompter = ScriptedPrompter::new(&[""], &[true]);
    let result = gather_key_material(&mut prompter, Variant::Bifid, Mode::Encrypt);
    assert_eq!(result, Err(CipherError::UserAbort));
    assert!(result.unwrap_err().is_abort());
}

#[test]
fn test_gather_options_with_pad() {
    // Intelligent: yes; pad: yes.
    let mut prompter = ScriptedPrompter::new(&["code 42"], &[true, true]);
    let options = gather_options(&mut prompter, Mode::Encrypt).unwrap();
    assert!(options.intelligent);
    assert_eq!(options.pad, Some(OneTimePad::new("CODE42").unwrap()));
}

#[test]
fn test_gather_options_decrypt_keeps_intelligent_decoding() {
    // Pad: no.
    let mut prompter = ScriptedPrompter::new(&[], &[false]);
    let options = gather_options(&mut prompter, Mode::Decrypt).unwrap();
    assert!(options.intelligent);
    assert!(options.pad.is_none());
}

#[test]
fn test_gather_options_abandoned_pad_code() {
    // Pad: yes; empty code; abort: yes; continue without pad: yes.
    let mut prompter = ScriptedPrompter::new(&[""], &[false, true, true, true]);
    let options = gather_options(&mut prompter, Mode::Encrypt).unwrap();
    assert!(!options.intelligent);
    assert!(options.pad.is_none());

    // Same, but refusing to continue without the pad.
    let mut prompter = ScriptedPrompter::new(&[""], &[false, true, true, false]);
    assert_eq!(
        gather_options(&mut prompter, Mode::Encrypt),
        Err(CipherError::UserAbort)
    );
}
