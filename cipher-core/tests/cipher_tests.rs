#![allow(missing_docs)]
use cipher_core::ciphers::{
    Adfgvx, Affine, Alberti, Atbash, Bifid, Caesar, Hill, Keyword, PolybiusSquare, Transform,
    Transposition,
};
use cipher_core::error::CipherError;
use cipher_core::random::{RngSource, ScriptedSource};
use proptest::prelude::*;

fn encode(cipher: &dyn Transform, text: &str) -> String {
    cipher
        .encode(text, &mut ScriptedSource::new([0, 5]))
        .unwrap()
}

#[test]
fn test_caesar_shifts_by_three_and_wraps_into_digits() {
    assert_eq!(encode(&Caesar, "HELLO"), "KHOOR");
    assert_eq!(encode(&Caesar, "XYZ789"), "012ABC");
    assert_eq!(Caesar.decode("012ABC").unwrap(), "XYZ789");
}

#[test]
fn test_atbash_mirrors_the_alphanumeric_alphabet() {
    assert_eq!(encode(&Atbash, "AZ0"), "9KJ");
    assert_eq!(encode(&Atbash, "HELLO"), "25YYV");
    assert_eq!(Atbash.decode("25YYV").unwrap(), "HELLO");
}

#[test]
fn test_affine_known_vector_and_inverse() {
    let affine = Affine::new(5, 8).unwrap();
    assert_eq!(affine.inverse(), 29);
    assert_eq!(encode(&affine, "AB"), "IN");
    assert_eq!(affine.decode("IN").unwrap(), "AB");
}

#[test]
fn test_affine_rejects_multiplier_sharing_a_factor_with_36() {
    for multiplier in [0, 2, 3, 4, 6, 9, 12, 18, 34] {
        assert!(matches!(
            Affine::new(multiplier, 1),
            Err(CipherError::InvalidKey(_))
        ));
    }
}

#[test]
fn test_affine_accepts_negative_key_numbers() {
    let affine = Affine::new(-1, -3).unwrap();
    assert_eq!(affine.multiplier(), 35);
    let ciphertext = encode(&affine, "NEGATIVE1");
    assert_eq!(affine.decode(&ciphertext).unwrap(), "NEGATIVE1");
}

#[test]
fn test_keyword_substitutes_through_keyed_alphabet() {
    let cipher = Keyword::new("key").unwrap();
    assert_eq!(cipher.keyword(), "KEY");
    assert_eq!(encode(&cipher, "ABCD"), "KEYA");
    assert_eq!(encode(&cipher, "123"), "123");
    assert_eq!(cipher.decode("KEYA").unwrap(), "ABCD");
}

#[test]
fn test_keyword_rejects_non_letters() {
    assert!(matches!(Keyword::new("KEY1"), Err(CipherError::InvalidKey(_))));
    assert!(matches!(Bifid::new("BI FID"), Err(CipherError::InvalidKey(_))));
}

#[test]
fn test_polybius_emits_coordinates() {
    assert_eq!(encode(&PolybiusSquare, "A1"), "1154");
    assert_eq!(encode(&PolybiusSquare, "Z"), "52");
    assert_eq!(PolybiusSquare.decode("1154").unwrap(), "A1");
}

#[test]
fn test_polybius_rejects_malformed_ciphertext() {
    assert!(matches!(
        PolybiusSquare.decode("115"),
        Err(CipherError::InvalidCiphertext(_))
    ));
    assert!(matches!(
        PolybiusSquare.decode("17"),
        Err(CipherError::InvalidCiphertext(_))
    ));
    assert_eq!(PolybiusSquare.normalize_ciphertext("11 54\n52"), "115452");
}

#[test]
fn test_bifid_fractionates_coordinates() {
    let bifid = Bifid::new("").unwrap();
    assert_eq!(encode(&bifid, "AH"), "BB");
    assert_eq!(bifid.decode("BB").unwrap(), "AH");
}

#[test]
fn test_transposition_writes_boustrophedon_rows() {
    assert_eq!(encode(&Transposition, "ABCDEFGHI"), "ACEGIHFDB");
    assert_eq!(Transposition.decode("ACEGIHFDB").unwrap(), "ABCDEFGHI");
}

#[test]
fn test_transposition_leaves_short_text_alone() {
    assert_eq!(encode(&Transposition, "HELLO"), "HELLO");
    assert_eq!(Transposition.decode("HELLO").unwrap(), "HELLO");
}

#[test]
fn test_hill_known_vector() {
    let hill = Hill::new("BAD").unwrap();
    assert_eq!(encode(&hill, "ABC"), "GFO");
    assert_eq!(hill.decode("GFO").unwrap(), "ABC");
}

#[test]
fn test_hill_pads_to_full_blocks_and_strips_padding() {
    let hill = Hill::new("BAD").unwrap();
    let ciphertext = encode(&hill, "A");
    assert_eq!(ciphertext.len(), 3);
    assert_eq!(hill.decode(&ciphertext).unwrap(), "A");
}

#[test]
fn test_hill_rejects_singular_keyword() {
    assert!(matches!(Hill::new("AAA"), Err(CipherError::InvalidKey(_))));
    assert!(matches!(Hill::new(""), Err(CipherError::InvalidKey(_))));
}

#[test]
fn test_hill_rejects_partial_block() {
    let hill = Hill::new("BAD").unwrap();
    assert!(matches!(
        hill.decode("GF"),
        Err(CipherError::InvalidCiphertext(_))
    ));
}

#[test]
fn test_adfgvx_single_symbol() {
    let adfgvx = Adfgvx::new("", "BA").unwrap();
    assert_eq!(adfgvx.column_order(), &[1, 0]);
    assert_eq!(encode(&adfgvx, "B"), "FA");
    assert_eq!(adfgvx.decode("FA").unwrap(), "B");
}

#[test]
fn test_adfgvx_drops_null_padding() {
    let adfgvx = Adfgvx::new("", "CAB").unwrap();
    assert_eq!(encode(&adfgvx, "1"), "DVA");
    assert_eq!(adfgvx.decode("DVA").unwrap(), "1");
}

#[test]
fn test_adfgvx_square_places_digits_after_letters() {
    let adfgvx = Adfgvx::new("PRIVACY", "GERMAN").unwrap();
    assert!(adfgvx.square().to_string().starts_with("PRI9VA1C3Y"));
    assert_eq!(adfgvx.square().len(), 36);
}

#[test]
fn test_adfgvx_round_trips_messages() {
    let adfgvx = Adfgvx::new("PRIVACY", "GERMAN").unwrap();
    for message in ["ATTACKAT1200AM", "X", "RETREAT", "HOLD2NDLINE"] {
        let ciphertext = encode(&adfgvx, message);
        assert_eq!(ciphertext.len() % 6, 0);
        assert_eq!(adfgvx.decode(&ciphertext).unwrap(), message);
    }
}

#[test]
fn test_adfgvx_final_null_bigram_is_lost() {
    // 'S' sits at row V, column V of the plain square, so its bigram
    // looks exactly like two padding nulls.
    let adfgvx = Adfgvx::new("", "GERMAN").unwrap();
    assert_eq!(adfgvx.square().symbol(28), 'S');
    assert_eq!(encode(&adfgvx, "AS"), "VAAVVV");
    assert_eq!(encode(&adfgvx, "A"), "VAAVVV");
    assert_eq!(adfgvx.decode("VAAVVV").unwrap(), "A");
}

#[test]
fn test_adfgvx_rejects_foreign_symbols_and_bad_length() {
    let adfgvx = Adfgvx::new("", "BA").unwrap();
    assert!(matches!(
        adfgvx.decode("FAB"),
        Err(CipherError::InvalidCiphertext(_))
    ));
    assert!(matches!(
        adfgvx.decode("FB"),
        Err(CipherError::InvalidCiphertext(_))
    ));
    assert!(Adfgvx::new("KEY", "").is_err());
}

#[test]
fn test_alberti_follows_scripted_rotor_schedule() {
    let alberti = Alberti::new('G').unwrap();
    assert_eq!(alberti.index_letter(), 'g');

    // Key 0 for five symbols, then key 2.
    let mut rng = ScriptedSource::new([0, 5, 2, 5]);
    let ciphertext = alberti.encode("ABCDEF", &mut rng).unwrap();
    assert_eq!(ciphertext, "AgklnpCv");
    assert_eq!(alberti.decode(&ciphertext).unwrap(), "ABCDEF");
}

#[test]
fn test_alberti_escapes_symbols_missing_from_outer_disk() {
    let alberti = Alberti::new('k').unwrap();
    let ciphertext = alberti
        .encode("H", &mut ScriptedSource::new([0, 5]))
        .unwrap();
    assert_eq!(ciphertext, "Aev");
    assert_eq!(alberti.decode(&ciphertext).unwrap(), "H");
}

#[test]
fn test_alberti_rejects_bad_index_letter_and_ciphertext() {
    assert!(matches!(Alberti::new('w'), Err(CipherError::InvalidKey(_))));

    let alberti = Alberti::new('g').unwrap();
    assert!(matches!(
        alberti.decode("gk"),
        Err(CipherError::InvalidCiphertext(_))
    ));
    assert!(matches!(
        alberti.decode("Aw"),
        Err(CipherError::InvalidCiphertext(_))
    ));
    assert_eq!(alberti.normalize_ciphertext("Ag k-l!"), "Agkl");
}

#[test]
fn test_plaintext_outside_domain_is_rejected() {
    assert_eq!(
        Caesar.encode("AB-", &mut ScriptedSource::default()),
        Err(CipherError::InvalidSymbol('-'))
    );
}

fn round_trips(cipher: &dyn Transform, text: &str, seed: u64) -> bool {
    let mut rng = RngSource::seeded(seed);
    let ciphertext = cipher.encode(text, &mut rng).unwrap();
    let normalized = cipher.normalize_ciphertext(&ciphertext);
    cipher.decode(&normalized).unwrap() == text
}

proptest! {
    #[test]
    fn substitution_ciphers_round_trip(text in "[A-Z0-9]{0,40}") {
        prop_assert!(round_trips(&Caesar, &text, 0));
        prop_assert!(round_trips(&Atbash, &text, 0));
        prop_assert!(round_trips(&Affine::new(11, 20).unwrap(), &text, 0));
        prop_assert!(round_trips(&Keyword::new("ZEBRAS").unwrap(), &text, 0));
        prop_assert!(round_trips(&PolybiusSquare, &text, 0));
    }

    #[test]
    fn fractionating_ciphers_round_trip(text in "[A-Z0-9]{0,40}") {
        prop_assert!(round_trips(&Bifid::new("PLAYFAIR").unwrap(), &text, 0));
        prop_assert!(round_trips(&Hill::new("BAD").unwrap(), &text, 0));
        prop_assert!(round_trips(&Transposition, &text, 0));
    }

    #[test]
    fn adfgvx_round_trips_unless_last_symbol_is_null_bigram(
        text in "[A-Z0-9]{0,40}",
        keyword in "[A-Z]{0,8}",
        permutation in "[A-Z]{1,8}",
    ) {
        let adfgvx = Adfgvx::new(&keyword, &permutation).unwrap();
        prop_assume!(!text.ends_with(adfgvx.square().symbol(28)));
        prop_assert!(round_trips(&adfgvx, &text, 0));
    }

    #[test]
    fn alberti_round_trips_any_schedule(text in "[A-Z0-9]{0,60}", seed in any::<u64>()) {
        prop_assert!(round_trips(&Alberti::new('m').unwrap(), &text, seed));
    }
}
