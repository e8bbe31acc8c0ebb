//! End-to-end scenarios through the public checkword-core API.
//!
//! Each test plays a caller flow: complete a prefix, validate the result,
//! score it, derive entropy and seed, switch language.

use checkword_core::codec::entropy_to_mnemonic;
use checkword_core::search::{self, SearchStrategy};
use checkword_core::{CoreError, Language, MnemonicGenerator, ValidationError, Wordlist};
use checkword_tests::helpers::*;

// ---------------------------------------------------------------------------
// Prefix completion
// ---------------------------------------------------------------------------

#[test]
fn sample_prefix_full_flow() {
    let generator = english();

    let checksum = generator.calculate_checksum(&SAMPLE_PREFIX).unwrap();
    assert_eq!(checksum, "ability");

    let phrase = generator.generate_from_prefix(&SAMPLE_PREFIX).unwrap();
    assert_eq!(phrase, format!("{} ability", SAMPLE_PREFIX.join(" ")));
    assert!(generator.validate_mnemonic(&phrase));

    let strength = generator.strength(&phrase);
    assert_eq!(strength.score, 70);
    assert_eq!(strength.level.as_str(), "good");

    assert_eq!(generator.entropy_bits(&phrase), 128);
    let entropy = generator.mnemonic_to_entropy(&phrase).unwrap();
    assert_eq!(entropy.len(), 32);
    let back = generator.from_entropy_hex(&entropy).unwrap();
    assert_eq!(back.phrase(), phrase);
}

#[test]
fn all_abandon_prefix_completes_with_about() {
    let generator = english();
    let prefix = repeat_word("abandon", 11);

    assert_eq!(generator.calculate_checksum(&prefix).unwrap(), "about");

    let candidates = generator.checksum_candidates(&prefix).unwrap();
    assert_eq!(candidates.len(), 128);
    assert_eq!(&candidates[..5], ["about", "actual", "age", "alpha", "angle"]);
}

#[test]
fn every_candidate_validates_and_first_is_chosen() {
    let generator = english();
    let candidates = generator.checksum_candidates(&SAMPLE_PREFIX).unwrap();
    assert_eq!(candidates.first(), Some(&"ability"));
    assert_eq!(candidates.last(), Some(&"wrap"));

    for word in &candidates {
        let phrase = format!("{} {word}", SAMPLE_PREFIX.join(" "));
        assert!(generator.validate_mnemonic(&phrase), "{phrase}");
    }

    // Indices are strictly ascending.
    let wordlist = generator.wordlist();
    let indices: Vec<u16> = candidates.iter().map(|w| wordlist.index_of(w).unwrap()).collect();
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn strategies_agree_on_sample_prefix() {
    let wordlist = Wordlist::english();
    let direct =
        search::calculate_checksum(&SAMPLE_PREFIX, &wordlist, SearchStrategy::Direct).unwrap();
    let scan =
        search::calculate_checksum(&SAMPLE_PREFIX, &wordlist, SearchStrategy::Scan).unwrap();
    assert_eq!(direct, scan);

    let scanning = english().with_strategy(SearchStrategy::Scan);
    assert_eq!(scanning.calculate_checksum(&SAMPLE_PREFIX).unwrap(), direct);
}

#[test]
fn longer_prefixes_complete_at_search_level() {
    let wordlist = Wordlist::english();

    let prefix = repeat_word("abandon", 23);
    assert_eq!(
        search::calculate_checksum(&prefix, &wordlist, SearchStrategy::Direct).unwrap(),
        "art"
    );
    assert_eq!(search::candidates(&prefix, &wordlist).unwrap().len(), 8);

    let prefix = repeat_word("abandon", 14);
    let candidates = search::candidates(&prefix, &wordlist).unwrap();
    assert_eq!(candidates.len(), 64);
    assert_eq!(candidates[0], "address");
}

#[test]
fn generator_insists_on_eleven_words() {
    let generator = english();
    let prefix = repeat_word("abandon", 23);
    assert_eq!(
        generator.calculate_checksum(&prefix),
        Err(ValidationError::WrongWordCount { got: 23 })
    );
    assert_eq!(
        generator.generate_from_prefix(&SAMPLE_PREFIX[..10]),
        Err(ValidationError::WrongWordCount { got: 10 })
    );
}

#[test]
fn prefix_with_unknown_word_reports_position() {
    let generator = english();
    let mut prefix = SAMPLE_PREFIX.map(str::to_string);
    prefix[4] = "bitcoin".to_string();
    assert_eq!(
        generator.calculate_checksum(&prefix),
        Err(ValidationError::WordNotInDictionary {
            index: 4,
            word: "bitcoin".to_string(),
        })
    );
}

#[test]
fn prefix_lookup_ignores_case_and_padding() {
    let generator = english();
    let prefix: Vec<String> = SAMPLE_PREFIX
        .iter()
        .map(|w| format!("  {} ", w.to_uppercase()))
        .collect();
    assert_eq!(generator.calculate_checksum(&prefix).unwrap(), "ability");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn validator_rejections() {
    let generator = english();

    assert!(!generator.validate_mnemonic(""));
    assert!(!generator.validate_mnemonic("invalid mnemonic phrase"));
    assert!(!generator.validate_mnemonic(&repeat_word("abandon", 12).join(" ")));

    assert_eq!(
        generator.validate_mnemonic_detailed(&repeat_word("abandon", 12).join(" ")),
        Err(ValidationError::ChecksumMismatch)
    );
    assert_eq!(
        generator.validate_mnemonic_detailed("abandon abandon"),
        Err(ValidationError::WrongWordCount { got: 2 })
    );
}

#[test]
fn validator_accepts_other_lengths() {
    let generator = english();
    assert!(generator.validate_mnemonic(ZOO_PHRASE));

    let long = entropy_to_mnemonic(&[0u8; 32], generator.wordlist()).unwrap();
    assert_eq!(long.word_count(), 24);
    assert!(generator.validate_mnemonic(&long.phrase()));
    assert!(!generator.validate_word_sequence(&long.words()));
}

#[test]
fn only_twelve_word_mnemonics_are_scored() {
    let generator = english();
    for len in [20, 32] {
        let m = generator.from_entropy(&vec![0x7f; len]).unwrap();
        let phrase = m.phrase();
        assert!(generator.validate_mnemonic(&phrase), "{} words", m.word_count());
        assert_eq!(generator.entropy_bits(&phrase), 0);
        assert_eq!(generator.calculate_strength_score(&phrase), 0);
        // Still a valid mnemonic for entropy and seed purposes.
        assert_eq!(generator.mnemonic_to_entropy(&phrase).unwrap(), "7f".repeat(len));
        assert!(generator.mnemonic_to_seed(&phrase, "").is_ok());
    }
}

#[test]
fn word_sequence_requires_twelve_valid_words() {
    let generator = english();
    let mut words: Vec<&str> = SAMPLE_PREFIX.to_vec();
    assert!(!generator.validate_mnemonic_length(&words));
    words.push("ability");
    assert!(generator.validate_mnemonic_length(&words));
    assert!(generator.validate_word_sequence(&words));

    words[11] = "abandon";
    assert!(!generator.validate_word_sequence(&words));
}

// ---------------------------------------------------------------------------
// Strength
// ---------------------------------------------------------------------------

#[test]
fn strength_rules() {
    let generator = english();

    assert_eq!(generator.calculate_strength_score("not a mnemonic"), 0);
    let about = format!("{} about", repeat_word("abandon", 11).join(" "));
    assert_eq!(generator.calculate_strength_score(&about), 60);

    let legal = "legal winner thank year wave sausage worth useful legal winner thank yellow";
    assert_eq!(generator.calculate_strength_score(legal), 60);

    let ozone = "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic";
    assert_eq!(generator.calculate_strength_score(ozone), 90);
    assert_eq!(MnemonicGenerator::strength_level(90).as_str(), "very_strong");
}

#[test]
fn score_is_bounded_for_generated_mnemonics() {
    let generator = english();
    for _ in 0..20 {
        let phrase = generator.generate_random_mnemonic().unwrap();
        let score = generator.calculate_strength_score(&phrase);
        assert!((50..=100).contains(&score), "{phrase}: {score}");
    }
}

// ---------------------------------------------------------------------------
// Seeds and entropy
// ---------------------------------------------------------------------------

#[test]
fn seed_vectors() {
    let generator = english();

    let seed = generator.mnemonic_to_seed(ZOO_PHRASE, "TREZOR").unwrap();
    assert!(seed.to_hex().starts_with("ac27495480225222079d7be181583751"));
    assert_eq!(seed.as_bytes().len(), 64);

    let about = format!("{} about", repeat_word("abandon", 11).join(" "));
    let seed = generator.mnemonic_to_seed(&about, "").unwrap();
    assert!(seed.to_hex().starts_with("5eb00bbddcf069084889a8ab91555681"));
}

#[test]
fn seed_ignores_input_case_and_spacing() {
    let generator = english();
    let messy = format!("  {}  ", ZOO_PHRASE.to_uppercase().replace(' ', "\t "));
    let a = generator.mnemonic_to_seed(ZOO_PHRASE, "TREZOR").unwrap();
    let b = generator.mnemonic_to_seed(&messy, "TREZOR").unwrap();
    assert_eq!(a, b);
}

#[test]
fn seed_of_invalid_mnemonic_is_rejected() {
    let generator = english();
    let err = generator
        .mnemonic_to_seed(&repeat_word("abandon", 12).join(" "), "")
        .unwrap_err();
    assert_eq!(err, CoreError::InvalidMnemonic(ValidationError::ChecksumMismatch));
    assert_eq!(err.validation(), Some(&ValidationError::ChecksumMismatch));
}

#[test]
fn known_entropy_vectors() {
    let generator = english();
    let m = generator.from_entropy_hex("80808080808080808080808080808080").unwrap();
    assert_eq!(
        m.phrase(),
        "letter advice cage absurd amount doctor acoustic avoid letter advice cage above"
    );
    assert_eq!(
        generator.mnemonic_to_entropy(&m.phrase()).unwrap(),
        "80808080808080808080808080808080"
    );
    assert!(generator.from_entropy_hex("8080").is_err());
    assert!(generator.from_entropy_hex("not hex").is_err());
}

// ---------------------------------------------------------------------------
// Languages
// ---------------------------------------------------------------------------

#[test]
fn language_switching() {
    let mut generator = english();
    assert_eq!(MnemonicGenerator::supported_languages().len(), 8);

    assert_eq!(generator.set_language("spanish"), Language::Spanish);
    assert_eq!(generator.word_list().len(), 2048);
    assert!(!generator.validate_word_in_dictionary("abandon"));
    assert!(generator.validate_word_in_dictionary(generator.word_list()[0]));

    assert_eq!(generator.set_language("klingon"), Language::English);
    assert!(generator.validate_word_in_dictionary("abandon"));
}

#[test]
fn every_language_completes_its_own_prefix() {
    for tag in MnemonicGenerator::supported_languages() {
        let generator = MnemonicGenerator::new(tag);
        let wordlist = generator.wordlist();
        let indices = [3, 97, 412, 800, 1024, 1300, 1500, 1777, 1900, 2000, 2047];
        let prefix = words_at(wordlist, &indices);

        let phrase = generator.generate_from_prefix(&prefix).unwrap();
        assert!(generator.validate_mnemonic(&phrase), "{tag}: {phrase}");
        assert_eq!(generator.strength(&phrase).score, generator.calculate_strength_score(&phrase));

        let scanning = generator.clone().with_strategy(SearchStrategy::Scan);
        assert_eq!(
            scanning.calculate_checksum(&prefix).unwrap(),
            generator.calculate_checksum(&prefix).unwrap(),
            "{tag}"
        );
    }
}

#[test]
fn mnemonic_from_one_language_fails_in_another() {
    let english = english();
    let spanish = MnemonicGenerator::new("spanish");
    let phrase = english.generate_from_prefix(&SAMPLE_PREFIX).unwrap();
    assert!(matches!(
        spanish.validate_mnemonic_detailed(&phrase),
        Err(ValidationError::WordNotInDictionary { index: 0, .. })
    ));
}
