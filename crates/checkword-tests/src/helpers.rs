//! Shared fixtures for the scenario and property tests.

use checkword_core::{MnemonicGenerator, Wordlist};

/// The 11-word prefix used throughout the scenario tests.
pub const SAMPLE_PREFIX: [&str; 11] = [
    "abandon", "ability", "able", "about", "above", "absent", "absorb", "abstract", "absurd",
    "abuse", "access",
];

/// Published vector: all-ones entropy, passphrase "TREZOR".
pub const ZOO_PHRASE: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong";

/// `n` copies of `word`.
pub fn repeat_word(word: &str, n: usize) -> Vec<String> {
    vec![word.to_string(); n]
}

/// An English generator with the default strategy.
pub fn english() -> MnemonicGenerator {
    MnemonicGenerator::new("english")
}

/// Dictionary words for `indices` in `wordlist`.
pub fn words_at(wordlist: &Wordlist, indices: &[u16]) -> Vec<&'static str> {
    indices.iter().map(|&i| wordlist.word_at(i)).collect()
}
