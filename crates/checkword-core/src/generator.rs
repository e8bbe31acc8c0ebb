//! [`MnemonicGenerator`]: the caller-facing API.
//!
//! Holds the active wordlist and search strategy and exposes every
//! operation a UI or CLI needs. The generator owns no other state; changing
//! language swaps the wordlist wholesale. It is `Send + Sync` but has no
//! interior mutability, so concurrent `set_language` calls need external
//! synchronisation.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::codec::{self, Mnemonic};
use crate::constants::{
    entropy_bits_for_words, is_supported_word_count, DEFAULT_WORD_COUNT, PREFIX_WORD_COUNT,
};
use crate::error::{CoreError, EntropyError, ValidationError};
use crate::language::{self, Language};
use crate::search::{self, SearchStrategy};
use crate::seed::{self, Seed};
use crate::strength::{self, StrengthLevel, StrengthScore};
use crate::validator;
use crate::wordlist::Wordlist;

/// Mnemonic operations bound to one language.
#[derive(Debug, Clone, Default)]
pub struct MnemonicGenerator {
    wordlist: Wordlist,
    strategy: SearchStrategy,
}

impl MnemonicGenerator {
    /// A generator for `tag`, falling back to English for unknown tags.
    pub fn new(tag: &str) -> Self {
        Self::with_wordlist(Wordlist::load(tag))
    }

    pub fn with_wordlist(wordlist: Wordlist) -> Self {
        Self {
            wordlist,
            strategy: SearchStrategy::default(),
        }
    }

    /// Use `strategy` for checksum completion.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Tags of every supported language, in display order.
    pub fn supported_languages() -> Vec<&'static str> {
        language::supported_languages()
    }

    pub fn language(&self) -> Language {
        self.wordlist.language()
    }

    /// Switch language (unknown tags select English) and return the one in effect.
    pub fn set_language(&mut self, tag: &str) -> Language {
        self.wordlist = Wordlist::load(tag);
        self.wordlist.language()
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// The active 2048 words in index order.
    pub fn word_list(&self) -> &'static [&'static str] {
        self.wordlist.words()
    }

    /// Load the wordlist for `tag` without changing this generator.
    pub fn load_word_list(tag: &str) -> Wordlist {
        Wordlist::load(tag)
    }

    pub fn validate_word_in_dictionary(&self, word: &str) -> bool {
        self.wordlist.contains(word)
    }

    /// Whether `words` has the length this generator produces.
    pub fn validate_mnemonic_length<S>(&self, words: &[S]) -> bool {
        validator::validate_mnemonic_length(words)
    }

    /// Require exactly [`PREFIX_WORD_COUNT`] words, all in the dictionary.
    fn check_prefix<S: AsRef<str>>(&self, prefix: &[S]) -> Result<(), ValidationError> {
        if prefix.len() != PREFIX_WORD_COUNT {
            return Err(ValidationError::WrongWordCount { got: prefix.len() });
        }
        self.wordlist.indices_of(prefix).map(|_| ())
    }

    /// The checksum word for an 11-word prefix.
    pub fn calculate_checksum<S: AsRef<str>>(
        &self,
        prefix: &[S],
    ) -> Result<&'static str, ValidationError> {
        self.check_prefix(prefix)?;
        search::calculate_checksum(prefix, &self.wordlist, self.strategy)
    }

    /// Complete an 11-word prefix into a validated 12-word mnemonic.
    pub fn generate_from_prefix<S: AsRef<str>>(
        &self,
        prefix: &[S],
    ) -> Result<String, ValidationError> {
        self.check_prefix(prefix)?;
        let mnemonic = search::complete(prefix, &self.wordlist, self.strategy)?;
        let phrase = mnemonic.phrase();
        validator::validate_detailed(&phrase, &self.wordlist)?;
        Ok(phrase)
    }

    /// Every word that completes an 11-word prefix, lowest index first.
    pub fn checksum_candidates<S: AsRef<str>>(
        &self,
        prefix: &[S],
    ) -> Result<Vec<&'static str>, ValidationError> {
        self.check_prefix(prefix)?;
        search::candidates(prefix, &self.wordlist)
    }

    pub fn validate_mnemonic(&self, text: &str) -> bool {
        validator::validate(text, &self.wordlist)
    }

    pub fn validate_mnemonic_detailed(&self, text: &str) -> Result<(), ValidationError> {
        validator::validate_detailed(text, &self.wordlist)
    }

    /// Exactly 12 dictionary words with a matching checksum.
    pub fn validate_word_sequence<S: AsRef<str>>(&self, words: &[S]) -> bool {
        self.validate_mnemonic_length(words)
            && validator::validate_words(words, &self.wordlist).is_ok()
    }

    pub fn calculate_strength_score(&self, text: &str) -> u8 {
        strength::score(text, &self.wordlist)
    }

    pub fn strength(&self, text: &str) -> StrengthScore {
        strength::assess(text, &self.wordlist)
    }

    pub fn strength_level(score: u8) -> StrengthLevel {
        strength::level_of(score)
    }

    /// Entropy size in bits of a valid 12-word mnemonic (128), 0 for
    /// anything else.
    pub fn entropy_bits(&self, text: &str) -> usize {
        match validator::parse(text, &self.wordlist) {
            Ok(m) if m.word_count() == DEFAULT_WORD_COUNT => m.entropy_bits(),
            _ => 0,
        }
    }

    /// The 64-byte seed for a valid mnemonic.
    pub fn mnemonic_to_seed(&self, text: &str, passphrase: &str) -> Result<Seed, CoreError> {
        seed::mnemonic_to_seed(text, passphrase, &self.wordlist)
    }

    /// The entropy of a valid mnemonic as lowercase hex.
    pub fn mnemonic_to_entropy(&self, text: &str) -> Result<String, CoreError> {
        let mnemonic =
            validator::parse(text, &self.wordlist).map_err(CoreError::InvalidMnemonic)?;
        let entropy = Zeroizing::new(mnemonic.to_entropy());
        Ok(hex::encode(entropy.as_slice()))
    }

    pub fn from_entropy(&self, entropy: &[u8]) -> Result<Mnemonic, EntropyError> {
        codec::entropy_to_mnemonic(entropy, &self.wordlist)
    }

    pub fn from_entropy_hex(&self, hex_entropy: &str) -> Result<Mnemonic, EntropyError> {
        let entropy = Zeroizing::new(codec::entropy_from_hex(hex_entropy)?);
        self.from_entropy(&entropy)
    }

    /// A fresh mnemonic from OS randomness.
    pub fn generate_random(&self, word_count: usize) -> Result<Mnemonic, CoreError> {
        if !is_supported_word_count(word_count) {
            return Err(ValidationError::WrongWordCount { got: word_count }.into());
        }
        let mut entropy = Zeroizing::new(vec![0u8; entropy_bits_for_words(word_count) / 8]);
        OsRng.fill_bytes(entropy.as_mut_slice());
        Ok(codec::entropy_to_mnemonic(&entropy, &self.wordlist)?)
    }

    /// A fresh 12-word mnemonic.
    pub fn generate_random_mnemonic(&self) -> Result<String, CoreError> {
        self.generate_random(DEFAULT_WORD_COUNT).map(|m| m.phrase())
    }

    /// A random dictionary word, for filling a single picker slot.
    pub fn random_word(&self) -> &'static str {
        self.wordlist.random_word(&mut OsRng)
    }
}
