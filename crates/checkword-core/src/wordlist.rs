//! Wordlist registry: word ↔ 11-bit index lookup for one language.
//!
//! A [`Wordlist`] is built once per language and never mutated afterwards;
//! switching language means building (or cloning) a different one. Lookups
//! go through a word → index map so they cost a hash lookup rather than a
//! scan over 2048 entries.
//!
//! Words are compared after [`normalize_word`]: surrounding whitespace is
//! trimmed, the word is lowercased and put into Unicode canonical
//! composition (NFC). Both the dictionary entries and the queried word are
//! normalised, so accented French/Spanish input matches regardless of how
//! it was typed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand::Rng;
use unicode_normalization::UnicodeNormalization;

use crate::constants::WORDLIST_SIZE;
use crate::error::{LanguageError, ValidationError};
use crate::language::Language;

/// Canonical form used for dictionary comparisons.
///
/// # Examples
///
/// ```
/// use checkword_core::wordlist::normalize_word;
/// assert_eq!(normalize_word("  Abandon\n"), "abandon");
/// // "e" + combining acute composes to a single code point.
/// assert_eq!(normalize_word("abe\u{301}iller"), "ab\u{e9}iller");
/// ```
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase().nfc().collect()
}

/// An immutable 2048-word vocabulary with an index map.
///
/// Cheap to clone: the index map is shared.
#[derive(Clone)]
pub struct Wordlist {
    inner: Arc<Inner>,
}

struct Inner {
    language: Language,
    words: &'static [&'static str; WORDLIST_SIZE],
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Build the wordlist for `language`.
    pub fn new(language: Language) -> Self {
        let words = language.words();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (normalize_word(w), i as u16))
            .collect();
        Self {
            inner: Arc::new(Inner {
                language,
                words,
                index,
            }),
        }
    }

    /// The English wordlist.
    pub fn english() -> Self {
        Self::new(Language::English)
    }

    /// Build the wordlist for a language tag, failing on unknown tags.
    pub fn try_load(tag: &str) -> Result<Self, LanguageError> {
        Ok(Self::new(tag.parse()?))
    }

    /// Build the wordlist for a language tag, falling back to English.
    ///
    /// An unrecognised tag never leaves the caller without words: the
    /// English list is returned and [`Wordlist::language`] reports
    /// [`Language::English`].
    pub fn load(tag: &str) -> Self {
        match Self::try_load(tag) {
            Ok(list) => list,
            Err(e) => {
                tracing::debug!("{e}; falling back to english");
                Self::english()
            }
        }
    }

    pub fn language(&self) -> Language {
        self.inner.language
    }

    /// All words in index order.
    pub fn words(&self) -> &'static [&'static str; WORDLIST_SIZE] {
        self.inner.words
    }

    pub fn len(&self) -> usize {
        self.inner.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.words.is_empty()
    }

    /// Index of `word`, compared in normalised form.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.inner.index.get(&normalize_word(word)).copied()
    }

    /// Whether `word` (in any case/spacing/composition) is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// The word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2048`. Values produced by the codec are always
    /// 11-bit and therefore in range; use [`Wordlist::get`] for untrusted input.
    pub fn word_at(&self, index: u16) -> &'static str {
        self.inner.words[usize::from(index)]
    }

    /// The word at `index`, or `None` when out of range.
    pub fn get(&self, index: u16) -> Option<&'static str> {
        self.inner.words.get(usize::from(index)).copied()
    }

    /// Resolve every word to its index, failing on the first unknown word.
    pub fn indices_of<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u16>, ValidationError> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                self.index_of(w.as_ref())
                    .ok_or_else(|| ValidationError::WordNotInDictionary {
                        index: i,
                        word: w.as_ref().to_string(),
                    })
            })
            .collect()
    }

    /// A uniformly random word, for word pickers.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.inner.words[rng.gen_range(0..WORDLIST_SIZE)]
    }
}

impl PartialEq for Wordlist {
    fn eq(&self, other: &Self) -> bool {
        self.language() == other.language()
    }
}

impl Eq for Wordlist {}

impl Default for Wordlist {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.inner.language)
            .field("len", &self.len())
            .finish()
    }
}

/// Load the wordlist for `tag`, silently falling back to English.
pub fn load_word_list(tag: &str) -> Wordlist {
    Wordlist::load(tag)
}

/// Whether `word` belongs to `wordlist`.
pub fn validate_word_in_dictionary(word: &str, wordlist: &Wordlist) -> bool {
    wordlist.contains(word)
}
