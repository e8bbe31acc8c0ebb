//! Mnemonic validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! word count, then dictionary membership of each word, then the checksum.

use zeroize::Zeroizing;

use crate::codec::{indices_checksum_ok, Mnemonic};
use crate::constants::{is_supported_word_count, DEFAULT_WORD_COUNT};
use crate::error::ValidationError;
use crate::wordlist::{normalize_word, Wordlist};

/// Split free text into normalised words, dropping empty tokens.
///
/// # Examples
///
/// ```
/// use checkword_core::validator::split_words;
/// assert_eq!(split_words("  Zoo\tzoo\n "), ["zoo", "zoo"]);
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(normalize_word).collect()
}

/// Validate a word sequence and return the decoded mnemonic.
pub fn validate_words<S: AsRef<str>>(
    words: &[S],
    wordlist: &Wordlist,
) -> Result<Mnemonic, ValidationError> {
    if !is_supported_word_count(words.len()) {
        return Err(ValidationError::WrongWordCount { got: words.len() });
    }
    let indices = Zeroizing::new(wordlist.indices_of(words)?);
    if !indices_checksum_ok(&indices)? {
        return Err(ValidationError::ChecksumMismatch);
    }
    Ok(Mnemonic::from_checked_indices(indices.to_vec(), wordlist.clone()))
}

/// Parse mnemonic text into a checked [`Mnemonic`].
pub fn parse(text: &str, wordlist: &Wordlist) -> Result<Mnemonic, ValidationError> {
    let words = Zeroizing::new(split_words(text));
    validate_words(words.as_slice(), wordlist)
}

/// Validate mnemonic text, reporting why it was rejected.
pub fn validate_detailed(text: &str, wordlist: &Wordlist) -> Result<(), ValidationError> {
    parse(text, wordlist).map(|_| ())
}

/// Whether mnemonic text is a valid mnemonic in `wordlist`'s language.
pub fn validate(text: &str, wordlist: &Wordlist) -> bool {
    validate_detailed(text, wordlist).is_ok()
}

/// Whether `words` has the length this system produces (12).
pub fn validate_mnemonic_length<S>(words: &[S]) -> bool {
    words.len() == DEFAULT_WORD_COUNT
}
