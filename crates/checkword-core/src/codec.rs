//! Entropy ↔ mnemonic conversion.
//!
//! The entropy bytes are read MSB-first into one continuous bitstream, the
//! checksum (leading `ENT / 32` bits of `SHA-256(entropy)`) is appended, and
//! the stream is cut into 11-bit groups, each naming one wordlist entry.
//! Decoding runs the same stream backwards and splits it again into entropy
//! and checksum bits.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::constants::{
    checksum_len, entropy_bits_for_words, is_supported_entropy_bits, is_supported_word_count,
    BITS_PER_WORD, WORD_MASK,
};
use crate::error::{EntropyError, ValidationError};
use crate::language::Language;
use crate::wordlist::Wordlist;

/// Checksum bits, right-aligned in `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    pub value: u8,
    /// Number of meaningful bits (4 for 128-bit entropy, 8 for 256-bit).
    pub len: u8,
}

/// The leading `ENT / 32` bits of `SHA-256(entropy)`.
///
/// # Examples
///
/// ```
/// use checkword_core::codec::checksum_bits_of;
/// let cs = checksum_bits_of(&[0u8; 16]).unwrap();
/// assert_eq!((cs.value, cs.len), (0b0011, 4));
/// ```
pub fn checksum_bits_of(entropy: &[u8]) -> Result<Checksum, EntropyError> {
    let bits = entropy.len() * 8;
    if !is_supported_entropy_bits(bits) {
        return Err(EntropyError::InvalidLength { bits });
    }
    let len = checksum_len(bits) as u8;
    let digest = Sha256::digest(entropy);
    Ok(Checksum {
        value: digest[0] >> (8 - len),
        len,
    })
}

/// Accumulates bits MSB-first and emits complete 11-bit groups.
struct WordPacker {
    acc: u32,
    pending: u32,
    out: Vec<u16>,
}

impl WordPacker {
    fn with_capacity(words: usize) -> Self {
        Self {
            acc: 0,
            pending: 0,
            out: Vec::with_capacity(words),
        }
    }

    /// Append the low `width` bits of `value` (`width <= 8`).
    fn push(&mut self, value: u32, width: u32) {
        let group = BITS_PER_WORD as u32;
        self.acc = (self.acc << width) | (value & ((1 << width) - 1));
        self.pending += width;
        while self.pending >= group {
            self.pending -= group;
            self.out.push(((self.acc >> self.pending) & WORD_MASK) as u16);
        }
        self.acc &= (1 << self.pending) - 1;
    }
}

impl Drop for WordPacker {
    fn drop(&mut self) {
        self.acc.zeroize();
    }
}

/// Encode entropy (plus its checksum) as 11-bit word indices.
pub fn entropy_to_indices(entropy: &[u8]) -> Result<Vec<u16>, EntropyError> {
    let checksum = checksum_bits_of(entropy)?;
    let words = (entropy.len() * 8 + checksum.len as usize) / BITS_PER_WORD;
    let mut packer = WordPacker::with_capacity(words);
    for &byte in entropy {
        packer.push(u32::from(byte), 8);
    }
    packer.push(u32::from(checksum.value), u32::from(checksum.len));
    Ok(std::mem::take(&mut packer.out))
}

/// Split word indices back into entropy bytes and the embedded checksum.
///
/// No checksum verification happens here; compare the returned
/// [`Checksum`] against [`checksum_bits_of`] for that.
pub fn indices_to_entropy(indices: &[u16]) -> Result<(Vec<u8>, Checksum), ValidationError> {
    if !is_supported_word_count(indices.len()) {
        return Err(ValidationError::WrongWordCount { got: indices.len() });
    }
    let entropy_bits = entropy_bits_for_words(indices.len());
    let entropy_len = entropy_bits / 8;
    let cs_len = checksum_len(entropy_bits) as u8;

    let mut bytes = Zeroizing::new(Vec::with_capacity(entropy_len + 1));
    let mut acc: u32 = 0;
    let mut pending: u32 = 0;
    for &index in indices {
        acc = (acc << BITS_PER_WORD) | (u32::from(index) & WORD_MASK);
        pending += BITS_PER_WORD as u32;
        while pending >= 8 {
            pending -= 8;
            bytes.push((acc >> pending) as u8);
        }
        acc &= (1 << pending) - 1;
    }

    // Whatever follows the entropy bytes, whole bytes first, then the
    // leftover bits still in the accumulator, is the checksum.
    let mut value: u32 = 0;
    for &b in &bytes[entropy_len..] {
        value = (value << 8) | u32::from(b);
    }
    value = (value << pending) | acc;

    let entropy = bytes[..entropy_len].to_vec();
    Ok((
        entropy,
        Checksum {
            value: value as u8,
            len: cs_len,
        },
    ))
}

/// Whether `indices` carry a checksum that matches their entropy.
pub fn indices_checksum_ok(indices: &[u16]) -> Result<bool, ValidationError> {
    let (entropy, embedded) = indices_to_entropy(indices)?;
    let entropy = Zeroizing::new(entropy);
    let expected = checksum_bits_of(&entropy)
        .map_err(|_| ValidationError::WrongWordCount { got: indices.len() })?;
    Ok(expected == embedded)
}

/// An encoded mnemonic: word indices into one language's wordlist.
///
/// Values of this type always carry a matching checksum; they are produced
/// by [`entropy_to_mnemonic`] or by the validator. Indices are zeroized on
/// drop and `Debug` output is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    indices: Vec<u16>,
    #[zeroize(skip)]
    wordlist: Wordlist,
}

impl Mnemonic {
    /// Wrap indices already known to form a valid mnemonic.
    pub(crate) fn from_checked_indices(indices: Vec<u16>, wordlist: Wordlist) -> Self {
        Self { indices, wordlist }
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    pub fn language(&self) -> Language {
        self.wordlist.language()
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// The words in order, as they appear in the wordlist.
    pub fn words(&self) -> Vec<&'static str> {
        self.indices.iter().map(|&i| self.wordlist.word_at(i)).collect()
    }

    /// The final word, which carries the checksum bits.
    pub fn checksum_word(&self) -> Option<&'static str> {
        self.indices.last().map(|&i| self.wordlist.word_at(i))
    }

    /// Words joined by single spaces.
    pub fn phrase(&self) -> String {
        self.words().join(" ")
    }

    /// Entropy size in bits.
    pub fn entropy_bits(&self) -> usize {
        entropy_bits_for_words(self.indices.len())
    }

    /// Recover the encoded entropy.
    pub fn to_entropy(&self) -> Vec<u8> {
        let decoded = indices_to_entropy(&self.indices);
        debug_assert!(
            decoded.is_ok(),
            "mnemonic holds {} indices, not a supported word count",
            self.indices.len()
        );
        decoded.map(|(entropy, _)| entropy).unwrap_or_default()
    }
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.indices == other.indices && self.wordlist == other.wordlist
    }
}

impl Eq for Mnemonic {}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language())
            .field("word_count", &self.word_count())
            .field("words", &"[REDACTED]")
            .finish()
    }
}

/// Encode entropy as a mnemonic in `wordlist`'s language.
///
/// # Examples
///
/// ```
/// use checkword_core::{codec::entropy_to_mnemonic, Wordlist};
/// let m = entropy_to_mnemonic(&[0u8; 16], &Wordlist::english()).unwrap();
/// assert!(m.phrase().ends_with("abandon about"));
/// ```
pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &Wordlist) -> Result<Mnemonic, EntropyError> {
    let indices = entropy_to_indices(entropy)?;
    Ok(Mnemonic::from_checked_indices(indices, wordlist.clone()))
}

/// Decode words back to the entropy they encode.
///
/// Fails on an unsupported word count, then on the first word missing from
/// `wordlist`. The checksum is not verified.
pub fn mnemonic_to_entropy<S: AsRef<str>>(
    words: &[S],
    wordlist: &Wordlist,
) -> Result<Vec<u8>, ValidationError> {
    if !is_supported_word_count(words.len()) {
        return Err(ValidationError::WrongWordCount { got: words.len() });
    }
    let indices = Zeroizing::new(wordlist.indices_of(words)?);
    let (entropy, _) = indices_to_entropy(&indices)?;
    Ok(entropy)
}

/// Parse lowercase or uppercase hex into entropy bytes of a supported size.
pub fn entropy_from_hex(s: &str) -> Result<Vec<u8>, EntropyError> {
    let bytes = hex::decode(s.trim()).map_err(|e| EntropyError::InvalidHex(e.to_string()))?;
    if !is_supported_entropy_bits(bytes.len() * 8) {
        return Err(EntropyError::InvalidLength {
            bits: bytes.len() * 8,
        });
    }
    Ok(bytes)
}
