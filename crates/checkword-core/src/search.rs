//! Checksum completion: find the final word for an `N-1` word prefix.
//!
//! The final word of an `N`-word mnemonic holds `11 - CS` entropy bits
//! followed by `CS` checksum bits (for 12 words: 7 free bits, 4 checksum
//! bits). Every setting of the free bits yields one valid final word, so a
//! 12-word prefix always admits exactly 128 completions. The completion
//! returned is the one with the lowest wordlist index.
//!
//! Two strategies produce that word:
//!
//! - [`SearchStrategy::Direct`] zeroes the free bits, hashes the resulting
//!   entropy and uses the checksum bits as the word index. One hash.
//! - [`SearchStrategy::Scan`] tries all 2048 words in index order and keeps
//!   the first whose checksum verifies. Up to 2048 hashes.
//!
//! The lowest valid index always has its free bits zero, so both agree. The
//! direct result is re-verified and falls back to a scan if verification
//! ever fails.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::codec::{checksum_bits_of, indices_checksum_ok, indices_to_entropy, Mnemonic};
use crate::constants::{is_supported_word_count, WORDLIST_SIZE};
use crate::error::ValidationError;
use crate::wordlist::Wordlist;

/// How the final word is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Construct the lowest valid word from the prefix bits.
    #[default]
    Direct,
    /// Try every dictionary word in ascending index order.
    Scan,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => f.write_str("direct"),
            Self::Scan => f.write_str("scan"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "scan" => Ok(Self::Scan),
            other => Err(format!("unknown search strategy: {other}")),
        }
    }
}

/// Resolve a prefix to word indices, checking its length first.
///
/// The prefix must be one word short of a supported mnemonic length.
pub fn resolve_prefix<S: AsRef<str>>(
    prefix: &[S],
    wordlist: &Wordlist,
) -> Result<Zeroizing<Vec<u16>>, ValidationError> {
    if !is_supported_word_count(prefix.len() + 1) {
        return Err(ValidationError::WrongWordCount { got: prefix.len() });
    }
    Ok(Zeroizing::new(wordlist.indices_of(prefix)?))
}

fn completes(prefix: &[u16], candidate: u16) -> bool {
    let mut full = Zeroizing::new(Vec::with_capacity(prefix.len() + 1));
    full.extend_from_slice(prefix);
    full.push(candidate);
    indices_checksum_ok(&full).unwrap_or(false)
}

/// First entry of `candidates` that completes `prefix`.
fn scan_first<I>(prefix: &[u16], candidates: I) -> Result<u16, ValidationError>
where
    I: IntoIterator<Item = u16>,
{
    candidates
        .into_iter()
        .find(|&c| completes(prefix, c))
        .ok_or(ValidationError::NoCandidateFound)
}

/// The lowest-index final word, built from the prefix bits.
///
/// Returns `None` if the prefix length is unsupported.
pub fn direct_candidate(prefix: &[u16]) -> Option<u16> {
    let mut trial = Zeroizing::new(prefix.to_vec());
    trial.push(0);
    let (entropy, _) = indices_to_entropy(&trial).ok()?;
    let entropy = Zeroizing::new(entropy);
    let checksum = checksum_bits_of(&entropy).ok()?;
    Some(u16::from(checksum.value))
}

/// Every final word index that completes `prefix`, ascending.
pub fn scan_candidates(prefix: &[u16]) -> Vec<u16> {
    (0..WORDLIST_SIZE as u16)
        .filter(|&c| completes(prefix, c))
        .collect()
}

/// Find the lowest-index final word for already-resolved prefix indices.
pub fn find_checksum_index(
    prefix: &[u16],
    strategy: SearchStrategy,
) -> Result<u16, ValidationError> {
    if strategy == SearchStrategy::Direct {
        match direct_candidate(prefix) {
            Some(c) if completes(prefix, c) => {
                tracing::trace!(candidate = c, "direct checksum construction");
                return Ok(c);
            }
            _ => tracing::warn!("direct checksum construction failed verification, scanning"),
        }
    }
    let found = scan_first(prefix, 0..WORDLIST_SIZE as u16)?;
    tracing::trace!(candidate = found, "checksum scan");
    Ok(found)
}

/// The final word that completes `prefix` (lowest index wins).
///
/// # Examples
///
/// ```
/// use checkword_core::search::{calculate_checksum, SearchStrategy};
/// use checkword_core::Wordlist;
/// let prefix = ["abandon"; 11];
/// let word = calculate_checksum(&prefix, &Wordlist::english(), SearchStrategy::Scan).unwrap();
/// assert_eq!(word, "about");
/// ```
pub fn calculate_checksum<S: AsRef<str>>(
    prefix: &[S],
    wordlist: &Wordlist,
    strategy: SearchStrategy,
) -> Result<&'static str, ValidationError> {
    let indices = resolve_prefix(prefix, wordlist)?;
    let index = find_checksum_index(&indices, strategy)?;
    Ok(wordlist.word_at(index))
}

/// Complete `prefix` into a full mnemonic.
pub fn complete<S: AsRef<str>>(
    prefix: &[S],
    wordlist: &Wordlist,
    strategy: SearchStrategy,
) -> Result<Mnemonic, ValidationError> {
    let indices = resolve_prefix(prefix, wordlist)?;
    let index = find_checksum_index(&indices, strategy)?;
    let mut full = indices.to_vec();
    full.push(index);
    Ok(Mnemonic::from_checked_indices(full, wordlist.clone()))
}

/// Every word that completes `prefix`, in ascending index order.
pub fn candidates<S: AsRef<str>>(
    prefix: &[S],
    wordlist: &Wordlist,
) -> Result<Vec<&'static str>, ValidationError> {
    let indices = resolve_prefix(prefix, wordlist)?;
    Ok(scan_candidates(&indices)
        .into_iter()
        .map(|i| wordlist.word_at(i))
        .collect())
}
