//! BIP39 sizes and derivation parameters.

/// Number of entries in every BIP39 wordlist.
pub const WORDLIST_SIZE: usize = 2048;

/// Bits encoded by a single mnemonic word (`2^11 = WORDLIST_SIZE`).
pub const BITS_PER_WORD: usize = 11;

/// Mask selecting the low [`BITS_PER_WORD`] bits of a value.
pub const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;

/// Word counts a mnemonic may have, one per supported entropy size.
///
/// # Examples
///
/// ```
/// use checkword_core::constants::SUPPORTED_WORD_COUNTS;
/// assert!(SUPPORTED_WORD_COUNTS.contains(&12));
/// assert!(!SUPPORTED_WORD_COUNTS.contains(&13));
/// ```
pub const SUPPORTED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Entropy sizes in bits, index-aligned with [`SUPPORTED_WORD_COUNTS`].
pub const SUPPORTED_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Word count of the mnemonics this system produces and completes.
pub const DEFAULT_WORD_COUNT: usize = 12;

/// Number of caller-chosen words before the checksum word.
pub const PREFIX_WORD_COUNT: usize = DEFAULT_WORD_COUNT - 1;

/// One checksum bit per this many entropy bits.
pub const ENTROPY_BITS_PER_CHECKSUM_BIT: usize = 32;

/// PBKDF2-HMAC-SHA512 iteration count for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = 64;

/// Salt prefix prepended to the passphrase during seed derivation.
pub const SEED_SALT_PREFIX: &str = "mnemonic";

/// Checksum length in bits for an entropy of `entropy_bits` bits.
///
/// # Examples
///
/// ```
/// use checkword_core::constants::checksum_len;
/// assert_eq!(checksum_len(128), 4);
/// assert_eq!(checksum_len(256), 8);
/// ```
pub const fn checksum_len(entropy_bits: usize) -> usize {
    entropy_bits / ENTROPY_BITS_PER_CHECKSUM_BIT
}

/// Entropy size in bits carried by a mnemonic of `word_count` words.
///
/// `word_count * 11 = ENT + ENT / 32`, so `ENT = word_count * 32 / 3`.
pub const fn entropy_bits_for_words(word_count: usize) -> usize {
    word_count * BITS_PER_WORD * ENTROPY_BITS_PER_CHECKSUM_BIT / (ENTROPY_BITS_PER_CHECKSUM_BIT + 1)
}

/// Number of words needed to encode `entropy_bits` of entropy plus checksum.
pub const fn words_for_entropy_bits(entropy_bits: usize) -> usize {
    (entropy_bits + checksum_len(entropy_bits)) / BITS_PER_WORD
}

/// Whether a mnemonic may have `word_count` words.
pub fn is_supported_word_count(word_count: usize) -> bool {
    SUPPORTED_WORD_COUNTS.contains(&word_count)
}

/// Whether `entropy_bits` is one of the supported entropy sizes.
pub fn is_supported_entropy_bits(entropy_bits: usize) -> bool {
    SUPPORTED_ENTROPY_BITS.contains(&entropy_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_counts_align_with_entropy_sizes() {
        for (words, bits) in SUPPORTED_WORD_COUNTS.iter().zip(SUPPORTED_ENTROPY_BITS.iter()) {
            assert_eq!(entropy_bits_for_words(*words), *bits);
            assert_eq!(words_for_entropy_bits(*bits), *words);
        }
    }

    #[test]
    fn twelve_words_carry_128_bits_and_4_checksum_bits() {
        assert_eq!(entropy_bits_for_words(12), 128);
        assert_eq!(checksum_len(128), 4);
        assert_eq!(128 + 4, 12 * BITS_PER_WORD);
    }

    #[test]
    fn word_mask_covers_wordlist() {
        assert_eq!(WORD_MASK as usize + 1, WORDLIST_SIZE);
    }

    #[test]
    fn prefix_is_one_short_of_default() {
        assert_eq!(PREFIX_WORD_COUNT, 11);
    }

    #[test]
    fn unsupported_sizes_rejected() {
        assert!(!is_supported_word_count(11));
        assert!(!is_supported_word_count(0));
        assert!(!is_supported_entropy_bits(96));
        assert!(!is_supported_entropy_bits(129));
    }
}
