//! Advisory strength score for a mnemonic.
//!
//! **Not a cryptographic measure.** The score looks only at surface
//! properties of the words (repetition, a few very common English words,
//! spread of first letters). The entropy of any valid 12-word mnemonic is
//! 128 bits whatever its score. The deny-list and first-letter rule are
//! applied to every language alike.
//!
//! Scoring for a valid 12-word mnemonic:
//!
//! | rule                                   | points |
//! |----------------------------------------|--------|
//! | valid checksum (base)                  | 60     |
//! | all 12 words distinct                  | +20    |
//! | otherwise at least 10 distinct         | +10    |
//! | any word on the common-word list       | −10    |
//! | at least 8 distinct first letters      | +10    |
//!
//! Invalid mnemonics score 0, and so do valid mnemonics of any other
//! length. The result is clamped to `0..=100`.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WORD_COUNT;
use crate::validator;
use crate::wordlist::Wordlist;

const BASE_SCORE: i32 = 60;
const ALL_DISTINCT_BONUS: i32 = 20;
const MOSTLY_DISTINCT_BONUS: i32 = 10;
const MIN_MOSTLY_DISTINCT: usize = 10;
const COMMON_WORD_PENALTY: i32 = 10;
const FIRST_LETTER_BONUS: i32 = 10;
const MIN_DISTINCT_FIRST_LETTERS: usize = 8;

/// Short, very frequent English words.
pub const COMMON_WORDS: [&str; 15] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "day",
];

/// Five-level label for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
            Self::VeryStrong => "very_strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score together with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthScore {
    pub score: u8,
    pub level: StrengthLevel,
}

/// Label for a score.
///
/// # Examples
///
/// ```
/// use checkword_core::strength::{level_of, StrengthLevel};
/// assert_eq!(level_of(95), StrengthLevel::VeryStrong);
/// assert_eq!(level_of(30), StrengthLevel::Weak);
/// ```
pub fn level_of(score: u8) -> StrengthLevel {
    match score {
        90.. => StrengthLevel::VeryStrong,
        75.. => StrengthLevel::Strong,
        60.. => StrengthLevel::Good,
        40.. => StrengthLevel::Fair,
        _ => StrengthLevel::Weak,
    }
}

/// Score already-validated words.
fn score_words(words: &[&str]) -> u8 {
    let mut score = BASE_SCORE;

    let distinct: HashSet<&str> = words.iter().copied().collect();
    if distinct.len() == words.len() {
        score += ALL_DISTINCT_BONUS;
    } else if distinct.len() >= MIN_MOSTLY_DISTINCT {
        score += MOSTLY_DISTINCT_BONUS;
    }

    if words.iter().any(|w| COMMON_WORDS.contains(w)) {
        score -= COMMON_WORD_PENALTY;
    }

    let first_letters: HashSet<char> = words.iter().filter_map(|w| w.chars().next()).collect();
    if first_letters.len() >= MIN_DISTINCT_FIRST_LETTERS {
        score += FIRST_LETTER_BONUS;
    }

    score.clamp(0, 100) as u8
}

/// Advisory score in `0..=100`; 0 for anything that is not a valid
/// 12-word mnemonic.
pub fn score(text: &str, wordlist: &Wordlist) -> u8 {
    match validator::parse(text, wordlist) {
        Ok(mnemonic) if mnemonic.word_count() == DEFAULT_WORD_COUNT => {
            score_words(&mnemonic.words())
        }
        _ => 0,
    }
}

/// Score and label together.
pub fn assess(text: &str, wordlist: &Wordlist) -> StrengthScore {
    let score = score(text, wordlist);
    StrengthScore {
        score,
        level: level_of(score),
    }
}
