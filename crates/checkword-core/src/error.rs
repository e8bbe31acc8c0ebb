//! Error types for mnemonic encoding, validation and derivation.
use thiserror::Error;

/// Why a mnemonic (or an 11-word prefix) was rejected.
///
/// Word positions are zero-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("wrong word count: {got}")] WrongWordCount { got: usize },
    #[error("word {index} not in dictionary: {word:?}")] WordNotInDictionary { index: usize, word: String },
    #[error("checksum mismatch")] ChecksumMismatch,
    #[error("no checksum word completes the prefix")] NoCandidateFound,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported language: {0}")] Unsupported(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    #[error("invalid entropy length: {bits} bits")] InvalidLength { bits: usize },
    #[error("invalid entropy hex: {0}")] InvalidHex(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)] Validation(#[from] ValidationError),
    #[error(transparent)] Language(#[from] LanguageError),
    #[error(transparent)] Entropy(#[from] EntropyError),
    #[error("invalid mnemonic: {0}")] InvalidMnemonic(ValidationError),
}

impl CoreError {
    /// The underlying validation failure, if this error carries one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) | Self::InvalidMnemonic(e) => Some(e),
            _ => None,
        }
    }
}
