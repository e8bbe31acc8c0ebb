//! # checkword-core
//! BIP39 mnemonic encoding: wordlists, the entropy codec, checksum
//! completion for an 11-word prefix, validation, seed derivation and an
//! advisory strength score.
//!
//! # Modules
//!
//! - [`language`]: the eight supported wordlist languages
//! - [`wordlist`]: word ↔ 11-bit index registry
//! - [`codec`]: entropy ↔ word indices, checksum bits, [`Mnemonic`]
//! - [`search`]: checksum word completion
//! - [`validator`]: mnemonic validation
//! - [`seed`]: PBKDF2 seed derivation
//! - [`strength`]: advisory, non-cryptographic strength score
//! - [`generator`]: [`MnemonicGenerator`], the caller-facing API
//!
//! ```
//! use checkword_core::MnemonicGenerator;
//!
//! let generator = MnemonicGenerator::new("english");
//! let phrase = generator.generate_from_prefix(&["abandon"; 11]).unwrap();
//! assert!(phrase.ends_with("abandon about"));
//! assert!(generator.validate_mnemonic(&phrase));
//! ```

pub mod codec;
pub mod constants;
pub mod error;
pub mod generator;
pub mod language;
pub mod search;
pub mod seed;
pub mod strength;
pub mod validator;
pub mod wordlist;

pub use codec::Mnemonic;
pub use error::{CoreError, EntropyError, LanguageError, ValidationError};
pub use generator::MnemonicGenerator;
pub use language::Language;
pub use search::SearchStrategy;
pub use seed::Seed;
pub use strength::{StrengthLevel, StrengthScore};
pub use wordlist::Wordlist;
