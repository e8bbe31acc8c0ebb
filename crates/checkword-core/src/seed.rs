//! Seed derivation: PBKDF2-HMAC-SHA512 over a validated mnemonic.
//!
//! The password is the mnemonic sentence and the salt is
//! `"mnemonic" + passphrase`, both in Unicode NFKD form, stretched for
//! 2048 rounds into 64 bytes. Derivation refuses invalid mnemonics even
//! though the stretch itself would happily accept any string.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::codec::Mnemonic;
use crate::constants::{PBKDF2_ROUNDS, SEED_LEN, SEED_SALT_PREFIX};
use crate::error::CoreError;
use crate::validator;
use crate::wordlist::Wordlist;

/// A 64-byte seed. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
}

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self { bytes }
    }

    /// Get the raw seed bytes. Handle with care.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.bytes
    }

    /// Lowercase hex encoding of the seed.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl Clone for Seed {
    fn clone(&self) -> Self {
        Self { bytes: self.bytes }
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Stretch an already-validated mnemonic into a seed.
pub fn derive_seed(mnemonic: &Mnemonic, passphrase: &str) -> Seed {
    let password: Zeroizing<String> = Zeroizing::new(mnemonic.phrase().nfkd().collect());
    let salt: Zeroizing<String> = Zeroizing::new(
        SEED_SALT_PREFIX
            .chars()
            .chain(passphrase.chars())
            .nfkd()
            .collect(),
    );
    let mut bytes = [0u8; SEED_LEN];
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut bytes);
    let seed = Seed::from_bytes(bytes);
    bytes.zeroize();
    seed
}

/// Validate `text` and derive its seed.
///
/// # Errors
///
/// Returns [`CoreError::InvalidMnemonic`] carrying the validation failure
/// if `text` is not a valid mnemonic in `wordlist`'s language.
pub fn mnemonic_to_seed(
    text: &str,
    passphrase: &str,
    wordlist: &Wordlist,
) -> Result<Seed, CoreError> {
    let mnemonic = validator::parse(text, wordlist).map_err(CoreError::InvalidMnemonic)?;
    Ok(derive_seed(&mnemonic, passphrase))
}
