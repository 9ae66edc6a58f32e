//! Wraps a pair of [`Bundle`]s in this crate's ordinary block-cipher traits,
//! so a white-box AES-128 instance composes with [`Ecb`](crate::Ecb),
//! [`Cbc`](crate::Cbc), and [`Ctr`](crate::Ctr) exactly like [`Aes128`](crate::Aes128).
//!
//! The key never appears as an argument here — it was consumed once, by the
//! [`Generator`](super::Generator), to produce the tables this type holds.
//! The block-cipher traits still require a key type, so `WhiteBox` uses the
//! zero-byte array `[u8; 0]` to say "no key material travels through this
//! boundary."

use {
    super::{generator::Generator, interpreter::interpret, tables::Bundle},
    crate::{BlockCipher, BlockDecrypt, BlockEncrypt, Ciphertext, Key, Plaintext},
};

/// A white-box AES-128 instance: an encryption bundle, a decryption bundle,
/// and whether the interpreter should run its fault-injection-resistant
/// redundancy check on every block.
pub struct WhiteBox {
    encryption: Bundle,
    decryption: Bundle,
    redundancy: bool,
}

impl WhiteBox {
    /// Generates a fresh pair of bundles for `key` and wraps them.
    ///
    /// `redundancy` defaults to `use_mixing_bijections` when not overridden
    /// by [`WhiteBox::with_redundancy`], matching the deployment default
    /// this construction's fault-injection defense was built for.
    pub fn new(key: [u8; 16], use_internal_encoding: bool, use_mixing_bijections: bool) -> Self {
        let generator = Generator::new(key, use_internal_encoding, use_mixing_bijections);
        Self::from_bundles(
            generator.encryption_bundle(),
            generator.decryption_bundle(),
            use_mixing_bijections,
        )
    }

    /// Wraps an already-built (or loaded) pair of bundles directly.
    pub fn from_bundles(encryption: Bundle, decryption: Bundle, redundancy: bool) -> Self {
        Self { encryption, decryption, redundancy }
    }

    pub fn with_redundancy(mut self, redundancy: bool) -> Self {
        self.redundancy = redundancy;
        self
    }

    pub fn encryption_bundle(&self) -> &Bundle {
        &self.encryption
    }

    pub fn decryption_bundle(&self) -> &Bundle {
        &self.decryption
    }
}

impl BlockEncrypt for WhiteBox {
    type EncryptionBlock = [u8; 16];
    type EncryptionKey = [u8; 0];

    fn encrypt(
        &self,
        data: Plaintext<Self::EncryptionBlock>,
        _key: Key<Self::EncryptionKey>,
    ) -> Ciphertext<Self::EncryptionBlock> {
        Ciphertext(interpret(&self.encryption, data.0, false, self.redundancy))
    }
}

impl BlockDecrypt for WhiteBox {
    type DecryptionBlock = [u8; 16];
    type DecryptionKey = [u8; 0];

    fn decrypt(
        &self,
        data: Ciphertext<Self::DecryptionBlock>,
        _key: Key<Self::DecryptionKey>,
    ) -> Plaintext<Self::DecryptionBlock> {
        Plaintext(interpret(&self.decryption, data.0, true, self.redundancy))
    }
}

impl BlockCipher for WhiteBox {
    type Block = [u8; 16];
    type Key = [u8; 0];
}
