use crate::{Bytes, Ciphertext, Key, Plaintext};

mod block;
mod onetimepad;

pub use {
    block::{
        aes,
        Aes128,
        BlockCipher,
        BlockDecrypt,
        BlockEncrypt,
        BlockMode,
        BlockSizeTooSmall,
        Cbc,
        Ctr,
        Ecb,
        NoPadding,
        OneAndZeros,
        Padding,
        Pkcs7,
        Zeros,
    },
    onetimepad::{KeyTooShort, OneTimePad},
};

/// A cipher encrypts and decrypts data of arbitrary length using a key.
///
/// Note that `Cipher` is defined over data of any length, so a
/// [`BlockCipher`] alone does not fulfill the definition of a `Cipher`; it
/// must be combined with a [block mode](BlockMode).
///
/// Encrypting a plaintext always succeeds: any byte sequence is valid input.
/// Decrypting can fail, for example if the ciphertext was truncated or was
/// not produced by this cipher (invalid padding).
pub trait Cipher {
    type Err;
    type Key: Bytes;

    /// Encrypt the plaintext.
    fn encrypt(&self, data: Plaintext<Vec<u8>>, key: Key<Self::Key>) -> Ciphertext<Vec<u8>>;

    /// Decrypt the ciphertext. This operation can fail, for example, if the
    /// ciphertext was not created by this cipher.
    fn decrypt(
        &self,
        data: Ciphertext<Vec<u8>>,
        key: Key<Self::Key>,
    ) -> Result<Plaintext<Vec<u8>>, Self::Err>;
}

/// The encryption half of a cipher whose key is not a fixed-size byte array,
/// such as an infinite keystream.
///
/// Split from [`Cipher`] because some ciphers (the [one-time
/// pad](OneTimePad)) are keyed by an iterator rather than a [`Bytes`] array,
/// and their encryption and decryption keys can differ in type.
pub trait CipherEncrypt {
    type EncryptionErr;
    type EncryptionKey;

    fn encrypt(
        &self,
        data: Plaintext<Vec<u8>>,
        key: Key<Self::EncryptionKey>,
    ) -> Result<Ciphertext<Vec<u8>>, Self::EncryptionErr>;
}

/// The decryption half of a [cipher](CipherEncrypt) keyed by something other
/// than a fixed-size byte array.
pub trait CipherDecrypt {
    type DecryptionErr;
    type DecryptionKey;

    fn decrypt(
        &self,
        data: Ciphertext<Vec<u8>>,
        key: Key<Self::DecryptionKey>,
    ) -> Result<Plaintext<Vec<u8>>, Self::DecryptionErr>;
}
