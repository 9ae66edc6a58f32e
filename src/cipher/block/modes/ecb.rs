use crate::{
    cipher::block::BlockCipher,
    BlockDecrypt,
    BlockEncrypt,
    Bytes,
    Cipher,
    Ciphertext,
    Key,
    Padding,
    Plaintext,
};

use super::BlockMode;

/// Electronic codebook mode: each block is encrypted independently with the
/// same key.
///
/// Simplest mode of operation, but identical plaintext blocks always produce
/// identical ciphertext blocks, leaking structure in the plaintext. Prefer
/// [`Cbc`](super::Cbc) or [`Ctr`](super::Ctr) unless blocks are already
/// independent (e.g. already-encrypted key material).
pub struct Ecb<C, P> {
    cipher: C,
    padding: P,
}

impl<C, P> Ecb<C, P> {
    pub fn new(cipher: C, padding: P) -> Self {
        Self { cipher, padding }
    }
}

impl<C, P> Cipher for Ecb<C, P>
where
    C: BlockCipher,
    C::Block: Bytes,
    C::Key: Bytes,
    P: Padding,
{
    type Err = P::Err;
    type Key = C::Key;

    fn encrypt(&self, data: Plaintext<Vec<u8>>, key: Key<Self::Key>) -> Ciphertext<Vec<u8>> {
        let block_size = std::mem::size_of::<C::Block>();
        let padded = self.padding.pad(data, block_size);
        let mut out = Vec::with_capacity(padded.0.len());
        for chunk in padded.0.chunks(block_size) {
            let block = C::Block::try_from(chunk).unwrap_or_else(|_| unreachable!());
            let Ciphertext(enc) = self.cipher.encrypt(Plaintext(block), Key(key.0));
            out.extend_from_slice(enc.as_ref());
        }
        Ciphertext(out)
    }

    fn decrypt(
        &self,
        data: Ciphertext<Vec<u8>>,
        key: Key<Self::Key>,
    ) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        let block_size = std::mem::size_of::<C::Block>();
        let mut out = Vec::with_capacity(data.0.len());
        for chunk in data.0.chunks(block_size) {
            let block = C::Block::try_from(chunk).unwrap_or_else(|_| unreachable!());
            let Plaintext(dec) = self.cipher.decrypt(Ciphertext(block), Key(key.0));
            out.extend_from_slice(dec.as_ref());
        }
        self.padding.unpad(Plaintext(out), block_size)
    }
}

impl<C, P> BlockMode for Ecb<C, P>
where
    C: BlockCipher,
    C::Block: Bytes,
    C::Key: Bytes,
    P: Padding,
{
}
