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

/// Cipher block chaining mode: each plaintext block is XORed with the
/// previous ciphertext block (or the IV, for the first block) before
/// encryption.
///
/// Unlike [`Ecb`](super::Ecb), identical plaintext blocks produce different
/// ciphertext as long as the chain differs, but encryption cannot be
/// parallelized across blocks (decryption can).
pub struct Cbc<C: BlockCipher, P> {
    cipher: C,
    padding: P,
    iv: C::Block,
}

impl<C: BlockCipher, P> Cbc<C, P> {
    pub fn new(cipher: C, padding: P, iv: C::Block) -> Self {
        Self { cipher, padding, iv }
    }
}

impl<C, P> Cipher for Cbc<C, P>
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
        let mut prev: Vec<u8> = self.iv.as_ref().to_vec();
        for chunk in padded.0.chunks(block_size) {
            let xored: Vec<u8> = chunk.iter().zip(&prev).map(|(a, b)| a ^ b).collect();
            let block = C::Block::try_from(xored.as_slice()).unwrap_or_else(|_| unreachable!());
            let Ciphertext(enc) = self.cipher.encrypt(Plaintext(block), Key(key.0));
            prev = enc.as_ref().to_vec();
            out.extend_from_slice(&prev);
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
        let mut prev: Vec<u8> = self.iv.as_ref().to_vec();
        for chunk in data.0.chunks(block_size) {
            let block = C::Block::try_from(chunk).unwrap_or_else(|_| unreachable!());
            let Plaintext(dec) = self.cipher.decrypt(Ciphertext(block), Key(key.0));
            out.extend(dec.as_ref().iter().zip(&prev).map(|(a, b)| a ^ b));
            prev = chunk.to_vec();
        }
        self.padding.unpad(Plaintext(out), block_size)
    }
}

impl<C, P> BlockMode for Cbc<C, P>
where
    C: BlockCipher,
    C::Block: Bytes,
    C::Key: Bytes,
    P: Padding,
{
}
