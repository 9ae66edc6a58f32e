use {
    crate::{
        BlockEncrypt,
        Bytes,
        Cipher,
        CipherEncrypt,
        Ciphertext,
        Key,
        OneTimePad,
        Plaintext,
    },
    std::{convert::Infallible, fmt, iter, mem},
};

use super::BlockMode;

/// Counter mode: turns a block cipher into a stream cipher by encrypting a
/// counter (seeded with a nonce) to produce a keystream, then XORing the
/// keystream with the data.
///
/// Unlike [`Ecb`](super::Ecb)/[`Cbc`](super::Cbc), `Ctr` doesn't need the
/// data to be a multiple of the block size, so it only accepts
/// [`NoPadding`](crate::NoPadding).
pub struct Ctr<Enc> {
    enc: Enc,
    nonce: u64,
}

impl<Enc: BlockEncrypt> Ctr<Enc>
where
    Enc::EncryptionBlock: Bytes,
{
    /// Construct a new CTR mode driver. Fails if the block size is too small
    /// to fit the counter (one `u64` per block).
    pub fn new(enc: Enc, nonce: u64) -> Result<Self, BlockSizeTooSmall> {
        if mem::size_of::<Enc::EncryptionBlock>() < mem::size_of_val(&nonce) {
            return Err(BlockSizeTooSmall);
        }
        Ok(Self { enc, nonce })
    }
}

impl<Enc> Cipher for Ctr<Enc>
where
    Enc: BlockEncrypt,
    Enc::EncryptionBlock: Bytes,
    Enc::EncryptionKey: Bytes,
{
    type Err = Infallible;
    type Key = Enc::EncryptionKey;

    fn encrypt(&self, data: Plaintext<Vec<u8>>, key: Key<Self::Key>) -> Ciphertext<Vec<u8>> {
        OneTimePad::default()
            .encrypt(data, Key(keystream(&self.enc, key, self.nonce)))
            .expect("infinite keystream")
    }

    fn decrypt(
        &self,
        data: Ciphertext<Vec<u8>>,
        key: Key<Self::Key>,
    ) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        // CTR keystream generation is direction-agnostic: decryption encrypts
        // the same counter sequence and XORs it against the ciphertext.
        Ok(OneTimePad::default()
            .decrypt(data, Key(keystream(&self.enc, key, self.nonce)))
            .expect("infinite keystream"))
    }
}

impl<Enc> BlockMode for Ctr<Enc>
where
    Enc: BlockEncrypt,
    Enc::EncryptionBlock: Bytes,
    Enc::EncryptionKey: Bytes,
{
}

fn keystream<Enc>(
    enc: &Enc,
    key: Key<Enc::EncryptionKey>,
    nonce: u64,
) -> impl Iterator<Item = u8> + '_
where
    Enc: BlockEncrypt,
    Enc::EncryptionBlock: Bytes,
    Enc::EncryptionKey: Bytes,
{
    iter::successors(Some(nonce), |ctr| Some(ctr.wrapping_add(1)))
        .flat_map(move |ctr| {
            let mut ctr_block = Enc::EncryptionBlock::try_from(
                vec![0u8; mem::size_of::<Enc::EncryptionBlock>()].as_slice(),
            )
            .unwrap_or_else(|_| unreachable!());
            ctr_block
                .as_mut()
                .iter_mut()
                .zip(ctr.to_le_bytes())
                .for_each(|(b, n)| *b = n);
            let Ciphertext(block) = enc.encrypt(Plaintext(ctr_block), key);
            block.into_iter()
        })
}

#[derive(Debug)]
pub struct BlockSizeTooSmall;

impl fmt::Display for BlockSizeTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("block size too small to fit counter")
    }
}

impl std::error::Error for BlockSizeTooSmall {}
