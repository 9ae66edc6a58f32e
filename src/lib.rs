#![feature(return_position_impl_trait_in_trait)]

#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod bytes;
mod cipher;
mod key;
mod text;
mod whitebox;

pub use {
    bytes::Bytes,
    cipher::{
        aes,
        Aes128,
        BlockCipher,
        BlockDecrypt,
        BlockEncrypt,
        BlockMode,
        BlockSizeTooSmall,
        Cbc,
        Cipher,
        CipherDecrypt,
        CipherEncrypt,
        Ctr,
        Ecb,
        NoPadding,
        OneAndZeros,
        Padding,
        Pkcs7,
        Zeros,
    },
    key::Key,
    text::{Ciphertext, Plaintext},
    whitebox::{
        load_bundle,
        parse_state,
        save_bundle,
        source_listing,
        Bundle,
        BundleIoError,
        ExternalEncoding,
        Generator,
        HexParseError,
        MixingBijection,
        RandomPermutation,
        WhiteBox,
    },
};
