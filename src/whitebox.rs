//! A white-box implementation of AES-128, following Chow, Eisen, Johnson and
//! Van Oorschot's construction, hardened with the mixing-bijection and
//! external-encoding refinements described by Muir.
//!
//! In a conventional implementation the AES round key lives in memory for the
//! duration of encryption or decryption, so anyone who can inspect that
//! memory (an attacker controlling the host, say) can recover it. A
//! white-box implementation instead precomputes the entire key schedule into
//! a collection of lookup tables (a [`Bundle`]) up front; running the cipher
//! afterwards means walking those tables, and the key itself never appears.
//!
//! Building a [`Bundle`] is the job of [`generator`]; executing one is the
//! job of [`interpreter::interpret`]. [`cipher`] wraps a `Bundle` in the
//! crate's ordinary [`BlockEncrypt`](crate::BlockEncrypt)/
//! [`BlockDecrypt`](crate::BlockDecrypt) traits so it composes with the same
//! [block modes](crate::BlockMode) as any other block cipher. [`persistence`]
//! and [`hex`] cover getting a `Bundle` and its inputs in and out of the
//! program.

mod cipher;
pub(crate) mod encoding;
mod external_encoding;
mod generator;
mod hex;
mod interpreter;
mod mixing;
mod permutation;
mod persistence;
mod tables;

pub use {
    cipher::WhiteBox,
    external_encoding::ExternalEncoding,
    generator::Generator,
    hex::{parse_state, HexParseError},
    interpreter::interpret,
    mixing::MixingBijection,
    permutation::RandomPermutation,
    persistence::{load_bundle, save_bundle, source_listing, BundleIoError},
    tables::{Bundle, MixingTable, TBox, TyiTable, XorTable},
};
