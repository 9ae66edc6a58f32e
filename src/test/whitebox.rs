//! Tests for white-box AES-128 (`crate::whitebox`), one topic per file,
//! following the same convention as `src/test/{cbc,ctr,padding}.rs`.

mod encoding;
mod external_encoding;
mod hex;
mod mixing;
mod mode_padding;
mod permutation;
mod persistence;
mod redundancy;
mod roundtrip;
