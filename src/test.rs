//! Integration-style tests that exercise the public API as a caller would,
//! one topic per file.
//!
//! Hash, HMAC, Fortuna, and secp256k1 tests were removed along with the
//! subsystems they covered (see DESIGN.md's trim section); only the topics
//! still in this crate's scope are wired in below.

mod cbc;
mod padding;
mod whitebox;
