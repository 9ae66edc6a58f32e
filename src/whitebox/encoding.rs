//! 4-bit nibble encodings threaded between table boundaries.
//!
//! Every lookup table the generator produces reads an already-encoded index
//! and writes an already-encoded value, so that composing two adjacent
//! tables cancels the encoding in between and only the intended
//! transformation survives. [`NibblePair`] governs one byte (two
//! independent nibble permutations); [`NibbleEncoding`] governs one packed
//! u32 (eight of them, one per nibble, big-endian).

use {super::permutation::RandomPermutation, rand::{CryptoRng, RngCore}};

/// The two independent 4-bit permutations covering the high and low nibble
/// of a single byte-wide table boundary.
#[derive(Debug, Clone)]
pub struct NibblePair {
    pub hi: RandomPermutation,
    pub lo: RandomPermutation,
}

impl NibblePair {
    pub fn identity() -> Self {
        Self {
            hi: RandomPermutation::identity(16),
            lo: RandomPermutation::identity(16),
        }
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            hi: RandomPermutation::new(rng, 16),
            lo: RandomPermutation::new(rng, 16),
        }
    }

    /// Recovers the raw byte whose nibbles were independently encoded by
    /// this pair to produce `idx`.
    pub fn decode(&self, idx: u8) -> u8 {
        let hi = self.hi.apply_inv(idx >> 4);
        let lo = self.lo.apply_inv(idx & 0xf);
        (hi << 4) | lo
    }

    /// Encodes a raw byte by permuting its two nibbles independently.
    pub fn encode(&self, raw: u8) -> u8 {
        let hi = self.hi.apply(raw >> 4);
        let lo = self.lo.apply(raw & 0xf);
        (hi << 4) | lo
    }
}

/// Eight independent 4-bit permutations, one per nibble of a packed u32, in
/// big-endian nibble order (index 0 is the most significant nibble).
#[derive(Debug, Clone)]
pub struct NibbleEncoding([RandomPermutation; 8]);

impl NibbleEncoding {
    pub fn identity() -> Self {
        Self(std::array::from_fn(|_| RandomPermutation::identity(16)))
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| RandomPermutation::new(rng, 16)))
    }

    /// The permutation governing nibble `k` (0 = most significant).
    pub fn nibble(&self, k: usize) -> &RandomPermutation {
        &self.0[k]
    }

    pub fn encode(&self, x: u32) -> u32 {
        let mut out = 0u32;
        for (k, perm) in self.0.iter().enumerate() {
            let shift = 4 * (7 - k);
            let nibble = ((x >> shift) & 0xf) as u8;
            out |= u32::from(perm.apply(nibble)) << shift;
        }
        out
    }

    /// The `(hi, lo)` pair governing byte `b` (0 = most significant) of the
    /// packed u32, for chaining into the next table's [`NibblePair`] input.
    pub fn byte_pair(&self, b: usize) -> NibblePair {
        NibblePair {
            hi: self.0[2 * b].clone(),
            lo: self.0[2 * b + 1].clone(),
        }
    }
}
