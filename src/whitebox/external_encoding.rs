//! 8-bit encodings applied to a [`Bundle`](super::Bundle)'s outermost
//! boundary, so that even the plaintext fed to the first table and the
//! ciphertext read from the last are never the raw AES values.
//!
//! Unlike the internal nibble encodings the generator threads between every
//! table, an external encoding is the caller's responsibility to apply and
//! remove outside the cipher; two parties sharing a [`Bundle`] must also
//! share (or exchange) the same [`ExternalEncoding`] to interoperate.

use {super::tables::Bundle, rand::{CryptoRng, RngCore}, super::permutation::RandomPermutation};

/// Sixteen independent byte-wide permutations, one per state position.
#[derive(Debug, Clone)]
pub struct ExternalEncoding([RandomPermutation; 16]);

impl ExternalEncoding {
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| RandomPermutation::new(rng, 256)))
    }

    pub fn identity() -> Self {
        Self(std::array::from_fn(|_| RandomPermutation::identity(256)))
    }

    pub fn encode(&self, state: [u8; 16]) -> [u8; 16] {
        std::array::from_fn(|i| self.0[i].apply(state[i]))
    }

    pub fn decode(&self, state: [u8; 16]) -> [u8; 16] {
        std::array::from_fn(|i| self.0[i].apply_inv(state[i]))
    }

    /// Rewrites a bundle's boundary tables so the encoding is absorbed into
    /// the tables themselves and the caller never has to touch it.
    ///
    /// `is_input` rewrites the first round's Tyi tables to expect an
    /// externally-encoded plaintext (for an encryption bundle) or
    /// ciphertext (for a decryption bundle); otherwise the final round's
    /// T-boxes are rewritten to produce an externally-encoded output.
    /// `decrypt` must match the direction the bundle was generated for, so
    /// the input rewrite can undo the same shift the interpreter applies
    /// when reading its input.
    ///
    /// `strict` governs how many of the 16 positions are covered. The
    /// construction this is grounded on iterates `i < 15`, leaving position
    /// 15 un-encoded — almost certainly an off-by-one, but existing bundles
    /// depend on it. `strict = false` (the default used by the CLI)
    /// reproduces that bug bit-for-bit; `strict = true` covers all 16.
    pub fn apply(&self, bundle: &mut Bundle, is_input: bool, decrypt: bool, strict: bool) {
        let shift: fn(usize) -> usize =
            if decrypt { crate::cipher::aes::inv_shift_idx } else { crate::cipher::aes::shift_idx };
        let bound = if strict { 16 } else { 15 };

        for pos in 0..bound {
            if is_input {
                // The interpreter reads the table's index from array
                // position `shift(pos)`, so that's whose permutation the
                // caller applied to this table's input.
                let source = shift(pos);
                let mut rewritten = [0u32; 256];
                for idx in 0..=255u8 {
                    let raw = self.0[source].apply_inv(idx);
                    rewritten[usize::from(idx)] = bundle.tyi[0][pos][usize::from(raw)];
                }
                bundle.tyi[0][pos] = rewritten;
            } else {
                // The table's output lands directly at array position `pos`.
                let mut rewritten = [0u8; 256];
                for idx in 0..=255u8 {
                    rewritten[usize::from(idx)] =
                        self.0[pos].apply(bundle.final_t_boxes[pos][usize::from(idx)]);
                }
                bundle.final_t_boxes[pos] = rewritten;
            }
        }
    }
}
