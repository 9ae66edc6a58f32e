use rand::{CryptoRng, Rng, RngCore};

/// A random permutation over `{0..width-1}`, along with its inverse, used to
/// build the 4-bit [internal encodings](super::Bundle) and 8-bit
/// [external encodings](super::ExternalEncoding) in Chow's construction.
///
/// Generated with Fisher–Yates. Widths used throughout this module are 16
/// (nibble encodings) and 256 (external encodings), both well within `u8`.
#[derive(Debug, Clone)]
pub struct RandomPermutation {
    forward: Vec<u8>,
    inverse: Vec<u8>,
}

impl RandomPermutation {
    /// The identity permutation of the given width: leaves every value
    /// unchanged. Used in place of a random permutation when internal
    /// encoding is disabled, so the rest of the generator doesn't need a
    /// separate code path.
    pub fn identity(width: usize) -> Self {
        let ids: Vec<u8> = (0..width as u32).map(|x| x as u8).collect();
        Self { forward: ids.clone(), inverse: ids }
    }

    /// Generates a new random permutation of the given width.
    ///
    /// The shuffle draws its swap index `k` from `[0, width - 1]` rather than
    /// the textbook `[c, width - 1]`. This is still a valid permutation but
    /// not a uniformly random one; it is preserved here bit-for-bit to match
    /// the construction this is grounded on.
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R, width: usize) -> Self {
        let mut forward: Vec<u8> = (0..width as u32).map(|x| x as u8).collect();
        let mut inverse = forward.clone();
        for c in 0..width - 1 {
            let k = rng.gen_range(0..width);
            inverse.swap(forward[c] as usize, forward[k] as usize);
            forward.swap(c, k);
        }
        Self { forward, inverse }
    }

    pub fn width(&self) -> usize {
        self.forward.len()
    }

    pub fn apply(&self, x: u8) -> u8 {
        self.forward[x as usize]
    }

    pub fn apply_inv(&self, x: u8) -> u8 {
        self.inverse[x as usize]
    }
}
