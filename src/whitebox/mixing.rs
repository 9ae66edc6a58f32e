use rand::{CryptoRng, Rng, RngCore};

/// An invertible linear transformation over `GF(2)`, used as a diffusion
/// step between adjacent tables in Chow's construction so that no table
/// alone reveals a usable fragment of the key.
///
/// Represented as `width` rows, each a bitmask of up to 32 columns (`width`
/// is 8 or 32 throughout this crate). Bit `k` of a row is column `k`; bit `k`
/// of an operand is row `k` of its column-vector form, matching the
/// convention used by the construction this is grounded on.
#[derive(Debug, Clone)]
pub struct MixingBijection {
    width: usize,
    matrix: Vec<u32>,
    inverse: Vec<u32>,
}

impl MixingBijection {
    /// Generates a random invertible `width x width` bit-matrix, retrying
    /// until the fill is invertible.
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R, width: usize) -> Self {
        loop {
            let matrix: Vec<u32> = (0..width)
                .map(|_| rng.gen_range(0..=u32::MAX) & mask(width))
                .collect();
            if let Some(inverse) = invert(&matrix, width) {
                return Self { width, matrix, inverse };
            }
        }
    }

    /// The identity bijection: leaves every value unchanged.
    pub fn identity(width: usize) -> Self {
        let matrix: Vec<u32> = (0..width).map(|i| 1 << i).collect();
        Self { width, matrix: matrix.clone(), inverse: matrix }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn apply(&self, x: u32) -> u32 {
        apply_matrix(&self.matrix, self.width, x)
    }

    pub fn apply_inv(&self, x: u32) -> u32 {
        apply_matrix(&self.inverse, self.width, x)
    }

    /// Concatenates four 8-bit bijections into a single 32-bit bijection
    /// occupying the diagonal blocks `[0..8)`, `[8..16)`, `[16..24)`,
    /// `[24..32)`; off-diagonal blocks are zero.
    pub fn concat(b1: &Self, b2: &Self, b3: &Self, b4: &Self) -> Self {
        assert_eq!(b1.width, 8);
        assert_eq!(b2.width, 8);
        assert_eq!(b3.width, 8);
        assert_eq!(b4.width, 8);
        let mut matrix = vec![0u32; 32];
        let mut inverse = vec![0u32; 32];
        for (block, b) in [b1, b2, b3, b4].into_iter().enumerate() {
            let shift = 8 * block;
            for row in 0..8 {
                matrix[shift + row] = b.matrix[row] << shift;
                inverse[shift + row] = b.inverse[row] << shift;
            }
        }
        Self { width: 32, matrix, inverse }
    }
}

fn mask(width: usize) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}

fn apply_matrix(matrix: &[u32], width: usize, x: u32) -> u32 {
    let mut out = 0u32;
    for row in 0..width {
        if (matrix[row] & x).count_ones() % 2 == 1 {
            out |= 1 << row;
        }
    }
    out
}

/// Gaussian elimination over `GF(2)`. Returns `None` if the matrix is
/// singular.
fn invert(matrix: &[u32], width: usize) -> Option<Vec<u32>> {
    let mut a = matrix.to_vec();
    let mut inv: Vec<u32> = (0..width).map(|i| 1 << i).collect();

    for col in 0..width {
        let pivot = (col..width).find(|&r| a[r] & (1 << col) != 0)?;
        a.swap(col, pivot);
        inv.swap(col, pivot);
        for row in 0..width {
            if row != col && a[row] & (1 << col) != 0 {
                a[row] ^= a[col];
                inv[row] ^= inv[col];
            }
        }
    }

    Some(inv)
}
