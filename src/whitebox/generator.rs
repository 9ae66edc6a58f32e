//! Builds the lookup-table [`Bundle`]s that let the [interpreter](super::interpret)
//! run AES-128 without the key ever appearing in memory.
//!
//! Grounded in Chow, Eisen, Johnson and Van Oorschot's T-box/Tyi construction:
//! the AddRoundKey and SubBytes of one round are folded into a byte-indexed
//! table, MixColumns is folded into that table's output via the GF(2⁸)
//! coefficients of the mix matrix, and the resulting per-position tables are
//! recombined with nibble-wise XOR tables. [`MixingBijection`] diffusion and
//! 4-bit [internal encodings](super::encoding) are layered on top when
//! requested, exactly undoing the previous boundary's encoding on read and
//! applying a fresh one on write so the composition is transparent to the
//! interpreter.

use {
    super::{
        encoding::{NibbleEncoding, NibblePair},
        mixing::MixingBijection,
        permutation::RandomPermutation,
        tables::{
            Bundle,
            MixingTable,
            TBox,
            TyiTable,
            XorTable,
            ROUNDS,
            XOR_TABLES_PER_ROUND,
            XOR_TABLE_OFFSET,
        },
    },
    crate::cipher::aes::{gmul, inv_shift_idx, inv_sbox, key_expansion, sbox, shift_idx},
    rand::{rngs::OsRng, CryptoRng, RngCore},
};

const NK: usize = 4;
const NR: usize = 10;
const KEY_BYTES: usize = 16;
const EXPANSION_BYTES: usize = 16 * 11;

/// Columns of the AES MixColumns matrix, indexed by `position mod 4`: the
/// coefficients by which a single input byte is multiplied to produce its
/// contribution to the four output bytes of its column.
const MIX_COLUMNS: [[u8; 4]; 4] = [
    [0x02, 0x01, 0x01, 0x03],
    [0x03, 0x02, 0x01, 0x01],
    [0x01, 0x03, 0x02, 0x01],
    [0x01, 0x01, 0x03, 0x02],
];

/// Columns of the AES InvMixColumns matrix, indexed by `position mod 4`.
const INV_MIX_COLUMNS: [[u8; 4]; 4] = [
    [0x0e, 0x09, 0x0d, 0x0b],
    [0x0b, 0x0e, 0x09, 0x0d],
    [0x0d, 0x0b, 0x0e, 0x09],
    [0x09, 0x0d, 0x0b, 0x0e],
];

/// Builds both directions' table bundles for a single AES-128 key.
pub struct Generator {
    key: [u8; 16],
    use_internal_encoding: bool,
    use_mixing_bijections: bool,
}

impl Generator {
    pub fn new(key: [u8; 16], use_internal_encoding: bool, use_mixing_bijections: bool) -> Self {
        Self { key, use_internal_encoding, use_mixing_bijections }
    }

    pub fn encryption_bundle(&self) -> Bundle {
        build(self.key, self.use_internal_encoding, self.use_mixing_bijections, false)
    }

    pub fn decryption_bundle(&self) -> Bundle {
        build(self.key, self.use_internal_encoding, self.use_mixing_bijections, true)
    }
}

fn build(key: [u8; 16], use_internal_encoding: bool, use_mixing: bool, decrypt: bool) -> Bundle {
    let mut rng = OsRng;
    let w = key_expansion::<NK, NR, KEY_BYTES, EXPANSION_BYTES>(key);
    let rk: [[u8; 16]; 11] = std::array::from_fn(|i| {
        let mut k = [0u8; 16];
        k.copy_from_slice(&w[i * 16..(i + 1) * 16]);
        k
    });
    let shift: fn(usize) -> usize = if decrypt { inv_shift_idx } else { shift_idx };

    let mut tyi: Box<[[TyiTable; 16]; ROUNDS]> = Box::new([[[0u32; 256]; 16]; ROUNDS]);
    let mut xor: Box<[[XorTable; XOR_TABLES_PER_ROUND]; ROUNDS]> =
        Box::new([[[0u8; 256]; XOR_TABLES_PER_ROUND]; ROUNDS]);
    let mut mixing: Box<[[MixingTable; 16]; ROUNDS]> = Box::new([[[0u32; 256]; 16]; ROUNDS]);
    let mut mixing_xor: Box<[[XorTable; XOR_TABLES_PER_ROUND]; ROUNDS]> =
        Box::new([[[0u8; 256]; XOR_TABLES_PER_ROUND]; ROUNDS]);

    // The encoding presently wrapping each of the 16 state bytes; identity
    // for round 0 since the interpreter's input is the raw, unencoded state.
    let mut byte_encoding: [NibblePair; 16] = std::array::from_fn(|_| NibblePair::identity());

    for r in 0..ROUNDS {
        let tyi_out: [NibbleEncoding; 16] =
            std::array::from_fn(|_| fresh_nibble_encoding(use_internal_encoding, &mut rng));
        let bij32: [MixingBijection; 4] = std::array::from_fn(|_| {
            if use_mixing { MixingBijection::new(&mut rng, 32) } else { MixingBijection::identity(32) }
        });

        for pos in 0..16 {
            let input = &byte_encoding[shift(pos)];
            let mix_bij = use_mixing.then(|| &bij32[pos / 4]);
            tyi[r][pos] = if decrypt {
                build_tyi_table(|x| tyi_raw_dec(&rk, r, pos, x), input, &tyi_out[pos], mix_bij)
            } else {
                build_tyi_table(|x| tyi_raw_enc(&rk, r, pos, x), input, &tyi_out[pos], mix_bij)
            };
        }

        let (xor_tables, xor2_encoding) = build_cascade(&tyi_out, use_internal_encoding, &mut rng);
        xor[r] = xor_tables;

        byte_encoding = if use_mixing {
            let bij8: [MixingBijection; 16] =
                std::array::from_fn(|_| MixingBijection::new(&mut rng, 8));
            let bij8_concat: [MixingBijection; 4] = std::array::from_fn(|g| {
                MixingBijection::concat(&bij8[4 * g], &bij8[4 * g + 1], &bij8[4 * g + 2], &bij8[4 * g + 3])
            });
            let mixing_out: [NibbleEncoding; 16] =
                std::array::from_fn(|_| fresh_nibble_encoding(use_internal_encoding, &mut rng));

            for pos in 0..16 {
                mixing[r][pos] = build_mixing_table(
                    pos % 4,
                    &xor2_encoding[pos],
                    &bij32[pos / 4],
                    &bij8_concat[pos / 4],
                    &mixing_out[pos],
                );
            }

            let (mixing_xor_tables, mixing_encoding) =
                build_cascade(&mixing_out, use_internal_encoding, &mut rng);
            mixing_xor[r] = mixing_xor_tables;
            mixing_encoding
        } else {
            xor2_encoding
        };
    }

    let final_t_boxes: [TBox; 16] = std::array::from_fn(|pos| {
        let input = &byte_encoding[shift(pos)];
        if decrypt {
            final_table(|x| final_raw_dec(&rk, pos, x), input)
        } else {
            final_table(|x| final_raw_enc(&rk, pos, x), input)
        }
    });

    Bundle {
        uses_mixing: use_mixing,
        final_t_boxes: Box::new(final_t_boxes),
        tyi,
        xor,
        mixing,
        mixing_xor,
    }
}

fn fresh_nibble_encoding<R: RngCore + CryptoRng>(enabled: bool, rng: &mut R) -> NibbleEncoding {
    if enabled { NibbleEncoding::random(rng) } else { NibbleEncoding::identity() }
}

fn fresh_perm<R: RngCore + CryptoRng>(enabled: bool, rng: &mut R) -> RandomPermutation {
    if enabled { RandomPermutation::new(rng, 16) } else { RandomPermutation::identity(16) }
}

/// Builds the 96 XOR tables (64 first-cascade, 32 second-cascade) that fold
/// a round's 16 packed u32 outputs down to 16 bytes, and returns the
/// resulting per-byte encoding of those 16 bytes for the next boundary.
///
/// Shared between the Tyi stage (`tyi_out` input, writes `xor`) and the
/// mixing stage (`mixing_out` input, writes `mixing_xor`) since both fold
/// down via the identical chunk-of-four/chunk-of-two cascade.
fn build_cascade<R: RngCore + CryptoRng>(
    src: &[NibbleEncoding; 16],
    use_internal_encoding: bool,
    rng: &mut R,
) -> ([XorTable; XOR_TABLES_PER_ROUND], [NibblePair; 16]) {
    let mut tables: [XorTable; XOR_TABLES_PER_ROUND] = [[0u8; 256]; XOR_TABLES_PER_ROUND];
    let xor1_out: [RandomPermutation; 64] =
        std::array::from_fn(|_| fresh_perm(use_internal_encoding, rng));
    let xor2_out: [RandomPermutation; 32] =
        std::array::from_fn(|_| fresh_perm(use_internal_encoding, rng));

    for c in 0..4 {
        let base = 4 * c;
        for m in 0..8 {
            tables[c * 16 + m] =
                xor_table(src[base].nibble(m), src[base + 1].nibble(m), &xor1_out[c * 16 + m]);
            tables[c * 16 + 8 + m] = xor_table(
                src[base + 2].nibble(m),
                src[base + 3].nibble(m),
                &xor1_out[c * 16 + 8 + m],
            );
        }
    }
    for c in 0..4 {
        for m in 0..8 {
            let hi = &xor1_out[c * 16 + m];
            let lo = &xor1_out[c * 16 + 8 + m];
            tables[XOR_TABLE_OFFSET + c * 8 + m] = xor_table(hi, lo, &xor2_out[c * 8 + m]);
        }
    }

    let byte_encoding: [NibblePair; 16] = std::array::from_fn(|i| {
        let c = i / 4;
        let b = i % 4;
        NibblePair { hi: xor2_out[c * 8 + 2 * b].clone(), lo: xor2_out[c * 8 + 2 * b + 1].clone() }
    });

    (tables, byte_encoding)
}

fn xor_table(hi: &RandomPermutation, lo: &RandomPermutation, out: &RandomPermutation) -> XorTable {
    let mut t = [0u8; 256];
    for idx in 0..=255u8 {
        let hi_raw = hi.apply_inv(idx >> 4);
        let lo_raw = lo.apply_inv(idx & 0xf);
        t[usize::from(idx)] = out.apply(hi_raw ^ lo_raw);
    }
    t
}

fn build_tyi_table(
    raw_fn: impl Fn(u8) -> u32,
    input: &NibblePair,
    output: &NibbleEncoding,
    mix: Option<&MixingBijection>,
) -> TyiTable {
    let mut t = [0u32; 256];
    for idx in 0..=255u8 {
        let raw = input.decode(idx);
        let mut v = raw_fn(raw);
        if let Some(bij) = mix {
            v = bij.apply(v);
        }
        t[usize::from(idx)] = output.encode(v);
    }
    t
}

/// `slot` is `position mod 4`: which byte of the packed u32 the raw byte is
/// embedded at (3 = lowest, matching the AES column's row order).
fn build_mixing_table(
    slot: usize,
    input: &NibblePair,
    bij32_prev: &MixingBijection,
    bij8_concat: &MixingBijection,
    output: &NibbleEncoding,
) -> MixingTable {
    let shift = 8 * (3 - slot);
    let mut t = [0u32; 256];
    for idx in 0..=255u8 {
        let raw = input.decode(idx);
        let embedded = u32::from(raw) << shift;
        let unmixed = bij32_prev.apply_inv(embedded);
        let remixed = bij8_concat.apply(unmixed);
        t[usize::from(idx)] = output.encode(remixed);
    }
    t
}

fn final_table(raw_fn: impl Fn(u8) -> u8, input: &NibblePair) -> TBox {
    let mut t = [0u8; 256];
    for idx in 0..=255u8 {
        t[usize::from(idx)] = raw_fn(input.decode(idx));
    }
    t
}

fn pack(coefs: [u8; 4], t: u8) -> u32 {
    u32::from_be_bytes(coefs.map(|c| gmul(c, t)))
}

fn tyi_raw_enc(rk: &[[u8; 16]; 11], round: usize, pos: usize, x: u8) -> u32 {
    let byte = sbox(x ^ rk[round][shift_idx(pos)]);
    pack(MIX_COLUMNS[pos % 4], byte)
}

fn final_raw_enc(rk: &[[u8; 16]; 11], pos: usize, x: u8) -> u8 {
    sbox(x ^ rk[9][shift_idx(pos)]) ^ rk[10][pos]
}

fn tyi_raw_dec(rk: &[[u8; 16]; 11], round: usize, pos: usize, x: u8) -> u32 {
    let byte = if round == 0 {
        inv_sbox(x ^ rk[10][inv_shift_idx(pos)]) ^ rk[9][pos]
    } else {
        inv_sbox(x) ^ rk[9 - round][pos]
    };
    pack(INV_MIX_COLUMNS[pos % 4], byte)
}

fn final_raw_dec(rk: &[[u8; 16]; 11], pos: usize, x: u8) -> u8 {
    inv_sbox(x) ^ rk[0][pos]
}
