use serde::{Deserialize, Serialize};

/// Number of full rounds the interpreter walks through table lookups (rounds
/// 0..9 of AES-128's ten rounds; the tenth is the [final round](super::interpreter)).
pub const ROUNDS: usize = 9;

/// Number of XOR tables needed per round to fold four 32-bit Tyi (or mixing)
/// outputs down to 16 bytes.
pub const XOR_TABLES_PER_ROUND: usize = 96;

/// Index into a round's XOR table array where the second cascade begins.
pub const XOR_TABLE_OFFSET: usize = 16 * 4;

/// A 256-entry byte-to-byte lookup table.
pub type TBox = [u8; 256];

/// A 256-entry byte-to-u32 lookup table.
pub type TyiTable = [u32; 256];

/// A 256-entry byte-to-nibble (stored as a byte) lookup table.
pub type XorTable = [u8; 256];

/// A 256-entry byte-to-u32 lookup table applying a mixing bijection.
pub type MixingTable = [u32; 256];

/// The immutable collection of precomputed tables used by the
/// [interpreter](super::interpret) to execute one direction (encryption or
/// decryption) of white-box AES-128.
///
/// The table arrays are boxed so that moving a `Bundle` is a pointer move
/// rather than a multi-megabyte copy.
#[derive(Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub uses_mixing: bool,
    pub final_t_boxes: Box<[TBox; 16]>,
    pub tyi: Box<[[TyiTable; 16]; ROUNDS]>,
    pub xor: Box<[[XorTable; XOR_TABLES_PER_ROUND]; ROUNDS]>,
    pub mixing: Box<[[MixingTable; 16]; ROUNDS]>,
    pub mixing_xor: Box<[[XorTable; XOR_TABLES_PER_ROUND]; ROUNDS]>,
}

impl std::fmt::Debug for Bundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundle")
            .field("uses_mixing", &self.uses_mixing)
            .finish_non_exhaustive()
    }
}
