use {
    crate::whitebox::encoding::{NibbleEncoding, NibblePair},
    rand::rngs::OsRng,
};

#[test]
fn nibble_pair_round_trips() {
    let mut rng = OsRng;
    let pair = NibblePair::random(&mut rng);
    for raw in 0..=255u8 {
        assert_eq!(pair.decode(pair.encode(raw)), raw);
    }
}

#[test]
fn nibble_pair_identity_is_a_noop() {
    let id = NibblePair::identity();
    for raw in 0..=255u8 {
        assert_eq!(id.encode(raw), raw);
        assert_eq!(id.decode(raw), raw);
    }
}

/// A [`NibbleEncoding`]'s per-byte pair (its two middle nibble permutations
/// for byte `b`) must match applying the whole encoding and reading back the
/// corresponding nibbles.
#[test]
fn nibble_encoding_byte_pair_matches_whole_encoding() {
    let mut rng = OsRng;
    let enc = NibbleEncoding::random(&mut rng);
    let x: u32 = 0xdead_beef;
    let encoded = enc.encode(x);

    for b in 0..4 {
        let pair = enc.byte_pair(b);
        let shift = 8 * (3 - b);
        let raw_byte = ((x >> shift) & 0xff) as u8;
        let encoded_byte = ((encoded >> shift) & 0xff) as u8;
        assert_eq!(pair.encode(raw_byte), encoded_byte);
    }
}
