use {crate::MixingBijection, rand::rngs::OsRng};

#[test]
fn inverse_undoes_forward() {
    let mut rng = OsRng;
    let bij = MixingBijection::new(&mut rng, 32);
    for x in [0u32, 1, 0xdead_beef, 0xffff_ffff, 0x1234_5678] {
        assert_eq!(bij.apply_inv(bij.apply(x)), x);
    }
}

#[test]
fn identity_is_a_noop() {
    let id = MixingBijection::identity(8);
    for x in 0..=255u32 {
        assert_eq!(id.apply(x), x);
    }
}

/// Concatenation correctness (§8, property 4): `concat(b1..b4).apply(x)`
/// equals the packed concatenation of each `b_i.apply` on its own 8-bit
/// slice of `x`.
#[test]
fn concat_matches_per_slice_application() {
    let mut rng = OsRng;
    let b1 = MixingBijection::new(&mut rng, 8);
    let b2 = MixingBijection::new(&mut rng, 8);
    let b3 = MixingBijection::new(&mut rng, 8);
    let b4 = MixingBijection::new(&mut rng, 8);
    let combined = MixingBijection::concat(&b1, &b2, &b3, &b4);

    let x: u32 = 0x1234_5678;
    let expected = (b1.apply(x & 0xff))
        | (b2.apply((x >> 8) & 0xff) << 8)
        | (b3.apply((x >> 16) & 0xff) << 16)
        | (b4.apply((x >> 24) & 0xff) << 24);
    assert_eq!(combined.apply(x), expected);
}
