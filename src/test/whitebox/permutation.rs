use {crate::RandomPermutation, rand::rngs::OsRng};

#[test]
fn inverse_undoes_forward() {
    let mut rng = OsRng;
    let perm = RandomPermutation::new(&mut rng, 16);
    for x in 0..16u8 {
        assert_eq!(perm.apply_inv(perm.apply(x)), x);
    }
}

#[test]
fn is_a_bijection() {
    let mut rng = OsRng;
    let perm = RandomPermutation::new(&mut rng, 256);
    let mut seen = [false; 256];
    for x in 0..=255u8 {
        seen[perm.apply(x) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn identity_is_a_noop() {
    let id = RandomPermutation::identity(256);
    for x in 0..=255u8 {
        assert_eq!(id.apply(x), x);
        assert_eq!(id.apply_inv(x), x);
    }
}

/// Boundary test: a width-16 permutation applied across its whole domain
/// covers every one of the 16 possible outputs exactly once.
#[test]
fn width_16_permutation_covers_every_output() {
    let mut rng = OsRng;
    let perm = RandomPermutation::new(&mut rng, 16);
    let mut seen = [false; 16];
    for x in 0..16u8 {
        seen[perm.apply(x) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "not every output was covered");
}
