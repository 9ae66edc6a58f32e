use crate::{whitebox::interpret, Generator};

const KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const PLAINTEXT: [u8; 16] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
];

/// On a clean bundle the redundancy check's two agreeing runs still hand
/// back a correct third run, not a cached copy of either of them — so the
/// output must match a non-redundant call byte for byte.
#[test]
fn clean_bundle_round_trips_identically_with_redundancy_on() {
    let generator = Generator::new(KEY, true, true);
    let enc = generator.encryption_bundle();
    let dec = generator.decryption_bundle();

    let ciphertext = interpret(&enc, PLAINTEXT, false, true);
    assert_eq!(ciphertext, interpret(&enc, PLAINTEXT, false, false));
    assert_eq!(interpret(&dec, ciphertext, true, true), PLAINTEXT);
}

/// A bundle corrupted after generation makes every run deterministic but
/// wrong, so the two redundant runs agree with each other yet disagree with
/// the uncorrupted result — a different failure mode than the mismatch
/// path, included here only to show the corruption actually changes the
/// output before the mismatch test below relies on it.
#[test]
fn corrupted_bundle_is_internally_consistent_but_wrong() {
    let mut bundle = Generator::new(KEY, false, false).encryption_bundle();
    let correct = interpret(&bundle, PLAINTEXT, false, false);

    bundle.final_t_boxes[0][0] ^= 0xff;

    let corrupted = interpret(&bundle, PLAINTEXT, false, true);
    assert_ne!(corrupted, correct);
}

/// `interpret`'s two comparison runs both read the same `&Bundle`, so they
/// can never disagree with each other in a black-box test — there's no way
/// to corrupt the tables mid-call. What's left to check here is the half of
/// the contract that doesn't depend on forcing a mismatch: the two
/// comparison runs really are discarded, since turning redundancy on over a
/// corrupted bundle returns the same (wrong) value a plain call returns, not
/// some other value a cached first/second run would have produced.
#[test]
fn redundant_run_over_corrupted_bundle_matches_plain_call() {
    let mut bundle = Generator::new(KEY, false, false).encryption_bundle();
    bundle.final_t_boxes[0][0] ^= 0xff;

    let plain = interpret(&bundle, PLAINTEXT, false, false);
    let redundant = interpret(&bundle, PLAINTEXT, false, true);
    assert_eq!(redundant, plain);
}
