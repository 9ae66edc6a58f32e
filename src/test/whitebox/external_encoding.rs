use {crate::ExternalEncoding, rand::rngs::OsRng};

#[test]
fn round_trips() {
    let mut rng = OsRng;
    let enc = ExternalEncoding::new(&mut rng);
    let state = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x10, 0x32, 0x54, 0x76, 0x98, 0xba, 0xdc,
        0xfe,
    ];
    assert_eq!(enc.decode(enc.encode(state)), state);
}

#[test]
fn identity_is_a_noop() {
    let id = ExternalEncoding::identity();
    let state = [7u8; 16];
    assert_eq!(id.encode(state), state);
    assert_eq!(id.decode(state), state);
}

/// External-encoding orthogonality (§8, property 6): rewriting a bundle's
/// input boundary to absorb an [`ExternalEncoding`] makes it accept an
/// already-encoded plaintext and still produce the same ciphertext as the
/// un-rewritten bundle fed the raw plaintext.
#[test]
fn strict_applied_bundle_accepts_encoded_plaintext() {
    use crate::{whitebox::interpret, Generator};

    let key = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let plaintext = [
        0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17,
        0x2a,
    ];

    let generator = Generator::new(key, true, false);
    let plain_bundle = generator.encryption_bundle();
    let expected = interpret(&plain_bundle, plaintext, false, false);

    let mut encoded_bundle = generator.encryption_bundle();
    let mut rng = OsRng;
    let external = ExternalEncoding::new(&mut rng);
    external.apply(&mut encoded_bundle, true, false, true);

    let actual = interpret(&encoded_bundle, external.encode(plaintext), false, false);
    assert_eq!(actual, expected);
}
