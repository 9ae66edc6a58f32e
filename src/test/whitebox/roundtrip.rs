use crate::{whitebox::interpret, Generator};

const KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const PLAINTEXT: [u8; 16] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
];

fn plain_aes_encrypt(key: [u8; 16], plaintext: [u8; 16]) -> [u8; 16] {
    use crate::{Aes128, BlockEncrypt, Ciphertext, Key, Plaintext};
    let Ciphertext(out) = Aes128::default().encrypt(Plaintext(plaintext), Key(key));
    out
}

#[test]
fn bare_tables_match_plain_aes_encryption() {
    let bundle = Generator::new(KEY, false, false).encryption_bundle();
    let out = interpret(&bundle, PLAINTEXT, false, false);
    assert_eq!(out, plain_aes_encrypt(KEY, PLAINTEXT));
}

#[test]
fn bare_tables_match_plain_aes_decryption() {
    let ciphertext = plain_aes_encrypt(KEY, PLAINTEXT);
    let bundle = Generator::new(KEY, false, false).decryption_bundle();
    let out = interpret(&bundle, ciphertext, true, false);
    assert_eq!(out, PLAINTEXT);
}

#[test]
fn internal_encoding_round_trips() {
    let generator = Generator::new(KEY, true, false);
    let enc = generator.encryption_bundle();
    let dec = generator.decryption_bundle();
    let ciphertext = interpret(&enc, PLAINTEXT, false, false);
    assert_eq!(interpret(&dec, ciphertext, true, false), PLAINTEXT);
}

#[test]
fn mixing_bijections_round_trip() {
    let generator = Generator::new(KEY, true, true);
    let enc = generator.encryption_bundle();
    let dec = generator.decryption_bundle();
    let ciphertext = interpret(&enc, PLAINTEXT, false, false);
    assert_eq!(interpret(&dec, ciphertext, true, false), PLAINTEXT);
}

#[test]
fn mixing_bijections_match_plain_aes() {
    let bundle = Generator::new(KEY, true, true).encryption_bundle();
    let out = interpret(&bundle, PLAINTEXT, false, false);
    assert_eq!(out, plain_aes_encrypt(KEY, PLAINTEXT));
}

/// Round-trip identity across every `(use_internal_encoding,
/// use_mixing_bijections)` configuration.
#[test]
fn round_trips_in_every_configuration() {
    for use_internal_encoding in [false, true] {
        for use_mixing_bijections in [false, true] {
            let generator = Generator::new(KEY, use_internal_encoding, use_mixing_bijections);
            let enc = generator.encryption_bundle();
            let dec = generator.decryption_bundle();
            let ciphertext = interpret(&enc, PLAINTEXT, false, false);
            assert_eq!(
                interpret(&dec, ciphertext, true, false),
                PLAINTEXT,
                "round trip failed for use_internal_encoding={use_internal_encoding}, \
                 use_mixing_bijections={use_mixing_bijections}"
            );
            assert_eq!(
                interpret(&enc, PLAINTEXT, false, false),
                plain_aes_encrypt(KEY, PLAINTEXT),
                "mismatch against plain AES for use_internal_encoding={use_internal_encoding}, \
                 use_mixing_bijections={use_mixing_bijections}"
            );
        }
    }
}

/// Hand-checked `(key, plaintext, ciphertext)` vectors that must reproduce
/// under `interpret(encrypt_bundle(key), plaintext, false, false)`.
#[test]
fn known_vectors() {
    let vectors: [([u8; 16], [u8; 16], [u8; 16]); 4] = [
        (
            [
                0x54, 0x68, 0x61, 0x74, 0x73, 0x20, 0x6d, 0x79, 0x20, 0x4b, 0x75, 0x6e, 0x67, 0x20,
                0x46, 0x75,
            ],
            [
                0x54, 0x77, 0x6f, 0x20, 0x4f, 0x6e, 0x65, 0x20, 0x4e, 0x69, 0x6e, 0x65, 0x20, 0x54,
                0x77, 0x6f,
            ],
            [
                0x29, 0xc3, 0x50, 0x5f, 0x57, 0x14, 0x20, 0xf6, 0x40, 0x22, 0x99, 0xb3, 0x1a, 0x02,
                0x2d, 0x73,
            ],
        ),
        (
            KEY,
            PLAINTEXT,
            [
                0x3a, 0xd7, 0x7b, 0xb4, 0x0d, 0x7a, 0x36, 0x60, 0xa8, 0x9e, 0xca, 0xf3, 0x24, 0x66,
                0xef, 0x97,
            ],
        ),
        (
            KEY,
            [
                0xae, 0x2d, 0x8a, 0x57, 0x1e, 0x03, 0xac, 0x9c, 0x9e, 0xb7, 0x6f, 0xac, 0x45, 0xaf,
                0x8e, 0x51,
            ],
            [
                0xf5, 0xd3, 0xd5, 0x85, 0x03, 0xb9, 0x69, 0x9d, 0xe7, 0x85, 0x89, 0x5a, 0x96, 0xfd,
                0xba, 0xaf,
            ],
        ),
        (
            KEY,
            [
                0x30, 0xc8, 0x1c, 0x46, 0xa3, 0x5c, 0xe4, 0x11, 0xe5, 0xfb, 0xc1, 0x19, 0x1a, 0x0a,
                0x52, 0xef,
            ],
            [
                0x43, 0xb1, 0xcd, 0x7f, 0x59, 0x8e, 0xce, 0x23, 0x88, 0x1b, 0x00, 0xe3, 0xed, 0x03,
                0x06, 0x88,
            ],
        ),
    ];

    for (key, plaintext, ciphertext) in vectors {
        let bundle = Generator::new(key, false, false).encryption_bundle();
        assert_eq!(interpret(&bundle, plaintext, false, false), ciphertext);
    }
}

/// The generator's key schedule must match the FIPS-197 Appendix A.1 round
/// keys for this key.
#[test]
fn key_schedule_matches_fips_197() {
    let w = crate::aes::key_expansion::<4, 10, 16, 176>(KEY);

    let round_key_1 = [
        0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c, 0x76,
        0x05,
    ];
    assert_eq!(&w[16..32], &round_key_1);

    let round_key_10 = [
        0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63, 0x0c,
        0xa6,
    ];
    assert_eq!(&w[160..176], &round_key_10);
}
