use crate::{load_bundle, save_bundle, source_listing, whitebox::interpret, Generator};

const KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const PLAINTEXT: [u8; 16] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
];

/// A bundle saved to disk and reloaded interprets identically to the
/// original, not merely field-for-field equal.
#[test]
fn persisted_bundle_interprets_identically() {
    let bundle = Generator::new(KEY, true, true).encryption_bundle();
    let expected = interpret(&bundle, PLAINTEXT, false, false);

    let path = std::env::temp_dir().join(format!("whitebox-bundle-test-{}.bin", std::process::id()));
    save_bundle(&bundle, &path).unwrap();
    let reloaded = load_bundle(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(interpret(&reloaded, PLAINTEXT, false, false), expected);
}

#[test]
fn source_listing_contains_every_table_name() {
    let bundle = Generator::new(KEY, false, false).encryption_bundle();
    let listing = source_listing(&bundle);
    for name in ["FINAL_T_BOXES", "TYI", "XOR", "MIXING", "MIXING_XOR", "USES_MIXING"] {
        assert!(listing.contains(name), "listing missing {name}");
    }
}
