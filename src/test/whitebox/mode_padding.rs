//! Round-trips a fresh [`WhiteBox`] through every valid mode/padding
//! combination: the four paddings over ECB and CBC, and CTR (which has no
//! padding parameter at all, so it only ever runs with no padding).

use crate::{test::cipher::test, Cbc, Ctr, Ecb, NoPadding, OneAndZeros, Pkcs7, WhiteBox, Zeros};

const KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];
const IV: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

fn white_box() -> WhiteBox {
    WhiteBox::new(KEY, true, true)
}

#[test]
fn ecb_no_padding() {
    test(Ecb::new(white_box(), NoPadding::default()), 16);
}

#[test]
fn ecb_zeros() {
    test(Ecb::new(white_box(), Zeros::default()), 10);
}

#[test]
fn ecb_pkcs7() {
    test(Ecb::new(white_box(), Pkcs7::default()), 10);
}

#[test]
fn ecb_one_and_zeros() {
    test(Ecb::new(white_box(), OneAndZeros::default()), 10);
}

#[test]
fn cbc_no_padding() {
    test(Cbc::new(white_box(), NoPadding::default(), IV), 16);
}

#[test]
fn cbc_zeros() {
    test(Cbc::new(white_box(), Zeros::default(), IV), 10);
}

#[test]
fn cbc_pkcs7() {
    test(Cbc::new(white_box(), Pkcs7::default(), IV), 10);
}

#[test]
fn cbc_one_and_zeros() {
    test(Cbc::new(white_box(), OneAndZeros::default(), IV), 10);
}

#[test]
fn ctr_round_trips() {
    let ctr = Ctr::new(white_box(), 1).unwrap();
    test(ctr, 10);
}
