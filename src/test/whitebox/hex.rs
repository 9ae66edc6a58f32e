use crate::{parse_state, HexParseError};

#[test]
fn parses_full_width_state() {
    let state = parse_state("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    assert_eq!(
        state,
        [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]
    );
}

#[test]
fn left_zero_pads_short_input() {
    let state = parse_state("1").unwrap();
    assert_eq!(state, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
}

#[test]
fn strips_interleaved_whitespace() {
    let spaced = parse_state("2b7e1516 28aed2a6 abf71588 09cf4f3c").unwrap();
    let unspaced = parse_state("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    assert_eq!(spaced, unspaced);
}

/// Boundary test: empty input is accepted as the all-zero state.
#[test]
fn accepts_empty_input_as_all_zero_state() {
    assert_eq!(parse_state("").unwrap(), [0u8; 16]);
}

/// Boundary test: 33 hex digits is one too many for a 16-byte state.
#[test]
fn rejects_33_hex_digits() {
    let too_long = "1".repeat(33);
    match parse_state(&too_long) {
        Err(HexParseError::TooLong { digits }) => assert_eq!(digits, 33),
        other => panic!("expected TooLong, got {other:?}"),
    }
}

#[test]
fn rejects_invalid_digit() {
    match parse_state("zz") {
        Err(HexParseError::InvalidDigit { found }) => assert_eq!(found, 'z'),
        other => panic!("expected InvalidDigit, got {other:?}"),
    }
}
