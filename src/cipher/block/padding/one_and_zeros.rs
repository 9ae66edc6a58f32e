use {crate::Plaintext, std::fmt};

/// ISO/IEC 7816-4 padding: append a single `0x80` byte, then zero bytes up to
/// the next multiple of the block size. If the data is already aligned, a
/// full block of padding (`0x80` followed by zeros) is added.
#[derive(Debug, Default, Clone, Copy)]
pub struct OneAndZeros;

impl super::Padding for OneAndZeros {
    type Err = InvalidPadding;

    fn pad(&self, mut data: Plaintext<Vec<u8>>, n: usize) -> Plaintext<Vec<u8>> {
        data.0.push(0x80);
        let rem = data.0.len() % n;
        if rem != 0 {
            data.0.extend(std::iter::repeat(0).take(n - rem));
        }
        data
    }

    fn unpad(&self, mut data: Plaintext<Vec<u8>>, _n: usize) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        while data.0.last() == Some(&0) {
            data.0.pop();
        }
        if data.0.pop() != Some(0x80) {
            return Err(InvalidPadding);
        }
        Ok(data)
    }
}

#[derive(Debug)]
pub struct InvalidPadding;

impl fmt::Display for InvalidPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid one-and-zeros padding")
    }
}

impl std::error::Error for InvalidPadding {}
