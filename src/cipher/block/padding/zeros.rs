use crate::Plaintext;

/// Pads with zero bytes up to the next multiple of the block size.
///
/// Ambiguous if the plaintext itself ends in zero bytes: those are
/// indistinguishable from padding and will be stripped on [`unpad`](
/// super::Padding::unpad). Suitable only when the plaintext format rules this
/// out (e.g. zero-terminated strings padded beyond their terminator).
#[derive(Debug, Default, Clone, Copy)]
pub struct Zeros;

impl super::Padding for Zeros {
    type Err = std::convert::Infallible;

    fn pad(&self, mut data: Plaintext<Vec<u8>>, n: usize) -> Plaintext<Vec<u8>> {
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
        Ok(data)
    }
}
