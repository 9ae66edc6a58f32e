use crate::Plaintext;

/// No padding at all.
///
/// Only valid when the plaintext is already a multiple of the block size, or
/// for [modes](crate::BlockMode) that don't require block alignment (e.g.
/// [`Ctr`](crate::Ctr)). [`Ctr`](crate::Ctr) rejects every other padding
/// scheme for this reason.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPadding;

impl super::Padding for NoPadding {
    type Err = std::convert::Infallible;

    fn pad(&self, data: Plaintext<Vec<u8>>, _n: usize) -> Plaintext<Vec<u8>> {
        data
    }

    fn unpad(&self, data: Plaintext<Vec<u8>>, _n: usize) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        Ok(data)
    }
}
