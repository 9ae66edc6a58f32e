use {crate::Plaintext, docext::docext, std::fmt};

/// Pkcs7 is a simple approach to padding.
///
/// If the message needs to be padded with $n$ bytes and the block size is $B$,
/// this padding scheme will append $n$ bytes with the value $n$. If $n = 0$,
/// then an entire block of padding is added, i.e. $B$ bytes with the value $B$.
///
/// # Examples
#[docext]
#[derive(Debug, Default, Clone, Copy)]
pub struct Pkcs7<const N: usize = 0>;

impl<const N: usize> super::Padding for Pkcs7<N> {
    type Err = InvalidPadding;

    fn pad(&self, mut data: Plaintext<Vec<u8>>, n: usize) -> Plaintext<Vec<u8>> {
        let pad_len = n - data.0.len() % n;
        data.0.extend(std::iter::repeat(pad_len as u8).take(pad_len));
        data
    }

    fn unpad(&self, mut data: Plaintext<Vec<u8>>, n: usize) -> Result<Plaintext<Vec<u8>>, Self::Err> {
        let pad_len = *data.0.last().ok_or(InvalidPadding)? as usize;
        if pad_len == 0 || pad_len > n || pad_len > data.0.len() {
            return Err(InvalidPadding);
        }
        if !data.0[data.0.len() - pad_len..].iter().all(|&b| b as usize == pad_len) {
            return Err(InvalidPadding);
        }
        data.0.truncate(data.0.len() - pad_len);
        Ok(data)
    }
}

#[derive(Debug)]
pub struct InvalidPadding;

impl fmt::Display for InvalidPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid pkcs7 padding")
    }
}

impl std::error::Error for InvalidPadding {}
