//! HopMAC: a keyed MAC from two KangarooTwelve passes.

use crate::{KangarooTwelve, SpongeReader};
use alloc::vec::Vec;

const INNER_SIZE: usize = 32;

/// HopMAC over KangarooTwelve.
///
/// The message is hashed with `KT128(M, customization)` into 32 bytes, and
/// the tag is `KT128(key, inner_digest)` truncated or extended to the outer
/// digest size.
#[derive(Clone)]
pub struct HopMac {
    inner: KangarooTwelve,
    key: Vec<u8>,
    digest_size: usize,
}

impl HopMac {
    /// HopMAC producing `digest_size`-byte tags.
    pub fn new(key: &[u8], customization: &[u8], digest_size: usize) -> Self {
        Self { inner: KangarooTwelve::new(customization, INNER_SIZE), key: key.to_vec(), digest_size }
    }

    /// Absorbs `inp` into the inner hash.
    #[inline]
    pub fn update(&mut self, inp: &[u8]) {
        self.inner.update(inp);
    }

    /// Returns to the empty message with the same key and customization.
    #[inline]
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Tag length in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.digest_size
    }

    /// Rate of the underlying sponge in bytes.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    /// One-shot: an `out.len()`-byte tag over `inp`.
    pub fn mac_into(key: &[u8], inp: &[u8], customization: &[u8], out: &mut [u8]) {
        let mut this = Self::new(key, customization, out.len());
        this.update(inp);
        this.finalize_reader().squeeze(out);
    }

    pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
        let inner_digest = self.inner.sum_in();
        let mut outer = KangarooTwelve::new(&inner_digest, self.digest_size);
        outer.update(&self.key);
        outer.finalize_reader()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for HopMac {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.key.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for HopMac {}

impl_hash!(HopMac);
impl_xof!(HopMac);

impl digest::core_api::AlgorithmName for HopMac {
    #[inline]
    fn write_alg_name(f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("HopMAC")
    }
}
