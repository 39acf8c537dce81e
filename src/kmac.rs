//! KMAC: keyed cSHAKE.

use crate::{
    cshake::CShakeState,
    encoding::{bytepad_nonzero, encode_string, right_encode},
    SpongeReader,
};

macro_rules! impl_kmac {
    ($name:ident, $rate:literal, $alg_name:expr) => {
        #[doc = concat!($alg_name, " message authentication code.")]
        ///
        /// [`new`](Self::new) binds the output length into the result;
        /// [`new_xof`](Self::new_xof) is the XOF flavour that encodes a length of zero.
        #[derive(Clone)]
        pub struct $name {
            inner: CShakeState,
            append_size: bool,
        }

        impl $name {
            /// Block size.
            pub const BSZ: usize = $rate;

            /// Fixed-length KMAC producing `digest_size` bytes.
            pub fn new(key: &[u8], customization: &[u8], digest_size: usize) -> Self {
                Self::with_policy(key, customization, digest_size, true)
            }

            /// KMACXOF: the output length is not bound into the result.
            pub fn new_xof(key: &[u8], customization: &[u8], digest_size: usize) -> Self {
                Self::with_policy(key, customization, digest_size, false)
            }

            fn with_policy(key: &[u8], customization: &[u8], digest_size: usize, append_size: bool) -> Self {
                let mut inner = CShakeState::new($rate, b"KMAC", customization, digest_size);
                inner.frame(&bytepad_nonzero($rate, &[&encode_string(key)]));
                Self { inner, append_size }
            }

            /// Absorbs `inp`.
            #[inline]
            pub fn update(&mut self, inp: &[u8]) {
                self.inner.update(inp);
            }

            /// Returns to the freshly keyed state.
            #[inline]
            pub fn reset(&mut self) {
                self.inner.reset();
            }

            /// Output length of `sum` in bytes.
            #[inline]
            pub fn size(&self) -> usize {
                self.inner.size()
            }

            /// Rate in bytes.
            #[inline]
            pub fn block_size(&self) -> usize {
                self.inner.block_size()
            }

            /// One-shot: a fixed-length tag of `out.len()` bytes over `inp`.
            pub fn mac_into(key: &[u8], inp: &[u8], customization: &[u8], out: &mut [u8]) {
                let mut this = Self::new(key, customization, out.len());
                this.update(inp);
                this.finalize_reader().squeeze(out);
            }

            pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
                let bits = if self.append_size { 8 * self.size() as u64 } else { 0 };
                let mut b = [0u8; 9];
                self.inner.update(right_encode(bits, &mut b));
                self.inner.finalize_reader()
            }
        }

        impl_hash!($name);
        impl_xof!($name);

        impl ::digest::core_api::AlgorithmName for $name {
            #[inline]
            fn write_alg_name(f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($alg_name)
            }
        }
    };
}

impl_kmac!(Kmac128, 168, "KMAC128");
impl_kmac!(Kmac256, 136, "KMAC256");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_policy_separates_outputs() {
        let mut fixed = Kmac128::new(b"key", b"", 32);
        let mut xof = Kmac128::new_xof(b"key", b"", 32);
        fixed.update(b"data");
        xof.update(b"data");
        assert_ne!(fixed.sum(), xof.sum());
    }

    #[test]
    fn fixed_output_depends_on_length() {
        let short = Kmac256::new(b"key", b"", 32).sum();
        let long = Kmac256::new(b"key", b"", 64).sum();
        assert_ne!(short[..], long[..32]);

        let short = Kmac256::new_xof(b"key", b"", 32).sum();
        let long = Kmac256::new_xof(b"key", b"", 64).sum();
        assert_eq!(short[..], long[..32]);
    }

    #[test]
    fn key_is_replayed_on_reset() {
        let fresh = Kmac128::new(b"secret", b"app", 32);
        let mut used = fresh.clone();
        used.update(b"message");
        used.reset();
        assert_eq!(used.sum(), fresh.sum());
        assert_ne!(Kmac128::new(b"other", b"app", 32).sum(), fresh.sum());
    }
}
