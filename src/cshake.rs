//! cSHAKE: SHAKE with function-name and customization framing.

use crate::{
    encoding::{bytepad_nonzero, encode_string},
    SpongeCore, SpongeReader, CSHAKE, FULL_ROUNDS, SHAKE,
};
use alloc::vec::Vec;

/// Sponge with construction-time framing that is replayed on every reset.
///
/// With an empty function name and customization this is plain SHAKE: suffix
/// `0x1F` and no framing. Otherwise the suffix is `0x04` and
/// `bytepad(rate, encode_string(N) || encode_string(S))` is absorbed before
/// any user data.
#[derive(Clone)]
pub(crate) struct CShakeState {
    state: SpongeCore,
    prefix: Vec<u8>,
}

impl CShakeState {
    pub(crate) fn new(
        rate: usize,
        function_name: &[u8],
        customization: &[u8],
        digest_size: usize,
    ) -> Self {
        if function_name.is_empty() && customization.is_empty() {
            return Self {
                state: SpongeCore::with_rate(SHAKE, rate, digest_size, FULL_ROUNDS),
                prefix: Vec::new(),
            };
        }

        let prefix = bytepad_nonzero(
            rate,
            &[&encode_string(function_name), &encode_string(customization)],
        );
        let mut state = SpongeCore::with_rate(CSHAKE, rate, digest_size, FULL_ROUNDS);
        state.update(&prefix);
        Self { state, prefix }
    }

    /// Absorbs more construction-time framing (KMAC key block, ParallelHash block size).
    pub(crate) fn frame(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
        self.prefix.extend_from_slice(bytes);
    }

    #[inline]
    pub(crate) fn update(&mut self, inp: &[u8]) {
        self.state.update(inp);
    }

    pub(crate) fn reset(&mut self) {
        self.state.reset();
        self.state.update(&self.prefix);
    }

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.state.size()
    }

    #[inline]
    pub(crate) fn block_size(&self) -> usize {
        self.state.block_size()
    }

    #[inline]
    pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
        self.state.finalize_reader()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for CShakeState {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.prefix.zeroize();
    }
}

macro_rules! impl_cshake {
    ($name:ident, $rate:literal, $alg_name:expr) => {
        #[doc = concat!($alg_name, ", customizable SHAKE.")]
        #[derive(Clone)]
        pub struct $name {
            inner: CShakeState,
        }

        impl $name {
            /// Block size.
            pub const BSZ: usize = $rate;

            /// Creates an instance framed with `function_name` and `customization`.
            ///
            /// Both empty yields plain SHAKE.
            pub fn new(function_name: &[u8], customization: &[u8], digest_size: usize) -> Self {
                Self { inner: CShakeState::new($rate, function_name, customization, digest_size) }
            }

            /// Absorbs `inp`.
            #[inline]
            pub fn update(&mut self, inp: &[u8]) {
                self.inner.update(inp);
            }

            /// Returns to the freshly framed state.
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

            /// One-shot: `out.len()` bytes of cSHAKE over `inp`.
            pub fn digest_into(inp: &[u8], function_name: &[u8], customization: &[u8], out: &mut [u8]) {
                let mut this = Self::new(function_name, customization, out.len());
                this.update(inp);
                this.finalize_reader().squeeze(out);
            }

            #[inline]
            pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
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

impl_cshake!(CShake128, 168, "cSHAKE128");
impl_cshake!(CShake256, 136, "cSHAKE256");
