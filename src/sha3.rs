//! FIPS 202 parameter sets: Keccak, SHA-3 and SHAKE.

use crate::{Result, SpongeCore, SpongeReader, FULL_ROUNDS, KECCAK, SHA3, SHAKE};

impl_sha3!(Keccak224, U28, U144, KECCAK, "Keccak-224");
impl_sha3!(Keccak256, U32, U136, KECCAK, "Keccak-256");
impl_sha3!(Keccak384, U48, U104, KECCAK, "Keccak-384");
impl_sha3!(Keccak512, U64, U72, KECCAK, "Keccak-512");

impl_sha3!(Sha3_224, U28, U144, SHA3, "SHA3-224", "2.16.840.1.101.3.4.2.7");
impl_sha3!(Sha3_256, U32, U136, SHA3, "SHA3-256", "2.16.840.1.101.3.4.2.8");
impl_sha3!(Sha3_384, U48, U104, SHA3, "SHA3-384", "2.16.840.1.101.3.4.2.9");
impl_sha3!(Sha3_512, U64, U72, SHA3, "SHA3-512", "2.16.840.1.101.3.4.2.10");

/// Original Keccak padding with a caller-chosen digest size and capacity.
///
/// `Keccak::new(32)` is Keccak-256; [`Keccak::with_capacity`] overrides the
/// capacity independently of the digest size.
#[derive(Clone)]
pub struct Keccak {
    state: SpongeCore,
}

impl Keccak {
    /// Keccak with a `digest_size`-byte output and a capacity of the same size.
    pub fn new(digest_size: usize) -> Result<Self> {
        Self::with_capacity(digest_size, digest_size)
    }

    /// Keccak with independent digest size and capacity, both in bytes.
    pub fn with_capacity(digest_size: usize, capacity: usize) -> Result<Self> {
        Ok(Self { state: SpongeCore::new(KECCAK, capacity, digest_size, FULL_ROUNDS)? })
    }

    /// Absorbs `inp`.
    #[inline]
    pub fn update(&mut self, inp: &[u8]) {
        self.state.update(inp);
    }

    /// Returns the hasher to its initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Digest length in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.state.size()
    }

    /// Rate in bytes.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.state.block_size()
    }

    #[inline]
    pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
        self.state.finalize_reader()
    }
}

impl_hash!(Keccak);

macro_rules! impl_shake {
    ($name:ident, $capacity:literal, $alg_name:expr, $oid:literal) => {
        #[doc = concat!($alg_name, " extendable-output function.")]
        #[derive(Clone)]
        pub struct $name {
            state: SpongeCore,
        }

        /// `sum` yields twice the capacity, the full security strength.
        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(2 * $capacity)
            }
        }

        impl $name {
            /// Capacity in bytes.
            pub const CAPACITY: usize = $capacity;
            /// Block size.
            pub const BSZ: usize = 200 - 2 * $capacity;

            #[doc = concat!($alg_name, " producing `digest_size` bytes from `sum`.")]
            #[inline]
            pub const fn new(digest_size: usize) -> Self {
                Self { state: SpongeCore::with_rate(SHAKE, Self::BSZ, digest_size, FULL_ROUNDS) }
            }

            /// Absorbs `inp`.
            #[inline]
            pub fn update(&mut self, inp: &[u8]) {
                self.state.update(inp);
            }

            /// Returns the hasher to its initial state.
            #[inline]
            pub fn reset(&mut self) {
                self.state.reset();
            }

            /// Output length of `sum` in bytes.
            #[inline]
            pub const fn size(&self) -> usize {
                self.state.size()
            }

            /// Rate in bytes.
            #[inline]
            pub const fn block_size(&self) -> usize {
                Self::BSZ
            }

            /// One-shot: `out.len()` bytes of output for `inp`.
            pub fn digest_into(inp: &[u8], out: &mut [u8]) {
                let mut this = Self::new(out.len());
                this.update(inp);
                this.state.finalize_into(out);
            }

            #[inline]
            pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
                self.state.finalize_reader()
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

        #[cfg(feature = "oid")]
        #[cfg_attr(docsrs, doc(cfg(feature = "oid")))]
        impl ::digest::const_oid::AssociatedOid for $name {
            const OID: ::digest::const_oid::ObjectIdentifier =
                ::digest::const_oid::ObjectIdentifier::new_unwrap($oid);
        }
    };
}

impl_shake!(Shake128, 16, "SHAKE128", "2.16.840.1.101.3.4.2.11");
impl_shake!(Shake256, 32, "SHAKE256", "2.16.840.1.101.3.4.2.12");
