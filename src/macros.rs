macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Operations shared by every hash object.
///
/// Expects inherent `update`, `reset`, `size` and
/// `finalize_reader(&mut self) -> SpongeReader` on `$name`.
macro_rules! impl_hash {
    ($name:ident) => {
        impl $name {
            /// Finalizes in place and returns [`size`](Self::size) bytes.
            ///
            /// The finalization is consumed: a second call pads the already
            /// squeezed state again and yields a different value.
            pub fn sum_in(&mut self) -> ::alloc::vec::Vec<u8> {
                let mut out = ::alloc::vec![0; self.size()];
                self.finalize_reader().squeeze(&mut out);
                out
            }

            /// Finalizes a copy and returns [`size`](Self::size) bytes; `self` is unchanged.
            #[inline]
            pub fn sum(&self) -> ::alloc::vec::Vec<u8> {
                self.clone().sum_in()
            }

            /// Writes `out.len()` bytes of output from a finalized copy.
            #[inline]
            pub fn sum_into(&self, out: &mut [u8]) {
                self.clone().finalize_reader().squeeze(out);
            }
        }

        impl ::core::fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(concat!(stringify!($name), " { ... }"))
            }
        }

        impl ::digest::HashMarker for $name {}

        impl ::digest::Update for $name {
            #[inline]
            fn update(&mut self, data: &[u8]) {
                $name::update(self, data);
            }
        }

        impl ::digest::Reset for $name {
            #[inline]
            fn reset(&mut self) {
                $name::reset(self);
            }
        }
    };
}

/// `ExtendableOutput` plumbing for hash objects built by [`impl_hash!`].
macro_rules! impl_xof {
    ($name:ident) => {
        impl ::digest::ExtendableOutput for $name {
            type Reader = $crate::SpongeReader;

            #[inline]
            fn finalize_xof(mut self) -> Self::Reader {
                self.finalize_reader()
            }
        }

        impl ::digest::ExtendableOutputReset for $name {
            #[inline]
            fn finalize_xof_reset(&mut self) -> Self::Reader {
                let reader = self.finalize_reader();
                $name::reset(self);
                reader
            }
        }
    };
}

/// Fixed-output Keccak/SHA-3 hasher implementing the full `Digest` API.
macro_rules! impl_sha3 {
    ($name:ident, $output_size:ident, $rate:ident, $pad:expr, $alg_name:expr $(,)?) => {
        #[doc = concat!($alg_name, " hasher state.")]
        #[derive(Clone)]
        pub struct $name {
            state: $crate::SpongeCore,
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self {
                    state: $crate::SpongeCore::with_rate(
                        $pad,
                        <::digest::consts::$rate as ::digest::typenum::Unsigned>::USIZE,
                        <::digest::consts::$output_size as ::digest::typenum::Unsigned>::USIZE,
                        $crate::FULL_ROUNDS,
                    ),
                }
            }
        }

        impl $name {
            /// Output length.
            pub const OUT: usize = <::digest::consts::$output_size as ::digest::typenum::Unsigned>::USIZE;
            /// Block size.
            pub const BSZ: usize = <::digest::consts::$rate as ::digest::typenum::Unsigned>::USIZE;
            /// Padding byte.
            pub const PAD: u8 = $pad;

            /// Creates a fresh hasher.
            #[inline]
            pub fn new() -> Self {
                Self::default()
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
            pub const fn size(&self) -> usize {
                Self::OUT
            }

            /// Rate in bytes.
            #[inline]
            pub const fn block_size(&self) -> usize {
                Self::BSZ
            }

            /// One-shot hash of `inp`.
            #[inline]
            pub fn digest(
                inp: &[u8],
            ) -> [u8; <::digest::consts::$output_size as ::digest::typenum::Unsigned>::USIZE] {
                let mut this = Self::new();
                this.update(inp);
                let mut out = [0; <::digest::consts::$output_size as ::digest::typenum::Unsigned>::USIZE];
                this.state.finalize_into(&mut out);
                out
            }

            #[inline]
            pub(crate) fn finalize_reader(&mut self) -> $crate::SpongeReader {
                self.state.finalize_reader()
            }
        }

        impl_hash!($name);

        impl ::digest::core_api::AlgorithmName for $name {
            #[inline]
            fn write_alg_name(f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($alg_name)
            }
        }

        impl ::digest::core_api::BlockSizeUser for $name {
            type BlockSize = ::digest::consts::$rate;
        }

        impl ::digest::OutputSizeUser for $name {
            type OutputSize = ::digest::consts::$output_size;
        }

        impl ::digest::FixedOutput for $name {
            #[inline]
            fn finalize_into(mut self, out: &mut ::digest::Output<Self>) {
                self.state.finalize_into(out);
            }
        }

        impl ::digest::FixedOutputReset for $name {
            #[inline]
            fn finalize_into_reset(&mut self, out: &mut ::digest::Output<Self>) {
                self.state.finalize_into(out);
                self.state.reset();
            }
        }
    };

    (
        $name:ident, $output_size:ident, $rate:ident, $pad:expr, $alg_name:expr, $oid:literal $(,)?
    ) => {
        impl_sha3!($name, $output_size, $rate, $pad, $alg_name);

        #[cfg(feature = "oid")]
        #[cfg_attr(docsrs, doc(cfg(feature = "oid")))]
        impl ::digest::const_oid::AssociatedOid for $name {
            const OID: ::digest::const_oid::ObjectIdentifier =
                ::digest::const_oid::ObjectIdentifier::new_unwrap($oid);
        }
    };
}
