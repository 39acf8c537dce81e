//! TupleHash: every `update` call is one unambiguously framed tuple element.

use crate::{
    cshake::CShakeState,
    encoding::{left_encode, right_encode},
    SpongeReader,
};

macro_rules! impl_tuple_hash {
    ($name:ident, $rate:literal, $alg_name:expr) => {
        #[doc = concat!($alg_name, " over a sequence of byte strings.")]
        ///
        /// Each [`update`](Self::update) absorbs `encode_string(data)`, so
        /// `update(a); update(b)` hashes the tuple `(a, b)` and differs from
        /// `update(a || b)`.
        #[derive(Clone)]
        pub struct $name {
            inner: CShakeState,
            append_size: bool,
        }

        impl $name {
            /// Block size.
            pub const BSZ: usize = $rate;

            /// Fixed-length TupleHash producing `digest_size` bytes.
            pub fn new(customization: &[u8], digest_size: usize) -> Self {
                Self { inner: CShakeState::new($rate, b"TupleHash", customization, digest_size), append_size: true }
            }

            /// TupleHashXOF: the output length is not bound into the result.
            pub fn new_xof(customization: &[u8], digest_size: usize) -> Self {
                Self { inner: CShakeState::new($rate, b"TupleHash", customization, digest_size), append_size: false }
            }

            /// Absorbs `data` as the next tuple element.
            pub fn update(&mut self, data: &[u8]) {
                let mut b = [0u8; 9];
                self.inner.update(left_encode(8 * data.len() as u64, &mut b));
                self.inner.update(data);
            }

            /// Returns to the empty tuple.
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

            /// One-shot hash of a whole tuple.
            pub fn digest(tuple: &[&[u8]], customization: &[u8], digest_size: usize) -> ::alloc::vec::Vec<u8> {
                let mut this = Self::new(customization, digest_size);
                for element in tuple {
                    this.update(element);
                }
                this.sum_in()
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

impl_tuple_hash!(TupleHash128, 168, "TupleHash128");
impl_tuple_hash!(TupleHash256, 136, "TupleHash256");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_not_concatenation() {
        let joined = TupleHash128::digest(&[b"ab"], b"", 32);
        let split = TupleHash128::digest(&[b"a", b"b"], b"", 32);
        assert_ne!(joined, split);
    }

    #[test]
    fn empty_element_is_not_nothing() {
        let none = TupleHash256::digest(&[], b"", 64);
        let empty = TupleHash256::digest(&[b""], b"", 64);
        assert_ne!(none, empty);
    }

    #[test]
    fn xof_prefix_stable() {
        let mut short = TupleHash128::new_xof(b"S", 16);
        let mut long = TupleHash128::new_xof(b"S", 48);
        short.update(b"x");
        long.update(b"x");
        assert_eq!(short.sum()[..], long.sum()[..16]);
    }
}
