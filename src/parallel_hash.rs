//! ParallelHash: cSHAKE over the chaining values of fixed-size message blocks.

use crate::{
    cshake::CShakeState,
    encoding::{left_encode, right_encode},
    Error, Result, SpongeCore, SpongeReader, FULL_ROUNDS, SHAKE,
};
use alloc::vec::Vec;

macro_rules! impl_parallel_hash {
    ($name:ident, $rate:literal, $cv_size:literal, $alg_name:expr) => {
        #[doc = concat!($alg_name, " with a caller-chosen block size.")]
        ///
        /// The message is cut into blocks of `B` bytes; each block is hashed
        #[doc = concat!("independently with SHAKE into a ", stringify!($cv_size), "-byte chaining value,")]
        /// and the chaining values are absorbed into the outer cSHAKE in
        /// block order. Blocks are hashed one after another on the calling
        /// thread, reusing a single sub-sponge.
        #[derive(Clone)]
        pub struct $name {
            inner: CShakeState,
            sub: SpongeCore,
            block: Vec<u8>,
            block_len: usize,
            blocks: u64,
            append_size: bool,
        }

        impl $name {
            /// Rate of the outer sponge.
            pub const BSZ: usize = $rate;
            /// Chaining value length in bytes.
            pub const CV_SIZE: usize = $cv_size;

            /// Fixed-length ParallelHash over `block_len`-byte blocks.
            pub fn new(block_len: usize, customization: &[u8], digest_size: usize) -> Result<Self> {
                Self::with_policy(block_len, customization, digest_size, true)
            }

            /// ParallelHashXOF: the output length is not bound into the result.
            pub fn new_xof(block_len: usize, customization: &[u8], digest_size: usize) -> Result<Self> {
                Self::with_policy(block_len, customization, digest_size, false)
            }

            fn with_policy(
                block_len: usize,
                customization: &[u8],
                digest_size: usize,
                append_size: bool,
            ) -> Result<Self> {
                if block_len == 0 {
                    debug!("rejected empty ParallelHash block");
                    return Err(Error::InvalidBlockSize);
                }
                let mut inner = CShakeState::new($rate, b"ParallelHash", customization, digest_size);
                let mut b = [0u8; 9];
                inner.frame(left_encode(block_len as u64, &mut b));
                Ok(Self {
                    inner,
                    sub: SpongeCore::with_rate(SHAKE, $rate, $cv_size, FULL_ROUNDS),
                    block: Vec::new(),
                    block_len,
                    blocks: 0,
                    append_size,
                })
            }

            /// Absorbs `inp`, hashing every block it completes.
            pub fn update(&mut self, mut inp: &[u8]) {
                while !inp.is_empty() {
                    if self.block.is_empty() && inp.len() >= self.block_len {
                        let (head, tail) = inp.split_at(self.block_len);
                        self.absorb_block(head);
                        inp = tail;
                        continue;
                    }

                    let take = (self.block_len - self.block.len()).min(inp.len());
                    let (head, tail) = inp.split_at(take);
                    self.block.extend_from_slice(head);
                    inp = tail;

                    if self.block.len() == self.block_len {
                        let block = core::mem::take(&mut self.block);
                        self.absorb_block(&block);
                        self.block = block;
                        self.block.clear();
                    }
                }
            }

            fn absorb_block(&mut self, block: &[u8]) {
                let mut cv = [0u8; $cv_size];
                self.sub.reset();
                self.sub.update(block);
                self.sub.finalize_into(&mut cv);
                self.inner.update(&cv);
                self.blocks += 1;
                trace!(block = self.blocks, len = block.len(), "ParallelHash block absorbed");
            }

            /// Returns to the freshly framed state.
            pub fn reset(&mut self) {
                self.inner.reset();
                self.sub.reset();
                self.block.clear();
                self.blocks = 0;
            }

            /// Output length of `sum` in bytes.
            #[inline]
            pub fn size(&self) -> usize {
                self.inner.size()
            }

            /// Rate of the outer sponge in bytes.
            #[inline]
            pub fn block_size(&self) -> usize {
                self.inner.block_size()
            }

            /// Message block length `B` in bytes.
            #[inline]
            pub fn parallel_block_size(&self) -> usize {
                self.block_len
            }

            /// Number of message blocks hashed so far.
            #[inline]
            pub fn blocks(&self) -> u64 {
                self.blocks
            }

            /// One-shot: `out.len()` bytes of fixed-length ParallelHash over `inp`.
            pub fn digest_into(inp: &[u8], block_len: usize, customization: &[u8], out: &mut [u8]) -> Result<()> {
                let mut this = Self::new(block_len, customization, out.len())?;
                this.update(inp);
                this.finalize_reader().squeeze(out);
                Ok(())
            }

            pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
                if !self.block.is_empty() {
                    let block = core::mem::take(&mut self.block);
                    self.absorb_block(&block);
                    self.block = block;
                    self.block.clear();
                }

                let bits = if self.append_size { 8 * self.size() as u64 } else { 0 };
                let mut b = [0u8; 9];
                self.inner.update(right_encode(self.blocks, &mut b));
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

impl_parallel_hash!(ParallelHash128, 168, 32, "ParallelHash128");
impl_parallel_hash!(ParallelHash256, 136, 64, "ParallelHash256");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_block_size_rejected() {
        assert_eq!(ParallelHash128::new(0, b"", 32).unwrap_err(), Error::InvalidBlockSize);
        assert_eq!(ParallelHash256::new_xof(0, b"", 64).unwrap_err(), Error::InvalidBlockSize);
    }

    #[test]
    fn huge_block_size_is_accepted() {
        let mut h = ParallelHash128::new(usize::MAX, b"", 32).unwrap();
        assert_eq!(h.parallel_block_size(), usize::MAX);
        h.update(&[7; 100]);
        assert_eq!(h.blocks(), 0);
        assert_eq!(h.sum_in().len(), 32);
        assert_eq!(h.blocks(), 1);
    }

    #[test]
    fn counts_blocks_including_partial_tail() {
        let mut h = ParallelHash128::new(8, b"", 32).unwrap();
        h.update(&[1; 20]);
        assert_eq!(h.blocks(), 2);
        let before = h.clone();
        h.sum_in();
        assert_eq!(h.blocks(), 3);
        assert_eq!(before.blocks(), 2);
    }

    #[test]
    fn split_writes_match() {
        let data: Vec<u8> = (0..100u8).collect();
        let mut whole = ParallelHash256::new(7, b"S", 64).unwrap();
        whole.update(&data);

        let mut split = ParallelHash256::new(7, b"S", 64).unwrap();
        for chunk in data.chunks(3) {
            split.update(chunk);
        }
        assert_eq!(whole.sum(), split.sum());
    }

    #[test]
    fn sum_is_repeatable_with_pending_block() {
        let mut h = ParallelHash128::new(16, b"", 32).unwrap();
        h.update(&[9; 20]);
        assert_eq!(h.sum(), h.sum());
    }
}
