//! KangarooTwelve (KT128, RFC 9861): a tree hash over TurboSHAKE128.
//!
//! The input string is `S = M || C || length_encode(|C|)`. When `S` fits in
//! one 8192-byte chunk it is hashed directly with domain byte `0x07`.
//! Otherwise the first chunk stays in the final node, every further chunk is
//! condensed into a 32-byte chaining value with TurboSHAKE128 under domain
//! byte `0x0B`, and the final node becomes
//!
//! ```text
//! S_0 || 03 00 00 00 00 00 00 00 || CV_1 || ... || CV_n || length_encode(n) || FF FF
//! ```
//!
//! hashed with domain byte `0x06`.

use crate::{encoding::k12_length_encode, SpongeReader, TurboShake128};
use alloc::vec::Vec;

const CHUNK_SIZE: usize = 8192;
const CV_SIZE: usize = 32;

const SINGLE_NODE: u8 = 0x07;
const FINAL_NODE: u8 = 0x06;
const LEAF: u8 = 0x0B;

const FINAL_NODE_MARKER: [u8; 8] = [0x03, 0, 0, 0, 0, 0, 0, 0];
const FINAL_NODE_TERMINATOR: [u8; 2] = [0xff, 0xff];

/// KangarooTwelve with a customization string.
///
/// Input is routed chunk by chunk as it arrives: the first 8192 bytes go to
/// the final node, and each following chunk gets its own leaf sponge. A chunk
/// is opened only when input exceeds the previous one, so a message of exactly
/// 8192 bytes is still hashed as a single node. The chaining value of a leaf
/// is computed as soon as the next chunk is opened; only the current leaf is
/// kept as a live sponge.
#[derive(Clone)]
pub struct KangarooTwelve {
    main: TurboShake128,
    leaf: Option<TurboShake128>,
    cvs: Vec<[u8; CV_SIZE]>,
    /// Bytes routed into the current chunk.
    fill: usize,
    customization: Vec<u8>,
}

impl KangarooTwelve {
    /// Block size.
    pub const BSZ: usize = TurboShake128::BSZ;

    /// KT128 producing `digest_size` bytes, customized with `customization`.
    pub fn new(customization: &[u8], digest_size: usize) -> Self {
        Self {
            main: TurboShake128::with_domain_unchecked(SINGLE_NODE, digest_size),
            leaf: None,
            cvs: Vec::new(),
            fill: 0,
            customization: customization.to_vec(),
        }
    }

    /// One-shot: `out.len()` bytes of KT128 over `message` and `customization`.
    pub fn digest_into(message: &[u8], customization: &[u8], out: &mut [u8]) {
        let mut this = Self::new(customization, out.len());
        this.update(message);
        this.finalize_reader().squeeze(out);
    }

    /// Absorbs `inp`, opening new leaves at every 8192-byte boundary it crosses.
    pub fn update(&mut self, mut inp: &[u8]) {
        while !inp.is_empty() {
            if self.fill == CHUNK_SIZE {
                self.open_leaf();
            }
            let take = (CHUNK_SIZE - self.fill).min(inp.len());
            let (head, tail) = inp.split_at(take);
            match &mut self.leaf {
                Some(leaf) => leaf.update(head),
                None => self.main.update(head),
            }
            self.fill += take;
            inp = tail;
        }
    }

    fn open_leaf(&mut self) {
        if let Some(mut done) = self.leaf.take() {
            self.cvs.push(chaining_value(&mut done));
        }
        self.leaf = Some(TurboShake128::with_domain_unchecked(LEAF, CV_SIZE));
        self.fill = 0;
        trace!(chunk = self.cvs.len() + 1, "KangarooTwelve leaf opened");
    }

    /// Returns to the empty message with the same customization.
    pub fn reset(&mut self) {
        self.main.reset();
        self.leaf = None;
        self.cvs.clear();
        self.fill = 0;
    }

    /// Output length of `sum` in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.main.size()
    }

    /// Rate in bytes.
    #[inline]
    pub fn block_size(&self) -> usize {
        Self::BSZ
    }

    /// Number of leaves opened so far (chunks beyond the first).
    #[inline]
    pub fn chunks(&self) -> usize {
        self.cvs.len() + usize::from(self.leaf.is_some())
    }

    pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
        let customization = core::mem::take(&mut self.customization);
        let mut b = [0u8; 9];
        self.update(&customization);
        self.update(k12_length_encode(customization.len() as u64, &mut b));
        self.customization = customization;

        let Some(mut last) = self.leaf.take() else {
            return self.main.finalize_reader_with(SINGLE_NODE);
        };
        self.cvs.push(chaining_value(&mut last));

        self.main.update(&FINAL_NODE_MARKER);
        for cv in &self.cvs {
            self.main.update(cv);
        }
        self.main.update(k12_length_encode(self.cvs.len() as u64, &mut b));
        self.main.update(&FINAL_NODE_TERMINATOR);
        trace!(chunks = self.cvs.len(), "KangarooTwelve final node");
        self.main.finalize_reader_with(FINAL_NODE)
    }
}

fn chaining_value(leaf: &mut TurboShake128) -> [u8; CV_SIZE] {
    let mut cv = [0u8; CV_SIZE];
    leaf.finalize_reader().squeeze(&mut cv);
    cv
}

impl_hash!(KangarooTwelve);
impl_xof!(KangarooTwelve);

impl digest::core_api::AlgorithmName for KangarooTwelve {
    #[inline]
    fn write_alg_name(f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("KT128")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_open_only_past_boundary() {
        let mut k = KangarooTwelve::new(b"", 32);
        k.update(&[0; CHUNK_SIZE]);
        assert_eq!(k.chunks(), 0);
        k.update(&[0; 1]);
        assert_eq!(k.chunks(), 1);
        k.update(&[0; 2 * CHUNK_SIZE]);
        assert_eq!(k.chunks(), 3);
    }

    #[test]
    fn sum_does_not_open_leaves() {
        let mut k = KangarooTwelve::new(b"custom", 32);
        k.update(&[0xaa; CHUNK_SIZE]);
        let first = k.sum();
        assert_eq!(k.chunks(), 0);
        assert_eq!(k.sum(), first);
    }

    #[test]
    fn customization_spills_into_leaf() {
        // 8190 message bytes + 5 customization bytes + 2 length bytes cross the boundary.
        let message = [0x11; CHUNK_SIZE - 2];
        let mut streamed = KangarooTwelve::new(b"abcde", 32);
        streamed.update(&message);

        let mut split = KangarooTwelve::new(b"abcde", 32);
        split.update(&message[..100]);
        split.update(&message[100..]);

        assert_eq!(streamed.sum(), split.sum());
        assert_ne!(streamed.sum(), KangarooTwelve::new(b"abcd", 32).sum());
    }

    #[test]
    fn reset_keeps_customization() {
        let fresh = KangarooTwelve::new(b"S", 32);
        let mut used = fresh.clone();
        used.update(&[1; 3 * CHUNK_SIZE]);
        used.reset();
        assert_eq!(used.chunks(), 0);
        assert_eq!(used.sum(), fresh.sum());
    }
}
