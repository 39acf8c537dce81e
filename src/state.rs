use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use core::fmt;
use keccak_p::{Buffer, MAX_ROUNDS, STATE_BYTES};

/// Largest rate a valid parameter set can produce (capacity of one byte).
const MAX_RATE: usize = STATE_BYTES - 2;

/// Generic Keccak sponge: absorb, pad with `suffix || 10*1`, squeeze.
///
/// The rate is `200 - 2 * capacity` bytes. Input is collected in a rate-sized
/// block buffer and XORed into the state one full block at a time; the
/// permutation runs exactly when a block completes, at which point the buffer
/// cursor returns to zero.
///
/// Finalization comes in two flavours:
/// - [`sum_in`](Self::sum_in) pads and permutes the receiver itself. Output
///   differs on every call, and further input continues from the squeezed state.
/// - [`sum`](Self::sum) finalizes a copy and leaves the receiver untouched.
#[derive(Clone)]
pub struct SpongeCore {
    a: Buffer,
    /// Cursor into `buf`; zero exactly when a permutation has just run.
    bufsz: usize,
    buf: [u8; MAX_RATE],
    rate: usize,
    rounds: usize,
    digest_size: usize,
    suffix: u8,
}

impl SpongeCore {
    /// Creates a sponge with `capacity` bytes of security (rate `200 - 2 * capacity`).
    ///
    /// `rounds` is the number of Keccak-p rounds per permutation: 24 for
    /// SHA-3 and friends, 12 for TurboSHAKE. The state starts all-zero.
    pub fn new(suffix: u8, capacity: usize, digest_size: usize, rounds: usize) -> Result<Self> {
        if capacity == 0 || capacity >= STATE_BYTES / 2 {
            debug!(capacity, "rejected sponge capacity");
            return Err(Error::InvalidCapacity { capacity });
        }
        Ok(Self::with_rate(suffix, STATE_BYTES - 2 * capacity, digest_size, rounds))
    }

    /// Same as [`new`](Self::new) with a rate that is known to be valid.
    #[inline]
    pub(crate) const fn with_rate(suffix: u8, rate: usize, digest_size: usize, rounds: usize) -> Self {
        debug_assert!(rate > 0 && rate <= MAX_RATE);
        Self {
            a: [0; 25],
            bufsz: 0,
            buf: [0; MAX_RATE],
            rate,
            rounds: if rounds > MAX_ROUNDS { MAX_ROUNDS } else { rounds },
            digest_size,
            suffix,
        }
    }

    /// Digest length produced by [`sum`](Self::sum) in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.digest_size
    }

    /// Rate in bytes.
    #[inline]
    pub const fn block_size(&self) -> usize {
        self.rate
    }

    /// Domain separation suffix XORed in before the final padding.
    #[inline]
    pub const fn suffix(&self) -> u8 {
        self.suffix
    }

    /// Keccak-p rounds per permutation.
    #[inline]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Bytes absorbed into the current, incomplete block.
    #[inline]
    pub const fn position(&self) -> usize {
        self.bufsz
    }

    /// Returns the sponge to its all-zero initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.a = [0; 25];
        self.buf = [0; MAX_RATE];
        self.bufsz = 0;
    }

    /// Absorbs `inp`. Arbitrarily long input may be split across any number of calls.
    pub fn update(&mut self, mut inp: &[u8]) {
        let bsz = self.rate;

        if inp.is_empty() {
            return;
        }

        let num = self.bufsz;
        if num != 0 {
            let rem = bsz - num;
            // Not enough to complete the pending block.
            if inp.len() < rem {
                self.buf[num..num + inp.len()].copy_from_slice(inp);
                self.bufsz += inp.len();
                return;
            }
            let (head, tail) = inp.split_at(rem);
            self.buf[num..bsz].copy_from_slice(head);
            keccak_p::absorb(&mut self.a, &self.buf[..bsz], bsz, self.rounds);
            self.bufsz = 0;
            inp = tail;
        }

        let rem = keccak_p::absorb(&mut self.a, inp, bsz, self.rounds);
        if rem > 0 {
            self.buf[..rem].copy_from_slice(&inp[inp.len() - rem..]);
            self.bufsz = rem;
        }
    }

    /// Pads with the configured suffix and permutes.
    #[inline]
    pub(crate) fn pad(&mut self) {
        self.pad_with(self.suffix);
    }

    /// Pads with `suffix` at the cursor and `0x80` at the last rate byte, then permutes.
    ///
    /// `suffix` and `0x80` may land on the same byte when the cursor sits at `rate - 1`.
    pub(crate) fn pad_with(&mut self, suffix: u8) {
        let bsz = self.rate;
        let num = self.bufsz;

        self.buf[num..bsz].fill(0);
        self.buf[num] ^= suffix;
        self.buf[bsz - 1] ^= 0x80;

        keccak_p::xor_bytes(&mut self.a, 0, &self.buf[..bsz]);
        keccak_p::keccak_p1600(&mut self.a, self.rounds);

        self.buf[..bsz].fill(0);
        self.bufsz = 0;
    }

    /// Reader over the already padded state.
    #[inline]
    pub(crate) fn reader(&self) -> SpongeReader {
        SpongeReader { a: self.a, rate: self.rate, rounds: self.rounds, pos: 0 }
    }

    /// Pads and returns a reader over the squeezed output.
    #[inline]
    pub(crate) fn finalize_reader(&mut self) -> SpongeReader {
        self.pad();
        self.reader()
    }

    /// Pads, permutes and squeezes `out.len()` bytes, consuming the finalization.
    pub fn finalize_into(&mut self, out: &mut [u8]) {
        self.pad();
        let mut a = self.a;
        keccak_p::squeeze(&mut a, out, self.rate, self.rounds);
    }

    /// Destructive finalize: returns [`size`](Self::size) bytes.
    pub fn sum_in(&mut self) -> Vec<u8> {
        let mut out = vec![0; self.digest_size];
        self.finalize_into(&mut out);
        out
    }

    /// Non-destructive finalize of a copy; the receiver is unchanged.
    pub fn sum(&self) -> Vec<u8> {
        self.clone().sum_in()
    }

    /// Writes `out.len()` output bytes of a finalized copy.
    pub fn sum_into(&self, out: &mut [u8]) {
        self.clone().finalize_into(out);
    }
}

impl fmt::Debug for SpongeCore {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpongeCore")
            .field("rate", &self.rate)
            .field("rounds", &self.rounds)
            .field("suffix", &self.suffix)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl Drop for SpongeCore {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.a.zeroize();
        self.buf.zeroize();
        self.bufsz.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for SpongeCore {}

/// Incremental squeezer over a finalized sponge.
///
/// Successive reads continue the same output stream, so reading `L1` and then
/// `L2` bytes yields the first `L1 + L2` bytes of the extendable output.
#[derive(Clone)]
pub struct SpongeReader {
    a: Buffer,
    rate: usize,
    rounds: usize,
    pos: usize,
}

impl SpongeReader {
    /// Fills `out` with the next output bytes.
    pub fn squeeze(&mut self, mut out: &mut [u8]) {
        while !out.is_empty() {
            if self.pos == self.rate {
                keccak_p::keccak_p1600(&mut self.a, self.rounds);
                self.pos = 0;
            }
            let n = (self.rate - self.pos).min(out.len());
            let (head, tail) = out.split_at_mut(n);
            keccak_p::extract_bytes(&self.a, self.pos, head);
            self.pos += n;
            out = tail;
        }
    }
}

impl digest::XofReader for SpongeReader {
    #[inline]
    fn read(&mut self, buffer: &mut [u8]) {
        self.squeeze(buffer);
    }
}

impl fmt::Debug for SpongeReader {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SpongeReader { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for SpongeReader {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.a.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::ZeroizeOnDrop for SpongeReader {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_bounds() {
        assert_eq!(SpongeCore::new(0x06, 0, 32, 24).unwrap_err(), Error::InvalidCapacity { capacity: 0 });
        assert_eq!(SpongeCore::new(0x06, 100, 32, 24).unwrap_err(), Error::InvalidCapacity { capacity: 100 });
        assert_eq!(SpongeCore::new(0x06, 99, 32, 24).unwrap().block_size(), 2);
        assert_eq!(SpongeCore::new(0x06, 32, 32, 24).unwrap().block_size(), 136);
    }

    #[test]
    fn cursor_resets_on_full_block() {
        let mut core = SpongeCore::new(0x1f, 16, 32, 24).unwrap();
        core.update(&[1; 100]);
        assert_eq!(core.position(), 100);
        core.update(&[2; 68]);
        assert_eq!(core.position(), 0);
        core.update(&[3; 170]);
        assert_eq!(core.position(), 2);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut core = SpongeCore::new(0x06, 32, 32, 24).unwrap();
        let fresh = core.sum();
        core.update(b"abc");
        core.reset();
        assert_eq!(core.sum(), fresh);
    }

    #[test]
    fn reader_matches_finalize_into() {
        let mut core = SpongeCore::new(0x1f, 16, 0, 24).unwrap();
        core.update(&[0x42; 500]);

        let mut direct = [0u8; 400];
        core.sum_into(&mut direct);

        let mut reader = core.clone().finalize_reader();
        let mut streamed = [0u8; 400];
        let (a, b) = streamed.split_at_mut(7);
        reader.squeeze(a);
        reader.squeeze(b);
        assert_eq!(direct, streamed);
    }

    #[test]
    fn odd_rate_padding() {
        // Capacity 33 gives a 134-byte rate that does not end on a lane boundary.
        let mut core = SpongeCore::new(0x06, 33, 32, 24).unwrap();
        core.update(&[7; 133]);
        let a = core.sum();
        core.update(&[7; 1]);
        assert_eq!(core.position(), 0);
        assert_ne!(a, core.sum());
    }
}
