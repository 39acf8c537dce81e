#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

/// Keccak-p\[1600\] state: 25 little-endian lanes, `A[x + 5y]`.
pub type Buffer = [u64; 25];

/// State size in bytes.
pub const STATE_BYTES: usize = 200;

/// Number of rounds of the full Keccak-f\[1600\] permutation.
pub const MAX_ROUNDS: usize = 24;

/// Iota round constants for all 24 rounds.
///
/// Reduced-round variants use the tail of this table, so Keccak-p\[1600, 12\]
/// runs with `RC[12..24]`.
pub const RC: [u64; MAX_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

// Rotation applied to the i-th lane visited by the rho/pi walk: (i + 1)(i + 2) / 2 mod 64.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

// Destination index of the i-th step of (x, y) -> (y, 2x + 3y), starting from lane 1.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Keccak-p\[1600, n_r\]: runs the last `rounds` rounds of Keccak-f\[1600\].
///
/// `rounds` is clamped to [`MAX_ROUNDS`].
#[inline]
pub fn keccak_p1600(a: &mut Buffer, rounds: usize) {
    let start = MAX_ROUNDS - rounds.min(MAX_ROUNDS);
    for &rc in &RC[start..] {
        round(a, rc);
    }
}

/// Keccak-f\[1600\], the full 24-round permutation.
#[inline]
pub fn keccak_f1600(a: &mut Buffer) {
    keccak_p1600(a, MAX_ROUNDS);
}

/// Keccak-p\[1600, n_r\] over a raw 200-byte state.
///
/// The bytes are read as little-endian lanes before the permutation and
/// written back in the same order afterwards, independent of host endianness.
pub fn keccak_p1600_bytes(state: &mut [u8; STATE_BYTES], rounds: usize) {
    let mut a = state_from_bytes(state);
    keccak_p1600(&mut a, rounds);
    *state = state_to_bytes(&a);
}

#[inline(always)]
fn round(a: &mut Buffer, rc: u64) {
    // theta
    let mut c = [0u64; 5];
    for (x, c) in c.iter_mut().enumerate() {
        *c = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..25).step_by(5) {
            a[y + x] ^= d;
        }
    }

    // rho + pi
    let mut last = a[1];
    for (&pi, &rho) in PI.iter().zip(RHO.iter()) {
        let tmp = a[pi];
        a[pi] = last.rotate_left(rho);
        last = tmp;
    }

    // chi
    for y in (0..25).step_by(5) {
        let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];
        for x in 0..5 {
            a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }

    // iota
    a[0] ^= rc;
}

/// XORs `data` into the state bytes starting at byte `offset`.
///
/// # Panics
///
/// Panics if `offset + data.len()` exceeds [`STATE_BYTES`].
#[inline]
pub fn xor_bytes(a: &mut Buffer, offset: usize, data: &[u8]) {
    assert!(offset + data.len() <= STATE_BYTES, "write past the end of the state");

    let head = ((8 - offset % 8) % 8).min(data.len());
    let (head_bytes, rest) = data.split_at(head);
    for (i, &b) in head_bytes.iter().enumerate() {
        let pos = offset + i;
        a[pos / 8] ^= u64::from(b) << (8 * (pos % 8));
    }

    let lane = (offset + head) / 8;
    let mut chunks = rest.chunks_exact(8);
    for (i, chunk) in chunks.by_ref().enumerate() {
        let mut w = [0u8; 8];
        w.copy_from_slice(chunk);
        a[lane + i] ^= u64::from_le_bytes(w);
    }

    let tail = chunks.remainder();
    let tail_start = offset + data.len() - tail.len();
    for (i, &b) in tail.iter().enumerate() {
        let pos = tail_start + i;
        a[pos / 8] ^= u64::from(b) << (8 * (pos % 8));
    }
}

/// Copies state bytes starting at byte `offset` into `out`.
///
/// # Panics
///
/// Panics if `offset + out.len()` exceeds [`STATE_BYTES`].
#[inline]
pub fn extract_bytes(a: &Buffer, offset: usize, out: &mut [u8]) {
    assert!(offset + out.len() <= STATE_BYTES, "read past the end of the state");
    for (i, b) in out.iter_mut().enumerate() {
        let pos = offset + i;
        *b = a[pos / 8].to_le_bytes()[pos % 8];
    }
}

/// Serializes the state as 200 bytes of little-endian lanes.
pub fn state_to_bytes(a: &Buffer) -> [u8; STATE_BYTES] {
    let mut out = [0u8; STATE_BYTES];
    for (chunk, lane) in out.chunks_exact_mut(8).zip(a.iter()) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
    out
}

/// Reads 200 bytes of little-endian lanes into a state.
pub fn state_from_bytes(bytes: &[u8; STATE_BYTES]) -> Buffer {
    let mut a = [0u64; 25];
    for (lane, chunk) in a.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut w = [0u8; 8];
        w.copy_from_slice(chunk);
        *lane = u64::from_le_bytes(w);
    }
    a
}

/// Absorbs every whole `r`-byte block of `inp`, permuting after each one.
///
/// Returns the number of trailing bytes that did not fill a block; the caller
/// keeps them buffered until more input arrives.
///
/// `r` is the rate (block size) of the function in bytes.
pub fn absorb(a: &mut Buffer, inp: &[u8], r: usize, rounds: usize) -> usize {
    debug_assert!(r > 0 && r < STATE_BYTES);
    let mut blocks = inp.chunks_exact(r);
    for block in blocks.by_ref() {
        xor_bytes(a, 0, block);
        keccak_p1600(a, rounds);
    }
    blocks.remainder().len()
}

/// Squeezes `out.len()` bytes, `r` bytes per block.
///
/// The first block is read from the current state; the state is permuted
/// between blocks but not after the last one.
///
/// `r` is the rate (block size) of the function in bytes.
pub fn squeeze(a: &mut Buffer, out: &mut [u8], r: usize, rounds: usize) {
    debug_assert!(r > 0 && r < STATE_BYTES);
    let mut blocks = out.chunks_mut(r).peekable();
    while let Some(block) = blocks.next() {
        extract_bytes(a, 0, block);
        if blocks.peek().is_some() {
            keccak_p1600(a, rounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lfsr_bit(t: usize) -> bool {
        let mut r: u16 = 1;
        for _ in 0..t % 255 {
            r <<= 1;
            if r & 0x100 != 0 {
                r ^= 0x171;
            }
        }
        r & 1 != 0
    }

    #[test]
    fn round_constants_match_lfsr() {
        for (i, &rc) in RC.iter().enumerate() {
            let mut expected = 0u64;
            for j in 0..7 {
                if lfsr_bit(j + 7 * i) {
                    expected |= 1 << ((1 << j) - 1);
                }
            }
            assert_eq!(rc, expected, "round {i}");
        }
    }

    #[test]
    fn rho_pi_tables() {
        let (mut x, mut y) = (1usize, 0usize);
        for i in 0..24 {
            assert_eq!(RHO[i] as usize, ((i * i + 3 * i + 2) / 2) % 64, "rho {i}");
            (x, y) = (y, (2 * x + 3 * y) % 5);
            assert_eq!(PI[i], x + 5 * y, "pi {i}");
        }
    }

    #[test]
    fn keccakf1600_zero_state() {
        let mut a = [0u64; 25];
        keccak_f1600(&mut a);
        assert_eq!(a[0], 0xF125_8F79_40E1_DDE7);
        assert_eq!(a[1], 0x84D5_CCF9_33C0_478A);
    }

    #[test]
    fn round_count_wiring() {
        let mut full = [0u64; 25];
        let mut reduced = [0u64; 25];
        keccak_p1600(&mut full, 24);
        keccak_p1600(&mut reduced, 12);
        assert_ne!(full, reduced);

        let mut again = [0u64; 25];
        keccak_p1600(&mut again, 12);
        assert_eq!(reduced, again);

        let mut clamped = [0u64; 25];
        keccak_p1600(&mut clamped, 100);
        assert_eq!(full, clamped);
    }

    #[test]
    fn byte_permutation_matches_lanes() {
        let mut bytes = [0u8; STATE_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut lanes = state_from_bytes(&bytes);
        keccak_p1600(&mut lanes, 12);
        keccak_p1600_bytes(&mut bytes, 12);
        assert_eq!(state_to_bytes(&lanes), bytes);
    }

    #[test]
    fn xor_and_extract_unaligned() {
        let mut a = [0u64; 25];
        let data: [u8; 21] = core::array::from_fn(|i| i as u8 + 1);
        xor_bytes(&mut a, 3, &data);
        let mut out = [0u8; 21];
        extract_bytes(&a, 3, &mut out);
        assert_eq!(out, data);
        assert_eq!(a[0] & 0xFF_FFFF, 0);
        assert_eq!((a[0] >> 24) & 0xFF, 1);

        xor_bytes(&mut a, 3, &data);
        assert_eq!(a, [0u64; 25]);
    }

    #[test]
    fn absorb_returns_leftover() {
        let mut a = [0u64; 25];
        let inp = [0xA5u8; 300];
        assert_eq!(absorb(&mut a, &inp, 136, 24), 300 - 2 * 136);
        assert_ne!(a, [0u64; 25]);
    }

    #[test]
    fn squeeze_permutes_between_blocks() {
        let mut a = [0u64; 25];
        keccak_f1600(&mut a);
        let start = a;

        let mut short = [0u8; 10];
        squeeze(&mut a, &mut short, 168, 24);
        assert_eq!(a, start);

        let mut long = [0u8; 200];
        squeeze(&mut a, &mut long, 168, 24);
        assert_eq!(&long[..10], &short);
        assert_ne!(a, start);
    }
}
