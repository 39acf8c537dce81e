#![no_main]

use keccak_sponge::{KangarooTwelve, Keccak256, Kmac128, Sha3_256};
use libfuzzer_sys::fuzz_target;
use tiny_keccak::{Hasher, Keccak, Kmac, Sha3};

fn tiny<H: Hasher>(mut hasher: H, data: &[u8], out: &mut [u8]) {
    hasher.update(data);
    hasher.finalize(out);
}

fuzz_target!(|data: &[u8]| {
    // The first byte splits the input so streaming is exercised too.
    let split = data.first().map_or(0, |&b| b as usize).min(data.len());
    let (head, tail) = data.split_at(split);

    let mut ours = Keccak256::new();
    ours.update(head);
    ours.update(tail);
    let mut expected = [0u8; 32];
    tiny(Keccak::v256(), data, &mut expected);
    assert_eq!(ours.sum(), expected, "Keccak-256 mismatch! Input: {data:x?}");

    let mut ours = Sha3_256::new();
    ours.update(head);
    ours.update(tail);
    tiny(Sha3::v256(), data, &mut expected);
    assert_eq!(ours.sum(), expected, "SHA3-256 mismatch! Input: {data:x?}");

    let mut ours = Kmac128::new(head, b"fuzz", 32);
    ours.update(tail);
    tiny(Kmac::v128(head, b"fuzz"), tail, &mut expected);
    assert_eq!(ours.sum(), expected, "KMAC128 mismatch! Input: {data:x?}");

    let mut ours = KangarooTwelve::new(head, 32);
    ours.update(tail);
    tiny(tiny_keccak::KangarooTwelve::new(head), tail, &mut expected);
    assert_eq!(ours.sum(), expected, "KT128 mismatch! Input: {data:x?}");
});
