//! The Keccak sponge family over a portable Keccak-p\[1600\] permutation.
//!
//! * `Keccak224`, `Keccak256`, `Keccak384`, `Keccak512` and [`Keccak`] with a
//!   caller-chosen digest size and capacity
//! * `Sha3_224`, `Sha3_256`, `Sha3_384`, `Sha3_512`
//! * [`Shake128`], [`Shake256`]
//! * NIST SP 800-185: [`CShake128`]/[`CShake256`], [`Kmac128`]/[`Kmac256`],
//!   [`TupleHash128`]/[`TupleHash256`], [`ParallelHash128`]/[`ParallelHash256`]
//! * RFC 9861: [`TurboShake128`]/[`TurboShake256`] and [`KangarooTwelve`]
//! * [`HopMac`], a keyed MAC built from two KangarooTwelve passes
//!
//! Every hash object has the same lifecycle. `update` absorbs input, `sum`
//! finalizes a copy without touching the receiver, `sum_in` finalizes in
//! place, and `reset` returns to the freshly constructed state. Branching a
//! computation (hashing a prefix while continuing to stream) is done with
//! `clone`, which is a full deep copy.
//!
//! ```
//! use keccak_sponge::{Sha3_256, Shake128};
//!
//! let mut hasher = Sha3_256::new();
//! hasher.update(b"abc");
//! assert_eq!(
//!     hasher.sum(),
//!     hex::decode("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532").unwrap(),
//! );
//!
//! let mut xof = Shake128::new(10);
//! xof.update(b"abc");
//! assert_eq!(xof.sum(), hex::decode("5881092dd818bf5cf8a3").unwrap());
//! ```
//!
//! The fixed-size SHA-3 and Keccak types implement `digest::Digest`; every
//! other hash object implements `digest::Update`, and the extendable-output
//! ones `digest::ExtendableOutput` with a [`SpongeReader`].

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use digest::{self, Digest};
pub use keccak_p;

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

mod state;
pub use state::{SpongeCore, SpongeReader};

pub mod encoding;

mod sha3;
pub use sha3::{
    Keccak, Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512,
    Shake128, Shake256,
};

mod cshake;
pub use cshake::{CShake128, CShake256};

mod kmac;
pub use kmac::{Kmac128, Kmac256};

mod tuple_hash;
pub use tuple_hash::{TupleHash128, TupleHash256};

mod parallel_hash;
pub use parallel_hash::{ParallelHash128, ParallelHash256};

mod turbo_shake;
pub use turbo_shake::{TurboShake128, TurboShake256};

mod k12;
pub use k12::KangarooTwelve;

mod hop_mac;
pub use hop_mac::HopMac;

// Paddings
const KECCAK: u8 = 0x01;
const SHA3: u8 = 0x06;
const SHAKE: u8 = 0x1f;
const CSHAKE: u8 = 0x04;

// Round counts
const FULL_ROUNDS: usize = keccak_p::MAX_ROUNDS;
const TURBO_SHAKE_ROUNDS: usize = 12;
