//! Configuration errors.
//!
//! Every operation on an already constructed hash object is total; the only
//! failures are parameter sets that cannot describe a valid sponge.

/// Result alias used by fallible constructors.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Invalid sponge parameters.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The capacity leaves no room for a rate. Valid values are `1..100` bytes.
    #[error("invalid capacity: {capacity} bytes (expected 1..100)")]
    InvalidCapacity {
        /// Requested capacity in bytes.
        capacity: usize,
    },
    /// `bytepad` was asked to pad to a width of zero.
    #[error("bytepad width must be at least 1")]
    InvalidPadWidth,
    /// TurboSHAKE domain separation byte outside `0x01..=0x7F`.
    #[error("invalid domain separation byte {byte:#04x} (expected 0x01..=0x7f)")]
    InvalidDomainSeparator {
        /// Requested domain byte.
        byte: u8,
    },
    /// ParallelHash was configured with an empty block.
    #[error("ParallelHash block size must be at least 1")]
    InvalidBlockSize,
}
