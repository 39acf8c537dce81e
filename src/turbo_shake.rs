//! TurboSHAKE (RFC 9861): SHAKE on the 12-round Keccak-p\[1600, 12\].

use crate::{Error, Result, SpongeCore, SpongeReader, SHAKE, TURBO_SHAKE_ROUNDS};

macro_rules! impl_turbo_shake {
    ($name:ident, $rate:literal, $alg_name:expr) => {
        #[doc = concat!($alg_name, " extendable-output function.")]
        #[derive(Clone)]
        pub struct $name {
            state: SpongeCore,
        }

        /// Default domain byte; `sum` yields twice the capacity.
        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(200 - $rate)
            }
        }

        impl $name {
            /// Block size.
            pub const BSZ: usize = $rate;
            /// Default domain separation byte.
            pub const DEFAULT_DOMAIN: u8 = SHAKE;

            /// Instance with the default domain byte `0x1F`.
            #[inline]
            pub const fn new(digest_size: usize) -> Self {
                Self::with_domain_unchecked(Self::DEFAULT_DOMAIN, digest_size)
            }

            /// Instance with a caller-chosen domain byte in `0x01..=0x7F`.
            pub fn with_domain(domain: u8, digest_size: usize) -> Result<Self> {
                if !(0x01..=0x7f).contains(&domain) {
                    debug!(domain, "rejected TurboSHAKE domain byte");
                    return Err(Error::InvalidDomainSeparator { byte: domain });
                }
                Ok(Self::with_domain_unchecked(domain, digest_size))
            }

            #[inline]
            pub(crate) const fn with_domain_unchecked(domain: u8, digest_size: usize) -> Self {
                Self { state: SpongeCore::with_rate(domain, $rate, digest_size, TURBO_SHAKE_ROUNDS) }
            }

            /// Domain separation byte.
            #[inline]
            pub const fn domain(&self) -> u8 {
                self.state.suffix()
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

            /// One-shot: `out.len()` bytes of output for `inp` under `domain`.
            pub fn digest_into(inp: &[u8], domain: u8, out: &mut [u8]) -> Result<()> {
                let mut this = Self::with_domain(domain, out.len())?;
                this.update(inp);
                this.state.finalize_into(out);
                Ok(())
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
    };
}

impl_turbo_shake!(TurboShake128, 168, "TurboSHAKE128");
impl_turbo_shake!(TurboShake256, 136, "TurboSHAKE256");

impl TurboShake128 {
    /// Pads with `domain` instead of the configured byte.
    #[inline]
    pub(crate) fn finalize_reader_with(&mut self, domain: u8) -> SpongeReader {
        self.state.pad_with(domain);
        self.state.reader()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shake128;

    #[test]
    fn domain_range() {
        assert_eq!(TurboShake128::with_domain(0x00, 32).unwrap_err(), Error::InvalidDomainSeparator { byte: 0 });
        assert_eq!(TurboShake256::with_domain(0x80, 32).unwrap_err(), Error::InvalidDomainSeparator { byte: 0x80 });
        assert_eq!(TurboShake128::with_domain(0x01, 32).unwrap().domain(), 0x01);
        assert_eq!(TurboShake128::with_domain(0x7f, 32).unwrap().domain(), 0x7f);
        assert_eq!(TurboShake128::new(32).domain(), 0x1f);
    }

    #[test]
    fn reduced_rounds_differ_from_shake() {
        assert_ne!(TurboShake128::new(32).sum(), Shake128::new(32).sum());
    }

    #[test]
    fn domain_override_on_finalize() {
        let mut seven = TurboShake128::with_domain(0x07, 32).unwrap();
        let mut six = TurboShake128::with_domain(0x06, 32).unwrap();
        seven.update(b"abc");
        six.update(b"abc");

        let mut out = [0u8; 32];
        seven.finalize_reader_with(0x06).squeeze(&mut out);
        assert_eq!(six.sum(), out);
    }
}
