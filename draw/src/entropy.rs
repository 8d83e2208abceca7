//! Randomness for winner selection.
//!
//! Winners are picked with a cryptographically secure generator only. The
//! [`EntropySource`] trait is sealed: outside this crate the sole
//! implementation is [`CryptoEntropy`], which requires a
//! [`rand::CryptoRng`].

use rand::rngs::StdRng;
use rand::{CryptoRng, Rng, SeedableRng};

mod sealed {
    pub trait Sealed {}
}

/// Uniform index source for a draw.
pub trait EntropySource: sealed::Sealed + Send {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// CSPRNG-backed entropy.
pub struct CryptoEntropy<R> {
    rng: R,
}

impl CryptoEntropy<StdRng> {
    /// ChaCha-based generator seeded from the thread-local CSPRNG, which is
    /// itself seeded from the operating system.
    pub fn system() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl<R: CryptoRng + Send> CryptoEntropy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: CryptoRng + Send> sealed::Sealed for CryptoEntropy<R> {}

impl<R: CryptoRng + Send> EntropySource for CryptoEntropy<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices; lets tests pin which segment wins.
#[cfg(test)]
pub(crate) struct ScriptedEntropy {
    picks: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedEntropy {
    pub(crate) fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl sealed::Sealed for ScriptedEntropy {}

#[cfg(test)]
impl EntropySource for ScriptedEntropy {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_stay_in_range() {
        let mut entropy = CryptoEntropy::new(StdRng::seed_from_u64(0x5EED));
        for len in 1..50 {
            for _ in 0..20 {
                assert!(entropy.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn test_single_entry_always_zero() {
        let mut entropy = CryptoEntropy::system();
        for _ in 0..10 {
            assert_eq!(entropy.pick_index(1), 0);
        }
    }
}
