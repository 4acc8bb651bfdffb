//! Seed-derivation helpers.

use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Derives the deterministic seed for a specific substream.
///
/// Substreams are derived by hashing `(master_seed, substream)` with SipHash-1-3
/// configured with fixed zero keys. Every multi-word generator fills its state
/// word `i` from substream `i`, so the same master seed always yields the same
/// state on every platform.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}

pub(crate) fn expand_seed<const N: usize>(master_seed: u64) -> [u64; N] {
    let mut state = [0u64; N];
    for (index, word) in state.iter_mut().enumerate() {
        *word = derive_substream_seed(master_seed, index as u64);
    }
    state
}
