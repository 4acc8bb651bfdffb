//! Named 64-bit generators with inspectable state.

use std::fmt;

use interop_core::base::Base;
use interop_core::errors::{ErrorInfo, InteropError};
use rand::RngCore;

use crate::seed::expand_seed;
use crate::text::{parse_tagged, tag_mismatch, unknown_tag, write_tagged};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// A seedable generator whose full state can be read, replaced and written as text.
pub trait EnhancedRandom: RngCore + Send + Sync + fmt::Debug {
    /// Short identifier written in front of the serialized state.
    fn tag(&self) -> &'static str;

    /// Number of 64-bit state words.
    fn state_count(&self) -> usize;

    /// State word `selection`; out-of-range selections read as zero.
    fn selected_state(&self, selection: usize) -> u64;

    /// Replaces state word `selection`; out-of-range selections are ignored.
    fn set_selected_state(&mut self, selection: usize, value: u64);

    /// Boxed copy of this generator, state included.
    fn copy_random(&self) -> Box<dyn EnhancedRandom>;

    /// Writes the tag and every state word in `base`.
    fn string_serialize(&self, base: &Base) -> String {
        let fields: Vec<String> = (0..self.state_count())
            .map(|selection| base.signed(self.selected_state(selection) as i64))
            .collect();
        let marker = (base.radix() != 10).then_some(*base);
        write_tagged(marker, self.tag(), &fields)
    }

    /// Restores state from text produced by [`EnhancedRandom::string_serialize`].
    fn string_deserialize(&mut self, text: &str) -> Result<(), InteropError> {
        let tagged = parse_tagged(text)?;
        if tagged.tag != self.tag() {
            return Err(tag_mismatch("generator", self.tag(), tagged.tag));
        }
        if tagged.fields.len() != self.state_count() {
            return Err(InteropError::Codec(
                ErrorInfo::new("state-count", "wrong number of state words")
                    .with_context("expected", self.state_count().to_string())
                    .with_context("found", tagged.fields.len().to_string()),
            ));
        }
        let base = tagged.marker.unwrap_or(Base::BASE10);
        let words = tagged
            .fields
            .iter()
            .map(|field| base.read_i64(field).map(|word| word as u64))
            .collect::<Result<Vec<_>, _>>()?;
        for (selection, word) in words.into_iter().enumerate() {
            self.set_selected_state(selection, word);
        }
        Ok(())
    }
}

macro_rules! generator {
    ($(#[$meta:meta])* $name:ident, $tag:literal, $words:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            state: [u64; $words],
        }

        impl $name {
            /// Tag written in front of the serialized state.
            pub const TAG: &'static str = $tag;

            /// Seeds each state word from its own substream of `seed`.
            pub fn from_seed(seed: u64) -> Self {
                Self::with_states(expand_seed::<$words>(seed))
            }

            /// Current state words.
            pub fn states(&self) -> [u64; $words] {
                self.state
            }

            /// Parses text written by [`EnhancedRandom::string_serialize`] for this type.
            pub fn from_string(text: &str) -> Result<Self, InteropError> {
                let mut random = Self::with_states([0; $words]);
                random.string_deserialize(text)?;
                Ok(random)
            }
        }

        impl RngCore for $name {
            fn next_u32(&mut self) -> u32 {
                (self.advance() >> 32) as u32
            }

            fn next_u64(&mut self) -> u64 {
                self.advance()
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                for chunk in dest.chunks_mut(8) {
                    let bytes = self.advance().to_le_bytes();
                    chunk.copy_from_slice(&bytes[..chunk.len()]);
                }
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        impl EnhancedRandom for $name {
            fn tag(&self) -> &'static str {
                Self::TAG
            }

            fn state_count(&self) -> usize {
                $words
            }

            fn selected_state(&self, selection: usize) -> u64 {
                self.state.get(selection).copied().unwrap_or(0)
            }

            fn set_selected_state(&mut self, selection: usize, value: u64) {
                if let Some(word) = self.state.get_mut(selection) {
                    *word = value;
                }
            }

            fn copy_random(&self) -> Box<dyn EnhancedRandom> {
                Box::new(self.clone())
            }
        }
    };
}

generator!(
    /// SplitMix-style counter generator; every state yields a distinct output.
    DistinctRandom,
    "DisR",
    1
);

impl DistinctRandom {
    /// Uses `state` verbatim.
    pub fn with_states(state: [u64; 1]) -> Self {
        Self { state }
    }

    fn advance(&mut self) -> u64 {
        self.state[0] = self.state[0].wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state[0];
        z = (z ^ (z >> 27)).wrapping_mul(0x3C79_AC49_2BA7_B653);
        z = (z ^ (z >> 33)).wrapping_mul(0x1C69_B3F7_4AC4_AE35);
        z ^ (z >> 27)
    }
}

generator!(
    /// Golden-ratio Weyl sequence; evenly spread, not statistically random.
    GoldenQuasiRandom,
    "GoQR",
    1
);

impl GoldenQuasiRandom {
    /// Uses `state` verbatim.
    pub fn with_states(state: [u64; 1]) -> Self {
        Self { state }
    }

    fn advance(&mut self) -> u64 {
        self.state[0] = self.state[0].wrapping_add(GOLDEN_GAMMA);
        self.state[0]
    }
}

generator!(
    /// xoshiro256** with a 256-bit state.
    Xoshiro256StarStarRandom,
    "XSSR",
    4
);

impl Xoshiro256StarStarRandom {
    /// Uses `state`, replacing an all-zero state, which would never leave zero.
    pub fn with_states(mut state: [u64; 4]) -> Self {
        if state == [0; 4] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    fn advance(&mut self) -> u64 {
        let s = &mut self.state;
        let result = s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = s[1] << 17;
        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];
        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
        result
    }
}

generator!(
    /// xoroshiro128** with a 128-bit state.
    Xoroshiro128StarStarRandom,
    "XRSR",
    2
);

impl Xoroshiro128StarStarRandom {
    /// Uses `state`, replacing an all-zero state, which would never leave zero.
    pub fn with_states(mut state: [u64; 2]) -> Self {
        if state == [0; 2] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    fn advance(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);
        result
    }
}

generator!(
    /// RomuTrio: three multiply-rotate words, very fast.
    RomuTrioRandom,
    "RTrR",
    3
);

impl RomuTrioRandom {
    /// Uses `state`, replacing an all-zero state, which would never leave zero.
    pub fn with_states(mut state: [u64; 3]) -> Self {
        if state == [0; 3] {
            state[0] = GOLDEN_GAMMA;
        }
        Self { state }
    }

    fn advance(&mut self) -> u64 {
        let [xp, yp, zp] = self.state;
        self.state[0] = zp.wrapping_mul(15_241_094_284_759_029_579);
        self.state[1] = yp.wrapping_sub(xp).rotate_left(12);
        self.state[2] = zp.wrapping_sub(yp).rotate_left(44);
        xp
    }
}

generator!(
    /// Small Fast Chaotic generator; the fourth word is a counter.
    Sfc64Random,
    "SfcR",
    4
);

impl Sfc64Random {
    /// Uses `state` verbatim; the counter guarantees a minimum period.
    pub fn with_states(state: [u64; 4]) -> Self {
        Self { state }
    }

    fn advance(&mut self) -> u64 {
        let [a, b, c, counter] = self.state;
        let tmp = a.wrapping_add(b).wrapping_add(counter);
        self.state[0] = b ^ (b >> 11);
        self.state[1] = c.wrapping_add(c << 3);
        self.state[2] = c.rotate_left(24).wrapping_add(tmp);
        self.state[3] = counter.wrapping_add(1);
        tmp
    }
}

/// Rebuilds whichever generator `text` names by its tag.
pub fn deserialize_random(text: &str) -> Result<Box<dyn EnhancedRandom>, InteropError> {
    let tagged = parse_tagged(text)?;
    let mut random: Box<dyn EnhancedRandom> = match tagged.tag {
        DistinctRandom::TAG => Box::new(DistinctRandom::with_states([0])),
        GoldenQuasiRandom::TAG => Box::new(GoldenQuasiRandom::with_states([0])),
        Xoshiro256StarStarRandom::TAG => Box::new(Xoshiro256StarStarRandom::with_states([0; 4])),
        Xoroshiro128StarStarRandom::TAG => {
            Box::new(Xoroshiro128StarStarRandom::with_states([0; 2]))
        }
        RomuTrioRandom::TAG => Box::new(RomuTrioRandom::with_states([0; 3])),
        Sfc64Random::TAG => Box::new(Sfc64Random::with_states([0; 4])),
        other => return Err(unknown_tag(other, "generator")),
    };
    random.string_deserialize(text)?;
    Ok(random)
}

/// Tags understood by [`deserialize_random`].
pub const GENERATOR_TAGS: [&str; 6] = [
    DistinctRandom::TAG,
    GoldenQuasiRandom::TAG,
    Xoshiro256StarStarRandom::TAG,
    Xoroshiro128StarStarRandom::TAG,
    RomuTrioRandom::TAG,
    Sfc64Random::TAG,
];
