#![deny(missing_docs)]
#![doc = "Named pseudo-random generators and probability distributions whose state round-trips through a compact tagged string."]

pub mod distributions;
pub mod generators;
pub mod seed;
mod text;

pub use distributions::{
    deserialize_distribution, Bernoulli, Cauchy, ContinuousUniform, Distribution, Exponential,
    Geometric, Kumaraswamy, Laplace, Logistic, Normal, Pareto, Poisson, Rayleigh, Triangular,
    Weibull,
};
pub use generators::{
    deserialize_random, DistinctRandom, EnhancedRandom, GoldenQuasiRandom, RomuTrioRandom,
    Sfc64Random, Xoroshiro128StarStarRandom, Xoshiro256StarStarRandom, GENERATOR_TAGS,
};
pub use seed::derive_substream_seed;
