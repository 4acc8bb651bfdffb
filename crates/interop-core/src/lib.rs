#![deny(missing_docs)]
#![doc = "Shared contracts for bridging the ds and toolkit collection ecosystems: errors, capability traits, numeral bases and serializer configuration."]

pub mod base;
pub mod capability;
/// YAML configuration schema and defaults.
pub mod config;
pub mod errors;
pub mod identity;

pub use base::{split_marker, Base, NumberFormat};
pub use capability::{PairSink, PairSource, Sink, Source};
pub use config::JsonConfig;
pub use errors::{require, ErrorInfo, InteropError};
pub use identity::{Identity, IdentityKey};
