#![deny(missing_docs)]
#![doc = "Pure, allocation-only conversions between the ds and toolkit collection ecosystems, driven by the capability traits of `interop-core`."]

pub mod generic;
pub mod to_ds;
pub mod to_toolkit;

pub use generic::{convert, convert_keys, convert_pairs, convert_pairs_with, convert_with};
