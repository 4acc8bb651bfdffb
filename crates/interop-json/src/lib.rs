#![deny(missing_docs)]
#![doc = "JSON codecs for the ds containers, generators and distributions, installed on an explicit `Json` serializer instance."]

pub mod json;
pub mod registrar;

pub use json::{Json, CLASS_MEMBER};
pub use registrar::*;
