#![warn(unused_crate_dependencies, unsafe_code)]

mod error;
mod text;

/// Byte-level codec: 5-bit groups over the `a-z2-7` alphabet
pub mod base32;

pub use error::CodecError;
pub use text::{decode, decode_with, encode, encode_with, DEFAULT_ENCODING};

#[cfg(feature = "geo")]
pub mod geo;
