//! Multibase and multicodec encoding utilities
//!
//! This crate provides the encoding primitives used by the DID crates:
//! - Multibase encoding/decoding (base58btc)
//! - Multicodec varint prefixes and codec constants
//! - Helpers for encoding/decoding multikey strings

pub mod multibase;
pub mod multicodec;

pub use multibase::{
    BASE58BTC_PREFIX, decode_base58btc, decode_multikey, decode_multikey_with_codec,
    encode_base58btc, encode_multikey,
};
pub use multicodec::{
    ED25519_PUB, ED25519_PUB_PREFIX, X25519_PUB, encode_with_codec, split_codec,
};

mod error;
pub use error::EncodingError;
