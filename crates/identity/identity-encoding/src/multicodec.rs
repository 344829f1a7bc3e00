//! Multicodec encoding/decoding
//!
//! Multicodec is a self-describing format that prefixes data with a varint
//! indicating the type of data that follows.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::EncodingError;

// ****************************************************************************
// Codec Magic Numbers
// See: https://github.com/multiformats/multicodec/blob/master/table.csv
// ****************************************************************************
pub const ED25519_PUB: u64 = 0xed;
pub const X25519_PUB: u64 = 0xec;

/// Varint encoding of [`ED25519_PUB`] as it appears on the wire
pub const ED25519_PUB_PREFIX: [u8; 2] = [0xed, 0x01];

/// Separates the varint codec prefix from the data that follows it
pub fn split_codec(bytes: &[u8]) -> Result<(u64, &[u8]), EncodingError> {
    unsigned_varint::decode::u64(bytes)
        .map_err(|e| EncodingError::InvalidMulticodec(format!("varint decode: {e}")))
}

/// Prefixes `bytes` with the varint encoding of `codec`
pub fn encode_with_codec(codec: u64, bytes: &[u8]) -> Vec<u8> {
    let mut codec_buffer = unsigned_varint::encode::u64_buffer();
    let encoded_codec = unsigned_varint::encode::u64(codec, &mut codec_buffer);
    let mut result = Vec::with_capacity(encoded_codec.len() + bytes.len());
    result.extend_from_slice(encoded_codec);
    result.extend_from_slice(bytes);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ed25519_prefix_matches_varint() {
        let encoded = encode_with_codec(ED25519_PUB, &[]);
        assert_eq!(encoded, ED25519_PUB_PREFIX);
    }

    #[test]
    fn split_ed25519() {
        let key_bytes = [7u8; 32];
        let encoded = encode_with_codec(ED25519_PUB, &key_bytes);

        let (codec, data) = split_codec(&encoded).unwrap();
        assert_eq!(codec, ED25519_PUB);
        assert_eq!(data, &key_bytes);
    }

    #[test]
    fn x25519_round_trips() {
        let encoded = encode_with_codec(X25519_PUB, &[1, 2, 3]);
        assert_eq!(&encoded[..2], &[0xec, 0x01]);
        assert_eq!(split_codec(&encoded).unwrap(), (X25519_PUB, &[1u8, 2, 3][..]));
    }

    #[test]
    fn split_empty_is_error() {
        assert!(split_codec(&[]).is_err());
    }
}
