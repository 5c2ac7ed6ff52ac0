//! Base64URL encoding/decoding per RFC 4648
//!
//! Thin wrapper around the `base64` crate. JWT segments never carry padding,
//! so any `=` in a segment is rejected rather than tolerated.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes as an unpadded Base64URL segment
pub fn encode_segment(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded Base64URL segment
///
/// Fails with [`Error::MalformedSegment`] on padding, characters outside the
/// URL-safe alphabet, or a truncated final group.
pub fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    if segment.contains('=') {
        return Err(Error::MalformedSegment(
            "padding characters are not permitted".to_string(),
        ));
    }

    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| Error::MalformedSegment(format!("Base64URL decode failed: {e}")))
}
