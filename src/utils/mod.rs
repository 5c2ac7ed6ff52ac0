pub mod base64url;
pub mod json;

pub use base64url::{decode_segment, encode_segment};
pub use json::{parse_claims, serialize_claims};
