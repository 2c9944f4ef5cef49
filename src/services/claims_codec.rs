use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64_URL;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::AccessClaims;

// Wire format: three dot-separated base64url segments, each without padding.
// The header is fixed; only HS256 tokens are ever issued or accepted.
const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

#[derive(Debug, Serialize, Deserialize)]
struct TokenHeader {
    alg: String,
    typ: String,
}

#[derive(Error, Debug)]
pub enum MalformedPayloadError {
    #[error("token does not have three segments")]
    SegmentCount,

    #[error("segment is not valid base64url")]
    Encoding(#[from] base64::DecodeError),

    #[error("segment does not parse into the expected structure")]
    Structure(#[from] serde_json::Error),

    #[error("header declares an unsupported algorithm or type")]
    UnsupportedHeader,
}

/// The encoded header segment shared by every issued token.
pub fn header_segment() -> String {
    B64_URL.encode(HEADER_JSON)
}

/// Decodes a presented header segment and checks it declares exactly the
/// algorithm and type this service issues.
pub fn decode_header(segment: &str) -> Result<(), MalformedPayloadError> {
    let bytes = B64_URL.decode(segment)?;
    let header: TokenHeader = serde_json::from_slice(&bytes)?;
    if header.alg != "HS256" || header.typ != "JWT" {
        return Err(MalformedPayloadError::UnsupportedHeader);
    }
    Ok(())
}

/// Encodes a claim set into a payload segment.
pub fn encode_claims(claims: &AccessClaims) -> Result<String, MalformedPayloadError> {
    let json = serde_json::to_vec(claims)?;
    Ok(B64_URL.encode(json))
}

/// Decodes a payload segment back into a claim set.
pub fn decode_claims(segment: &str) -> Result<AccessClaims, MalformedPayloadError> {
    let bytes = B64_URL.decode(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}
