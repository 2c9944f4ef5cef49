use serde::{Deserialize, Serialize};

/// The claim set embedded in every access token payload. All fields are set
/// atomically at issuance; a partially filled claim set is never signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub iss: String, // Issuer
    pub sub: String, // Subject (the user's email)
    pub iat: i64,    // Issued at time
    pub exp: i64,    // Expiration time
    pub id: i64,     // User's numeric id, saves a directory round trip
}
