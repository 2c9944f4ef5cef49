use std::sync::Arc;

use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64_URL;
use base64::Engine;
use chrono::{Duration, Utc};
use thiserror::Error;

use crate::domain::{AccessClaims, IdentityContext, User};
use crate::services::claims_codec::{self, MalformedPayloadError};
use crate::services::token_signer;
use crate::utils::Config;

/// Issues and validates signed access tokens, and turns a validated token
/// back into an authenticated identity.
///
/// Issuer and signing secret come from the config passed at construction;
/// the provider itself is stateless and safe to call from any number of
/// request-handling tasks.
#[derive(Clone)]
pub struct TokenProvider {
    config: Arc<Config>,
}

#[derive(Error, Debug)]
pub enum GenerateTokenError {
    #[error("token ttl must be positive")]
    NonPositiveTtl,

    #[error("failed to encode claims")]
    Encode(#[from] MalformedPayloadError),
}

// Why a presented token is unusable. Collapsed to a plain boolean at the
// `validate_token` boundary so callers cannot distinguish the causes.
#[derive(Debug, PartialEq)]
enum TokenValidationError {
    Malformed,
    BadSignature,
    Expired,
    WrongIssuer,
}

/// Claims could not be decoded from a token the caller claims to have
/// validated. This path is unreachable for tokens that passed
/// `validate_token`; hitting it signals a bug upstream.
#[derive(Error, Debug)]
#[error("claims could not be decoded from a validated token")]
pub struct ClaimsDecodeError(#[from] MalformedPayloadError);

impl TokenProvider {
    pub fn new(config: Arc<Config>) -> Self {
        TokenProvider { config }
    }

    /// Issues a signed access token for `user`, valid for `ttl` from now.
    ///
    /// The claim set carries the configured issuer, the user's email as
    /// subject, the issuance and expiry timestamps, and the user's numeric
    /// id under the `id` claim.
    pub fn generate_token(&self, user: &User, ttl: Duration) -> Result<String, GenerateTokenError> {
        if ttl <= Duration::zero() {
            return Err(GenerateTokenError::NonPositiveTtl);
        }

        let now = Utc::now();
        let claims = AccessClaims {
            iss: self.config.issuer().to_owned(),
            sub: user.email.as_ref().to_owned(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            id: user.id,
        };

        let header = claims_codec::header_segment();
        let payload = claims_codec::encode_claims(&claims)?;
        let signing_input = format!("{}.{}", header, payload);
        let signature = token_signer::sign(signing_input.as_bytes(), self.config.secret());

        Ok(format!("{}.{}", signing_input, B64_URL.encode(signature)))
    }

    /// Single yes/no gate for "is this bearer token currently usable".
    ///
    /// Recomputes the signature over header and payload, then checks header
    /// shape, payload structure, issuer, and expiry. Every failure cause
    /// collapses to `false`; this function never panics and never reports
    /// why a token was rejected.
    pub fn validate_token(&self, token: &str) -> bool {
        self.check_token(token).is_ok()
    }

    /// Builds the identity context for an already-validated token: subject
    /// as principal, the default authority, and the raw token as credential.
    pub fn authentication(&self, token: &str) -> Result<IdentityContext, ClaimsDecodeError> {
        let claims = self.claims_of(token)?;
        Ok(IdentityContext::new(claims.sub, token.to_owned()))
    }

    /// Extracts the owning user's numeric id from an already-validated
    /// token, without a directory round trip.
    pub fn user_id(&self, token: &str) -> Result<i64, ClaimsDecodeError> {
        Ok(self.claims_of(token)?.id)
    }

    fn check_token(&self, token: &str) -> Result<AccessClaims, TokenValidationError> {
        let mut segments = token.split('.');
        let (header, payload, signature) =
            match (segments.next(), segments.next(), segments.next(), segments.next()) {
                (Some(h), Some(p), Some(s), None) => (h, p, s),
                _ => return Err(TokenValidationError::Malformed),
            };

        claims_codec::decode_header(header).map_err(|_| TokenValidationError::Malformed)?;

        let signature = B64_URL
            .decode(signature)
            .map_err(|_| TokenValidationError::Malformed)?;
        let signing_input = format!("{}.{}", header, payload);
        if !token_signer::verify(signing_input.as_bytes(), &signature, self.config.secret()) {
            return Err(TokenValidationError::BadSignature);
        }

        let claims =
            claims_codec::decode_claims(payload).map_err(|_| TokenValidationError::Malformed)?;

        if claims.iss != self.config.issuer() {
            return Err(TokenValidationError::WrongIssuer);
        }
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenValidationError::Expired);
        }

        Ok(claims)
    }

    fn claims_of(&self, token: &str) -> Result<AccessClaims, ClaimsDecodeError> {
        let payload = token
            .split('.')
            .nth(1)
            .ok_or(MalformedPayloadError::SegmentCount)?;
        Ok(claims_codec::decode_claims(payload)?)
    }
}
