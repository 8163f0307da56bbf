/**
 * Session Tokens
 *
 * This module mints and verifies the signed bearer tokens that carry a
 * user's identity between requests. Tokens are standard HS256 JWTs whose
 * payload holds the user ID, the issuer and an expiry timestamp, so any
 * holder of the shared secret can check them without server-side state.
 *
 * # Wire Format
 *
 * `base64url(header).base64url(payload).base64url(signature)` with payload
 *
 * ```json
 * { "user_id": "9b2d...", "iss": "trip-planner", "exp": 1735689600 }
 * ```
 *
 * Clients present the token as `Authorization: Bearer <token>`.
 */

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix every presented token must carry
pub const BEARER_PREFIX: &str = "Bearer ";

/// Issuer used when none is configured
pub const DEFAULT_ISSUER: &str = "trip-planner";

/// Token lifetime used when none is configured
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was minted for
    pub user_id: String,
    /// Issuer
    pub iss: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a token could not be minted or was rejected
#[derive(Debug, Error)]
pub enum TokenError {
    /// Missing `Bearer ` prefix or undecodable segments
    #[error("malformed token")]
    MalformedToken,

    /// Signature does not match the shared secret
    #[error("invalid token signature")]
    InvalidSignature,

    /// Signed by us, but for a different issuer
    #[error("token issuer not accepted")]
    InvalidIssuer,

    /// Token was valid but its lifetime has passed
    #[error("token expired")]
    Expired,

    /// Minting requires a user ID
    #[error("cannot mint a token for an empty user id")]
    EmptySubject,

    /// `now + ttl` is not a representable time
    #[error("token expiry overflows the clock")]
    ExpiryOverflow,

    /// The signing library failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl TokenError {
    /// Whether this is a client-side rejection rather than a server fault
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::EmptySubject | Self::ExpiryOverflow | Self::Signing(_))
    }
}

/// Mints and verifies bearer tokens with a fixed shared secret
///
/// Built once at startup from configuration and shared read-only by every
/// request handler.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Create a codec
    ///
    /// # Arguments
    /// * `secret` - HMAC shared secret
    /// * `issuer` - value written to and required in the `iss` claim
    /// * `ttl` - token lifetime
    pub fn new(secret: &[u8], issuer: impl Into<String>, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a token for `user_id` valid from now
    pub fn mint(&self, user_id: &str) -> Result<String, TokenError> {
        self.mint_at(user_id, Utc::now())
    }

    /// Mint a token as if the current time were `now`
    pub fn mint_at(&self, user_id: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        if user_id.is_empty() {
            return Err(TokenError::EmptySubject);
        }

        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::ExpiryOverflow)?;

        let claims = Claims {
            user_id: user_id.to_string(),
            iss: self.issuer.clone(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Verify a `Bearer <token>` string and return its claims
    pub fn verify(&self, bearer: &str) -> Result<Claims, TokenError> {
        self.verify_at(bearer, Utc::now())
    }

    /// Verify a `Bearer <token>` string against the clock value `now`
    ///
    /// Checks run in order: prefix, structure, signature, issuer, expiry.
    /// A token is expired once `now` reaches its `exp`.
    pub fn verify_at(&self, bearer: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token = bearer
            .strip_prefix(BEARER_PREFIX)
            .ok_or(TokenError::MalformedToken)?;

        self.check_structure(token)?;

        // Expiry is checked below against the supplied clock, without leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);

        // Header and payload already decoded, so what is left to fail is the signature.
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| match e.kind() {
            ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidToken => TokenError::MalformedToken,
            _ => TokenError::InvalidSignature,
        })?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    /// Require three segments with a decodable header and claims payload
    fn check_structure(&self, token: &str) -> Result<(), TokenError> {
        if token.split('.').count() != 3 {
            return Err(TokenError::MalformedToken);
        }

        decode_header(token).map_err(|_| TokenError::MalformedToken)?;

        let mut unsigned = Validation::new(Algorithm::HS256);
        unsigned.insecure_disable_signature_validation();
        unsigned.validate_exp = false;
        unsigned.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding, &unsigned)
            .map(|_| ())
            .map_err(|_| TokenError::MalformedToken)
    }
}
