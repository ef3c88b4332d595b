use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid: 10 days.
pub const TOKEN_TTL_SECS: u64 = 60 * 60 * 24 * 10;

/// Claims encoded within an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,
    /// Issued-at timestamp, seconds since epoch.
    pub iat: u64,
    /// Expiration timestamp, seconds since epoch.
    pub exp: u64,
}

impl Claims {
    /// Claims for `username` issued at `issued_at`, expiring one TTL later.
    pub fn for_subject(username: &str, issued_at: u64) -> Self {
        Self {
            sub: username.to_string(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECS,
        }
    }

    /// Claims for `username` issued now.
    pub fn issued_now(username: &str) -> Self {
        Self::for_subject(username, Utc::now().timestamp() as u64)
    }
}

/// Process-scoped signing key pair, built once from the base64-encoded
/// secret and injected wherever tokens are signed or verified.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Builds the HS512 key pair from a base64-encoded secret. The decoded
    /// secret must be at least as long as the HS512 block requires.
    pub fn from_base64_secret(secret: &str) -> Result<Self, JwtError> {
        Ok(Self {
            encoding: EncodingKey::from_base64_secret(secret)?,
            decoding: DecodingKey::from_base64_secret(secret)?,
        })
    }

    /// Signs the claims into a compact token.
    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS512), claims, &self.encoding)
    }

    /// Verifies signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS512))
            .map(|data| data.claims)
    }
}
