/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the signed session tokens returned by
 * `/login` and `/register`. Tokens are HS256 JWTs whose `username` claim
 * identifies the user; they are verified statelessly on every request.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::server::config::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated user
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Signing and verification keys derived from the configured secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl SessionKeys {
    /// Create keys from a secret and a token lifetime
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Create keys from the server configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_secs)
    }

    /// Create a JWT token for a user
    pub fn create_token(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = now_secs();
        let claims = Claims {
            username: username.to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a JWT token
    ///
    /// Fails if the signature does not match or the token has expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
