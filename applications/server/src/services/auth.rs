/// Session service - signed admin session tokens
use crate::error::{Result, ServerError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

// Ten years
const MAX_SESSION_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Clone)]
pub struct SessionService {
    secret: String,
    session_expiration: Duration,
    allowed_email: String,
    sign_in_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (session email)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl SessionService {
    pub fn new(
        secret: String,
        session_expiration_hours: u64,
        allowed_email: String,
        sign_in_path: String,
    ) -> Self {
        let hours = i64::try_from(session_expiration_hours)
            .unwrap_or(MAX_SESSION_HOURS)
            .min(MAX_SESSION_HOURS);
        Self {
            secret,
            session_expiration: Duration::hours(hours),
            allowed_email: allowed_email.trim().to_string(),
            sign_in_path,
        }
    }

    /// Where unauthenticated visitors of protected pages are sent
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Whether this email may use the import page
    pub fn is_allowed(&self, email: &str) -> bool {
        !self.allowed_email.is_empty() && email.trim().eq_ignore_ascii_case(&self.allowed_email)
    }

    /// Create a session token for an email address
    pub fn create_session_token(&self, email: &str) -> Result<String> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ServerError::Auth("Session email is required".to_string()));
        }

        let now = Utc::now();
        let exp = now + self.session_expiration;

        let claims = Claims {
            sub: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(ServerError::from)
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Verify a session token and return the email it was issued for
    pub fn verify_session(&self, token: &str) -> Result<String> {
        let claims = self.verify_token(token)?;
        if claims.sub.trim().is_empty() {
            return Err(ServerError::Auth("Session has no email".to_string()));
        }
        Ok(claims.sub)
    }
}
