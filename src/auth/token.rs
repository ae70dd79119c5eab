use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// How long an issued token stays valid.
const TOKEN_LIFETIME_SECS: i64 = 60 * 60; // 1 hour

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the authenticated user's email address.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Issues and validates signed bearer tokens.
///
/// Both keys are derived from the configured secret when the service is
/// constructed, once per process. The same instance must be used for
/// issuance and validation; tokens signed by one secret are unverifiable
/// under another.
///
/// Tokens are stateless: there is no revocation list, and a token's
/// lifecycle is entirely implicit in its expiry claim.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token asserting the given email address.
    ///
    /// The claim set is {subject, issued-at = now, expiry = now + 1 hour},
    /// signed with HMAC-SHA256 into the standard three-part JWT wire
    /// format. Reads the system clock; no other side effects.
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp();

        let claims = Claims {
            sub: email.to_owned(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token's signature and expiry and decodes its claims.
    ///
    /// Every rejection collapses into the same `Unauthorized` error so the
    /// response does not reveal whether the signature, the structure, or
    /// the expiry was at fault. The underlying cause is kept internal at
    /// debug log level.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("Token rejected: {}", e);
                AppError::Unauthorized("Invalid token".into())
            })
    }

    /// Boolean convenience wrapper around [`validate`](Self::validate).
    ///
    /// Swallows the failure reason; prefer `validate` anywhere the caller
    /// can propagate an error.
    pub fn is_valid(&self, token: &str) -> bool {
        self.validate(token).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn service() -> TokenService {
        TokenService::new("test-secret-for-token-service")
    }

    #[test]
    fn test_token_issuance_and_validation() {
        let tokens = service();
        let token = tokens.issue("a@x.com").unwrap();

        let claims = tokens.validate(&token).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_token_wire_format_is_three_part() {
        let tokens = service();
        let token = tokens.issue("a@x.com").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = service();

        // Hand-craft a token whose expiry is well in the past (beyond the
        // default validation leeway).
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "b@x.com".to_string(),
            iat: now - 3 * 60 * 60,
            exp: now - 2 * 60 * 60,
        };
        let expired_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret-for-token-service".as_bytes()),
        )
        .unwrap();

        match tokens.validate(&expired_token) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid token"),
            Ok(_) => panic!("Token should have been rejected as expired"),
            Err(e) => panic!("Unexpected error type: {:?}", e),
        }
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let tokens = service();
        let token = tokens.issue("c@x.com").unwrap();

        // Flip one character in the signature segment.
        let mut parts: Vec<String> = token.split('.').map(str::to_owned).collect();
        let sig = parts.last_mut().unwrap();
        let flipped = if sig.ends_with('A') { 'B' } else { 'A' };
        sig.pop();
        sig.push(flipped);
        let tampered = parts.join(".");

        assert_ne!(tampered, token);
        assert!(tokens.validate(&tampered).is_err());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let tokens = service();
        assert!(tokens.validate("not-a-token").is_err());
        assert!(tokens.validate("").is_err());
        assert!(tokens.validate("a.b").is_err());
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let tokens = service();
        let other = TokenService::new("a-completely-different-secret");

        let token = other.issue("d@x.com").unwrap();
        assert!(tokens.validate(&token).is_err());
        // But verifiable by the issuing service itself.
        assert_eq!(other.validate(&token).unwrap().sub, "d@x.com");
    }

    #[test]
    fn test_rejection_reason_is_uniform() {
        let tokens = service();
        let other = TokenService::new("a-completely-different-secret");
        let forged = other.issue("e@x.com").unwrap();

        // Bad signature and malformed structure must be indistinguishable
        // from the caller's point of view.
        let bad_signature = match tokens.validate(&forged) {
            Err(AppError::Unauthorized(msg)) => msg,
            other => panic!("Unexpected result: {:?}", other),
        };
        let malformed = match tokens.validate("garbage") {
            Err(AppError::Unauthorized(msg)) => msg,
            other => panic!("Unexpected result: {:?}", other),
        };
        assert_eq!(bad_signature, malformed);
    }

    #[test]
    fn test_is_valid_wrapper() {
        let tokens = service();
        let token = tokens.issue("f@x.com").unwrap();

        assert!(tokens.is_valid(&token));
        assert!(!tokens.is_valid("not-a-token"));
    }
}
