//! Bearer-token parsing and HS256 JWT validation.
//!
//! Tokens are issued elsewhere; this service only verifies the signature,
//! expiry and (optionally) audience, then reads the `permissions` claim.

use classroom_core::error::CoreError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims read from every bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the caller's identity at the token issuer.
    #[serde(default)]
    pub sub: String,
    /// Granted permissions, e.g. `["get:drinks-detail", "post:drinks"]`.
    /// `None` when the issuer did not include the claim at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: i64,
    /// Audience, a string or a list of strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<serde_json::Value>,
}

/// Configuration for bearer-token validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret shared with the token issuer.
    pub secret: String,
    /// Expected `aud` claim. Audience is not checked when `None`.
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Load bearer-token configuration from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `AUTH_SECRET`   | **yes**  | --      |
    /// | `AUTH_AUDIENCE` | no       | --      |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("AUTH_SECRET").expect("AUTH_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "AUTH_SECRET must not be empty");

        let audience = std::env::var("AUTH_AUDIENCE")
            .ok()
            .filter(|a| !a.trim().is_empty());

        Self { secret, audience }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        match &self.audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        validation
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively. Every failure is a 401.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, CoreError> {
    let header = header
        .ok_or_else(|| CoreError::Unauthorized("Authorization header is expected.".into()))?;

    let mut parts = header.split_whitespace();
    let scheme = parts.next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(CoreError::Unauthorized(
            "Authorization header must start with \"Bearer\".".into(),
        ));
    }

    let token = parts
        .next()
        .ok_or_else(|| CoreError::Unauthorized("Token not found.".into()))?;

    if parts.next().is_some() {
        return Err(CoreError::Unauthorized(
            "Authorization header must be bearer token.".into(),
        ));
    }

    Ok(token)
}

/// Validate and decode a bearer token, returning the embedded [`Claims`].
///
/// Signature, expiry and the configured audience are checked.
pub fn validate_token(token: &str, config: &AuthConfig) -> Result<Claims, CoreError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &config.validation(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        let msg = match e.kind() {
            ErrorKind::ExpiredSignature => "Token expired.",
            ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
                "Incorrect claims. Please, check the audience and issuer."
            }
            _ => "Unable to parse authentication token.",
        };
        tracing::debug!(error = %e, "Bearer token rejected");
        CoreError::Unauthorized(msg.into())
    })
}

/// Sign an HS256 token carrying `permissions`, valid for `ttl_secs`.
///
/// Used by local tooling and tests; production tokens come from the issuer.
pub fn issue_token(
    subject: &str,
    permissions: Option<Vec<String>>,
    ttl_secs: i64,
    config: &AuthConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        permissions,
        exp: now + ttl_secs,
        iat: now,
        aud: config.audience.clone().map(serde_json::Value::String),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> AuthConfig {
        AuthConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            audience: None,
        }
    }

    #[test]
    fn test_issue_and_validate_token() {
        let config = test_config();
        let token = issue_token("barista", Some(vec!["get:drinks-detail".into()]), 600, &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, "barista");
        assert_eq!(claims.permissions, Some(vec!["get:drinks-detail".to_string()]));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_missing_permissions_claim_decodes_as_none() {
        let config = test_config();
        let token = issue_token("guest", None, 600, &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert!(claims.permissions.is_none());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Well beyond the default 60-second leeway.
        let token = issue_token("barista", Some(vec![]), -300, &config).unwrap();

        let err = validate_token(&token, &config).expect_err("expired token must fail");
        assert_matches!(err, CoreError::Unauthorized(msg) if msg == "Token expired.");
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = AuthConfig {
            secret: "secret-alpha".to_string(),
            audience: None,
        };
        let config_b = AuthConfig {
            secret: "secret-bravo".to_string(),
            audience: None,
        };

        let token = issue_token("barista", Some(vec![]), 600, &config_a).unwrap();

        let result = validate_token(&token, &config_b);
        assert!(
            result.is_err(),
            "token signed with a different secret must fail"
        );
    }

    #[test]
    fn test_audience_is_checked_when_configured() {
        let issuer = AuthConfig {
            secret: "shared".to_string(),
            audience: Some("coffee".to_string()),
        };
        let verifier = AuthConfig {
            secret: "shared".to_string(),
            audience: Some("tea".to_string()),
        };

        let token = issue_token("barista", Some(vec![]), 600, &issuer).unwrap();
        assert!(validate_token(&token, &issuer).is_ok());
        assert_matches!(
            validate_token(&token, &verifier),
            Err(CoreError::Unauthorized(msg)) if msg.starts_with("Incorrect claims")
        );
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(validate_token("not.a.jwt", &test_config()).is_err());
    }

    // -- parse_bearer --------------------------------------------------------

    #[test]
    fn test_parse_bearer_accepts_any_case_scheme() {
        assert_eq!(parse_bearer(Some("Bearer abc")).unwrap(), "abc");
        assert_eq!(parse_bearer(Some("bearer abc")).unwrap(), "abc");
    }

    #[test]
    fn test_parse_bearer_rejects_malformed_headers() {
        assert_matches!(parse_bearer(None), Err(CoreError::Unauthorized(_)));
        assert_matches!(parse_bearer(Some("Basic abc")), Err(CoreError::Unauthorized(_)));
        assert_matches!(
            parse_bearer(Some("Bearer")),
            Err(CoreError::Unauthorized(msg)) if msg == "Token not found."
        );
        assert_matches!(parse_bearer(Some("Bearer a b")), Err(CoreError::Unauthorized(_)));
    }
}
