use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Signed token payload.
///
/// `sub` is the subject id the pair was issued for, `exp`/`iat` are Unix
/// timestamps and `jti` is a per-token unique id. Instances of this type
/// have passed full signature and expiry verification.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Subject id (subject claim)
    pub sub: i64,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Unique token identifier (JWT ID)
    pub jti: String,
}

/// Token payload decoded without signature verification.
///
/// Produced only by the codec's unverified decode path. Good for a
/// revocation ledger lookup key, nothing else; no authorization decision
/// accepts this type.
#[derive(Debug, Clone, Deserialize)]
pub struct UnverifiedClaims {
    pub sub: i64,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,
}

// Request body for issuing a fresh pair
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
}

/// An access/refresh credential pair.
///
/// Always issued together for one subject; doubles as the request body for
/// the validate, refresh and logout operations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TokenPair {
    #[serde(rename = "accessToken")]
    #[validate(length(min = 1))]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_pair_wire_names() {
        let pair = TokenPair {
            access_token: "acc".to_string(),
            refresh_token: "ref".to_string(),
        };
        let serialized = serde_json::to_string(&pair).unwrap();
        assert!(serialized.contains(r#""accessToken":"acc""#));
        assert!(serialized.contains(r#""refreshToken":"ref""#));
    }

    #[test]
    fn test_login_request_deserialize() {
        let json = r#"{"subjectId":7}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.subject_id, 7);
    }

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: 7,
            exp: 1234567890,
            iat: 1234567800,
            jti: "test-jti-123".to_string(),
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":7"#));
        assert!(serialized.contains(r#""jti":"test-jti-123""#));
    }
}
