//! Bearer tokens: backend-signed, or an unsigned local placeholder.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};

use crate::models::TokenPayload;

/// Signature segment of every placeholder token. Never a valid signature.
pub const PLACEHOLDER_SIGNATURE: &str = "DUMMY_SIGNATURE";

pub const ISSUED_MESSAGE: &str = "JWT token created successfully";
pub const FABRICATED_MESSAGE: &str =
    "Demo JWT token created successfully (not cryptographically valid)";

/// Result of a token request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuedToken {
    /// Signed by the backend; used verbatim.
    Issued(String),
    /// Built locally after the backend call failed. Structurally a JWT, but unsigned.
    Fabricated(String),
}

impl IssuedToken {
    pub fn token(&self) -> &str {
        match self {
            IssuedToken::Issued(token) | IssuedToken::Fabricated(token) => token,
        }
    }

    pub fn into_token(self) -> String {
        match self {
            IssuedToken::Issued(token) | IssuedToken::Fabricated(token) => token,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, IssuedToken::Fabricated(_))
    }

    pub fn status_message(&self) -> &'static str {
        match self {
            IssuedToken::Issued(_) => ISSUED_MESSAGE,
            IssuedToken::Fabricated(_) => FABRICATED_MESSAGE,
        }
    }
}

/// Build `header.payload.DUMMY_SIGNATURE` for `payload`, expiring `payload.exp`
/// hours after `now`.
pub fn fabricate_placeholder_token(payload: &TokenPayload, now: DateTime<Utc>) -> String {
    let header = serde_json::json!({ "alg": "HS256", "typ": "JWT" });
    let expires_at = now + Duration::hours(i64::from(payload.exp));
    let claims = serde_json::json!({
        "sub": payload.sub,
        "name": payload.name,
        "role": payload.role.as_str(),
        "exp": expires_at.timestamp(),
    });

    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(claims.to_string()),
        PLACEHOLDER_SIGNATURE
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::TokenRole;

    fn decode_segment(segment: &str) -> serde_json::Value {
        let bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn placeholder_has_three_segments_and_dummy_signature() {
        let payload = TokenPayload {
            sub: "user123".into(),
            name: "John Doe".into(),
            role: TokenRole::Admin,
            exp: 2,
        };
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let token = fabricate_placeholder_token(&payload, now);

        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], PLACEHOLDER_SIGNATURE);

        let header = decode_segment(segments[0]);
        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");

        let claims = decode_segment(segments[1]);
        assert_eq!(claims["sub"], "user123");
        assert_eq!(claims["name"], "John Doe");
        assert_eq!(claims["role"], "admin");
        assert_eq!(claims["exp"], now.timestamp() + 2 * 3600);
    }

    #[test]
    fn variants_are_distinguishable() {
        let issued = IssuedToken::Issued("signed".into());
        let fabricated = IssuedToken::Fabricated("a.b.DUMMY_SIGNATURE".into());
        assert!(!issued.is_placeholder());
        assert!(fabricated.is_placeholder());
        assert_ne!(issued.status_message(), fabricated.status_message());
        assert_eq!(issued.token(), "signed");
        assert_eq!(fabricated.into_token(), "a.b.DUMMY_SIGNATURE");
    }
}
