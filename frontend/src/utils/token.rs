use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token does not have three dot-separated segments")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub exp: Option<i64>,
}

/// Decodes the claims segment of a JWT-shaped bearer token.
///
/// The signature is not verified; the backend owns that. The frontend only
/// needs the embedded expiry.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    // Some issuers keep the padding even in the URL-safe alphabet.
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&decoded)?)
}

pub fn now_epoch_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn is_expired(token: Option<&str>) -> bool {
    is_expired_at(token, now_epoch_seconds())
}

/// Fails closed: a missing token, an undecodable token, or one without a
/// numeric `exp` claim all count as expired.
pub fn is_expired_at(token: Option<&str>, now: i64) -> bool {
    let Some(token) = token else {
        return true;
    };
    match decode_claims(token) {
        Ok(TokenClaims { exp: Some(exp) }) => exp < now,
        Ok(TokenClaims { exp: None }) => {
            log::warn!("bearer token carries no exp claim; treating as expired");
            true
        }
        Err(err) => {
            log::warn!("failed to decode bearer token: {}", err);
            true
        }
    }
}

#[cfg(test)]
pub(crate) fn token_with_claims(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
pub(crate) fn token_expiring_at(exp: i64) -> String {
    token_with_claims(serde_json::json!({ "id": 7, "exp": exp }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_760_000_000;

    #[test]
    fn missing_token_is_expired() {
        assert!(is_expired_at(None, NOW));
        assert!(is_expired(None));
    }

    #[test]
    fn malformed_tokens_are_expired() {
        assert!(is_expired_at(Some(""), NOW));
        assert!(is_expired_at(Some("not-a-jwt"), NOW));
        assert!(is_expired_at(Some("a.b"), NOW));
        assert!(is_expired_at(Some("a.b.c.d"), NOW));
        assert!(is_expired_at(Some("header.%%%.sig"), NOW));
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(is_expired_at(Some(&not_json), NOW));
    }

    #[test]
    fn token_without_exp_is_expired() {
        let token = token_with_claims(json!({ "id": 1 }));
        assert!(is_expired_at(Some(&token), NOW));
        let token = token_with_claims(json!({ "exp": "tomorrow" }));
        assert!(is_expired_at(Some(&token), NOW));
    }

    #[test]
    fn expiry_compares_strictly_against_now() {
        assert!(is_expired_at(Some(&token_expiring_at(NOW - 1)), NOW));
        assert!(!is_expired_at(Some(&token_expiring_at(NOW)), NOW));
        assert!(!is_expired_at(Some(&token_expiring_at(NOW + 3600)), NOW));
    }

    #[test]
    fn padded_payload_still_decodes() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":12}"#);
        assert!(payload.ends_with('='));
        let token = format!("h.{}.s", payload);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(12));
    }

    #[test]
    fn fresh_token_is_not_expired_against_wall_clock() {
        let token = token_expiring_at(now_epoch_seconds() + 600);
        assert!(!is_expired(Some(&token)));
    }
}
