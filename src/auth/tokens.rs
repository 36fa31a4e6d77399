/**
 * Token Issuance and Verification
 *
 * Signed HS256 tokens prove identity for a bounded window. The claims embed
 * the account id under a `user` object; the signing secret is passed in
 * explicitly from the configuration rather than read from the environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Validity window for issued tokens, in seconds.
pub const TOKEN_TTL_SECS: u64 = 36000;

/// Subject embedded in the claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenUser {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: TokenUser,
    /// Issued at (Unix timestamp).
    pub iat: u64,
    /// Expiration (Unix timestamp).
    pub exp: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Issue a token for an account id, valid for [`TOKEN_TTL_SECS`].
pub fn issue_token(user_id: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        user: TokenUser {
            id: user_id.to_owned(),
        },
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verify signature and expiry, returning the decoded claims.
///
/// Expiry is exact: no clock leeway, so a token is rejected the second its
/// validity window closes.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret";

    #[test]
    fn round_trip_preserves_the_subject() {
        let token = issue_token("account-1", SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.user.id, "account-1");
    }

    #[test]
    fn validity_window_is_36000_seconds() {
        let token = issue_token("account-1", SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("account-1", SECRET).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = unix_now();
        let claims = Claims {
            user: TokenUser {
                id: "account-1".to_owned(),
            },
            iat: now - TOKEN_TTL_SECS - 600,
            exp: now - 600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn expiry_has_no_clock_leeway() {
        let now = unix_now();
        let claims = Claims {
            user: TokenUser {
                id: "account-1".to_owned(),
            },
            iat: now - TOKEN_TTL_SECS,
            // Inside the default 60s leeway; still expired for us.
            exp: now - 30,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token("not.a.token", SECRET).is_err());
    }
}
