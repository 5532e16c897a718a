use crate::error::PortariusError;
use actix_web::HttpRequest;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use portarius_domain::{User, UserRole};
use portarius_infra::PortariusContext;
use portarius_utils::create_random_secret;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const TOKEN_VALIDITY_HOURS: i64 = 24;
const MAX_AUTH_HEADER_LEN: usize = 1000;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    exp: usize,
    iat: usize,
    user_id: String,
    role: UserRole,
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .replace("Bearer", "")
        .replace("bearer", "")
        .trim()
        .to_string()
}

pub fn create_token(user: &User, jwt_secret: &str, now: DateTime<Utc>) -> anyhow::Result<String> {
    let claims = Claims {
        exp: (now + Duration::hours(TOKEN_VALIDITY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
        user_id: user.id.as_string(),
        role: user.role,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

fn decode_token(jwt_secret: &str, token: &str) -> anyhow::Result<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    )?
    .claims;

    Ok(claims)
}

/// Validates the `Authorization: Bearer` header and resolves the
/// authenticated `User`. Everything except `/auth` goes through this.
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &PortariusContext,
) -> Result<User, PortariusError> {
    let token = match req.headers().get("authorization") {
        Some(token) => token,
        None => {
            return Err(PortariusError::Unauthorized(
                "No authorization token provided".into(),
            ))
        }
    };

    let token = token.to_str().map_err(|_| {
        PortariusError::Unauthorized("Malformed authorization token provided".into())
    })?;

    if token.len() > MAX_AUTH_HEADER_LEN {
        return Err(PortariusError::HeadersTooLarge(
            "Authorization header too large".into(),
        ));
    }

    if !token.starts_with("Bearer ") {
        return Err(PortariusError::Unauthorized(
            "Malformed authorization token provided".into(),
        ));
    }

    let token = parse_authtoken_header(token);
    let claims = decode_token(&ctx.config.jwt_secret, &token)
        .map_err(|_| PortariusError::Unauthorized("Invalid authorization token".into()))?;

    let user_id = claims
        .user_id
        .parse()
        .map_err(|_| PortariusError::Unauthorized("Invalid authorization token".into()))?;

    match ctx.repos.users.find(&user_id).await {
        Some(user) => Ok(user),
        None => Err(PortariusError::Unauthorized(
            "Unable to find user from credentials".into(),
        )),
    }
}

/// Salted SHA-256 digest stored as `salt$hex`.
pub fn hash_password(password: &str) -> String {
    let salt = create_random_secret(16);
    format!("{}${}", salt, digest_password(&salt, password))
}

pub fn verify_password(password: &str, stored_digest: &str) -> bool {
    let mut parts = stored_digest.splitn(2, '$');
    let salt = match parts.next() {
        Some(salt) => salt,
        None => return false,
    };
    let digest = match parts.next() {
        Some(digest) => digest,
        None => return false,
    };
    digest_password(salt, password) == digest
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use portarius_domain::ID;

    fn test_user() -> User {
        User {
            id: ID::new(),
            name: "Porter".into(),
            email: "porter@example.com".into(),
            password_digest: hash_password("hunter2"),
            role: UserRole::User,
        }
    }

    #[test]
    fn it_verifies_correct_passwords() {
        let digest = hash_password("hunter2");
        assert!(verify_password("hunter2", &digest));
        assert!(!verify_password("hunter3", &digest));
        assert!(!verify_password("hunter2", "garbage-digest"));
    }

    #[test]
    fn equal_passwords_have_different_digests() {
        assert_ne!(hash_password("hunter2"), hash_password("hunter2"));
    }

    #[test]
    fn token_roundtrip_preserves_the_user() {
        let user = test_user();
        let token = create_token(&user, "secret", Utc::now()).unwrap();
        let claims = decode_token("secret", &token).unwrap();
        assert_eq!(claims.user_id, user.id.as_string());
        assert_eq!(claims.role, UserRole::User);
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let user = test_user();
        let issued = Utc.ymd(2020, 1, 1).and_hms(12, 0, 0);
        let token = create_token(&user, "secret", issued).unwrap();
        assert!(decode_token("secret", &token).is_err());
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let user = test_user();
        let token = create_token(&user, "secret", Utc::now()).unwrap();
        assert!(decode_token("other-secret", &token).is_err());
    }
}
