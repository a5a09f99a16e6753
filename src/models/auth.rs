//! JWT session handling: token issuing, verification and the request extractor.

use std::future::{Ready, ready};

use actix_web::cookie::{Cookie, time::Duration as CookieDuration};
use actix_web::error::{ErrorInternalServerError, InternalError};
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::dto::api::ApiError;
use crate::models::config::ServerConfig;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "jwt_token";

pub const USER_ROLE: &str = "user";

/// Data inside a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub display: String,
    #[serde(rename = "username")]
    pub login: String,
    pub role: String,
    pub exp: i64,
}

/// Signs a token for the given account valid for `ttl_hours`.
pub fn issue_token(
    display: &str,
    login: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        display: display.to_string(),
        login: login.to_string(),
        role: USER_ROLE.to_string(),
        exp: (Utc::now() + Duration::hours(ttl_hours)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies signature and expiry of `token`.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Cookie storing a freshly issued token.
pub fn token_cookie(token: String, config: &ServerConfig) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .max_age(CookieDuration::hours(config.token_ttl_hours))
        .finish()
}

/// Cookie instructing the browser to drop the token.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();
    cookie
}

/// User identity extracted from a valid `jwt_token` cookie.
///
/// Handlers that only want to know whether someone is signed in take
/// `Option<AuthenticatedUser>`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthenticatedUser {
    pub display: String,
    pub login: String,
    pub role: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            display: claims.display,
            login: claims.login,
            role: claims.role,
        }
    }
}

fn unauthorized() -> actix_web::Error {
    InternalError::from_response(
        "unauthorized",
        HttpResponse::Unauthorized().json(ApiError::new("unauthorized")),
    )
    .into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, actix_web::Error> {
    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or_else(|| ErrorInternalServerError("server configuration is not registered"))?;
    let cookie = req.cookie(TOKEN_COOKIE).ok_or_else(unauthorized)?;
    let claims = decode_token(cookie.value(), &config.secret).map_err(|err| {
        log::debug!("Rejected session token: {err}");
        unauthorized()
    })?;
    Ok(claims.into())
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-test-secret-test-secret-test-secret-test-secret-1234";

    #[test]
    fn issued_token_round_trips_claims() {
        let token = issue_token("Alice", "alice", SECRET, 1).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.display, "Alice");
        assert_eq!(claims.login, "alice");
        assert_eq!(claims.role, USER_ROLE);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token("Alice", "alice", SECRET, 1).unwrap();
        assert!(decode_token(&token, &SECRET.replace('t', "x")).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token("Alice", "alice", SECRET, -2).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }

    #[test]
    fn removal_cookie_is_expired() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
    }
}
