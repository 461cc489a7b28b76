//! Access token claims and the authenticated-user extractor.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized, web};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;
use crate::domain::user::User;
use crate::models::config::ServerConfig;

/// Name of the cookie carrying the access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user's uuid.
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_user(user: &User, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user.uuid.to_string(),
            username: user.username.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        }
    }

    /// Signs the claims with HS256.
    pub fn encode(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Verifies signature and expiry of `token`.
    pub fn decode(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

/// User identity extracted from a valid access token.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uuid: UserId,
    pub username: String,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = crate::domain::types::TypeConstraintError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: claims.sub.parse()?,
            username: claims.username,
        })
    }
}

/// Pulls the raw token from `Authorization: Bearer` or the access cookie.
fn token_from_request(req: &HttpRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string());

    bearer.or_else(|| {
        req.cookie(ACCESS_TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            log::error!("Server configuration is not registered as app data");
            return ready(Err(ErrorUnauthorized("Unauthorized")));
        };

        let Some(token) = token_from_request(req) else {
            return ready(Err(ErrorUnauthorized("Unauthorized")));
        };

        let user = Claims::decode(&token, &config.secret)
            .map_err(|err| {
                log::warn!("Rejected access token: {err}");
                ErrorUnauthorized("Unauthorized")
            })
            .and_then(|claims| {
                AuthenticatedUser::try_from(claims).map_err(|_| ErrorUnauthorized("Unauthorized"))
            });

        ready(user)
    }
}
