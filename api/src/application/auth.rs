use axum::{RequestPartsExt, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use base64::{Engine, engine::general_purpose};
use serde::Deserialize;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Owner identity for the current request.
///
/// The gateway in front of Larder authenticates users and signs the token;
/// here only the payload segment is decoded and `sub` taken as the owner id.
/// Requests without a usable identity are rejected with 401.
#[derive(Clone, Debug)]
pub struct UserContext {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: Uuid,
}

impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(context) = parts.extensions.get::<UserContext>().cloned() {
            return Ok(context);
        }

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                ApiError::Unauthorized("authentication required: provide a bearer token".to_string())
            })?;

        let context = decode_user_context(bearer.token())?;
        parts.extensions.insert(context.clone());

        Ok(context)
    }
}

fn decode_user_context(token: &str) -> Result<UserContext, ApiError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(ApiError::Unauthorized("invalid token".to_string()));
    }

    let decoded = general_purpose::URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|e| {
            tracing::error!("failed to decode token payload: {:?}", e);
            ApiError::Unauthorized("invalid token".to_string())
        })?;

    let claims: Claims = serde_json::from_slice(&decoded).map_err(|e| {
        tracing::error!("failed to deserialize token claims: {:?}", e);
        ApiError::Unauthorized("invalid token".to_string())
    })?;

    Ok(UserContext {
        user_id: claims.sub,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_for(payload: &str) -> String {
        let encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload);
        format!("header.{encoded}.signature")
    }

    #[test]
    fn decodes_the_sub_claim() {
        let user_id = Uuid::new_v4();
        let token = token_for(&format!(r#"{{"sub": "{user_id}", "exp": 0}}"#));

        let context = decode_user_context(&token).unwrap();
        assert_eq!(context.user_id, user_id);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decode_user_context("not-a-jwt").is_err());
        assert!(decode_user_context("a.b").is_err());
        assert!(decode_user_context(&token_for(r#"{"role": "user"}"#)).is_err());
    }
}
