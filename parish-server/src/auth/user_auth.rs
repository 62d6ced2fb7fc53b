//! Dashboard JWT authentication
//!
//! The access gateway for every member/contribution/expense route: requests
//! carry `Authorization: Bearer <token>`; handlers behind the middleware
//! trust the verified identity and never re-check credentials.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// JWT claims for dashboard users
#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Role: user | admin
    pub role: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated user identity extracted from JWT
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a JWT token for a user
pub fn create_token(
    user_id: i64,
    username: &str,
    role: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = UserClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        role: role.to_string(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Decode and validate a token, returning the identity it carries
pub fn verify_token(token: &str, secret: &str) -> Result<UserIdentity, jsonwebtoken::errors::Error> {
    let validation = Validation::default();
    let token_data = jsonwebtoken::decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    // A sub that doesn't parse as a user id is not a usable identity.
    let user_id = token_data
        .claims
        .sub
        .parse()
        .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject)?;

    Ok(UserIdentity {
        user_id,
        username: token_data.claims.username,
        role: token_data.claims.role,
    })
}

/// Middleware that extracts and verifies the user JWT from the Authorization header
pub async fn user_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| error_response(401, "Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| error_response(401, "Invalid Authorization format"))?;

    let identity = verify_token(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        error_response(401, "Invalid or expired token")
    })?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

fn error_response(status: u16, message: &str) -> Response {
    let body = serde_json::json!({ "error": message });
    let status =
        http::StatusCode::from_u16(status).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
    (status, axum::Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let token = create_token(42, "deacon", "user", "test-secret").unwrap();
        let identity = verify_token(&token, "test-secret").unwrap();
        assert_eq!(identity.user_id, 42);
        assert_eq!(identity.username, "deacon");
        assert_eq!(identity.role, "user");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(1, "deacon", "user", "secret-a").unwrap();
        assert!(verify_token(&token, "secret-b").is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_token("not.a.jwt", "test-secret").is_err());
    }

    #[test]
    fn test_non_numeric_sub_rejected() {
        let now = chrono::Utc::now();
        let claims = UserClaims {
            sub: "deacon".into(),
            username: "deacon".into(),
            role: "user".into(),
            exp: (now + chrono::Duration::hours(1)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(verify_token(&token, "test-secret").is_err());
    }
}
