use crate::{error::AppError, session::SessionStore};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authentication information attached to each authenticated request
#[derive(Debug, Clone)]
pub struct AuthInfo {
    /// Email of the logged-in user
    pub email: String,
    /// Session token the request authenticated with
    pub token: String,
}

/// Session authentication middleware
/// Extracts the Bearer token from the Authorization header and validates it
/// against the in-memory session store.
pub async fn auth_middleware(
    State(sessions): State<Arc<SessionStore>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    // Own the token so the borrow of `req` ends before the mutable use below
    let token = extract_bearer_token(auth_header)?.to_string();

    let session = sessions
        .validate(&token)
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired session".to_string()))?;

    req.extensions_mut().insert(AuthInfo {
        email: session.email,
        token,
    });

    Ok(next.run(req).await)
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(auth_header: &str) -> Result<&str, AppError> {
    const BEARER_PREFIX: &str = "Bearer ";

    if !auth_header.starts_with(BEARER_PREFIX) {
        return Err(AppError::Unauthorized(
            "Authorization header must use Bearer scheme".to_string(),
        ));
    }

    let token = &auth_header[BEARER_PREFIX.len()..];

    if token.is_empty() {
        return Err(AppError::Unauthorized("Bearer token is empty".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token_success() {
        let header = "Bearer 17cf0fd3-d51b-4b59-977d-b899dafb3022";
        let token = extract_bearer_token(header).unwrap();
        assert_eq!(token, "17cf0fd3-d51b-4b59-977d-b899dafb3022");
    }

    #[test]
    fn test_extract_bearer_token_missing_prefix() {
        let result = extract_bearer_token("17cf0fd3-d51b-4b59-977d-b899dafb3022");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_bearer_token_empty() {
        let result = extract_bearer_token("Bearer ");
        assert!(result.is_err());
    }

    mod middleware {
        use super::super::*;
        use axum::{body::Body, http::Request, middleware, routing::get, Extension, Router};
        use std::time::Duration;
        use tower::ServiceExt;

        fn test_app(sessions: Arc<SessionStore>) -> Router {
            Router::new()
                .route(
                    "/whoami",
                    get(|Extension(auth): Extension<AuthInfo>| async move { auth.email }),
                )
                .layer(middleware::from_fn_with_state(sessions, auth_middleware))
        }

        #[tokio::test]
        async fn test_middleware_attaches_auth_info() {
            let sessions = Arc::new(SessionStore::new(Duration::from_secs(60)));
            let token = sessions.create("demo@example.com");
            let app = test_app(sessions);

            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/whoami")
                        .header("Authorization", format!("Bearer {}", token))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), 200);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&bytes[..], b"demo@example.com");
        }

        #[tokio::test]
        async fn test_middleware_rejects_unknown_token() {
            let sessions = Arc::new(SessionStore::new(Duration::from_secs(60)));
            let app = test_app(sessions);

            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/whoami")
                        .header("Authorization", "Bearer not-a-session")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), 401);
        }
    }
}
