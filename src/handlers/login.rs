//! Login and logout endpoints
//!
//! Placeholder authentication: credentials are checked against the demo
//! users in the configuration file. A successful login returns a session
//! token for the Authorization header.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::{auth::AuthInfo, error::AppError, handlers::analyze::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
}

/// Handle POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .config
        .auth
        .users
        .iter()
        .find(|u| u.enabled && u.email == req.email && u.password == req.password)
        .ok_or_else(|| {
            AppError::InvalidCredentials("Unknown user or wrong password".to_string())
        })?;

    let token = state.sessions.create(&user.email);
    info!(user = %user.email, "Login successful");

    Ok(Json(LoginResponse {
        token,
        email: user.email.clone(),
    }))
}

/// Handle POST /api/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthInfo>,
) -> Json<Value> {
    state.sessions.revoke(&auth.token);
    info!(user = %auth.email, "Logged out");

    Json(json!({ "status": "logged_out" }))
}
