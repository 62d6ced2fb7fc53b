//! API routes for parish-server

pub mod auth;
pub mod categories;
pub mod contributions;
pub mod expenses;
pub mod health;
pub mod members;

use axum::routing::{get, post};
use axum::{Router, middleware};
use http::Method;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use shared::error::AppError;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::user_auth::user_auth_middleware;
use crate::error::ServiceError;
use crate::state::AppState;

/// Handler result carrying a transparent business error
pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Handler result where DB errors propagate with `?` (logged, mapped to 500)
pub type ServiceResult<T> = Result<axum::Json<T>, ServiceError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Everything behind the bearer-token gateway
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/api/members/{id}",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        .route("/api/ministries", get(categories::list_ministries))
        .route("/api/departments", get(categories::list_departments))
        .route(
            "/api/contributions",
            get(contributions::list_contributions).post(contributions::create_contribution),
        )
        .route(
            "/api/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_auth_middleware,
        ));

    // Public: health check and credential exchange
    let public = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
