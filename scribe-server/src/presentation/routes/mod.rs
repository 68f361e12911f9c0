use axum::Router;

use super::AppState;

pub(crate) mod auth;
pub(crate) mod posts;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/v1/user", auth::router())
        .nest("/api/v1/post", posts::router(state))
}
