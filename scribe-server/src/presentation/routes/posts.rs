use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{create_post, get_post, list_posts, update_post};
use crate::presentation::middleware::auth::jwt_auth_middleware;

/// Every post route sits behind the bearer-token gate.
pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_post).put(update_post))
        .route("/get/{id}", get(get_post))
        .route("/all", get(list_posts))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ))
}
