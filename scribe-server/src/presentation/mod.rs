use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::post_service::PostService;
use crate::infrastructure::jwt::JwtService;

pub(crate) mod app_error;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

pub mod http_handlers;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub post_service: Arc<PostService>,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        post_service: Arc<PostService>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            auth_service,
            post_service,
            jwt,
        }
    }
}
