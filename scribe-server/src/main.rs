use std::sync::Arc;

use anyhow::Result;

use scribe_server::application::auth_service::AuthService;
use scribe_server::application::post_service::PostService;
use scribe_server::data::repositories::postgres::post_store::PostgresPostStore;
use scribe_server::data::repositories::postgres::user_store::PostgresUserStore;
use scribe_server::infrastructure::database::create_pool;
use scribe_server::infrastructure::jwt::JwtService;
use scribe_server::infrastructure::logging::init_logging;
use scribe_server::infrastructure::settings::Settings;
use scribe_server::presentation::AppState;
use scribe_server::server::run_http;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;

    let jwt = Arc::new(JwtService::new(
        &settings.jwt_secret,
        settings.jwt_ttl_seconds,
    ));
    let user_store = Arc::new(PostgresUserStore::new(pool.clone()));
    let post_store = Arc::new(PostgresPostStore::new(pool));
    let auth_service = Arc::new(AuthService::new(user_store, jwt.clone()));
    let post_service = Arc::new(PostService::new(post_store));

    let state = AppState::new(auth_service, post_service, jwt);

    run_http(&settings, state).await
}
