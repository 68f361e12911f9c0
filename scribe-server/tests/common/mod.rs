use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use scribe_server::application::auth_service::AuthService;
use scribe_server::application::post_service::PostService;
use scribe_server::data::post_store::{NewPost, PostPatch, PostStore};
use scribe_server::data::user_store::{NewUser, UserCredentials, UserStore};
use scribe_server::domain::error::DomainError;
use scribe_server::domain::post::Post;
use scribe_server::domain::user::User;
use scribe_server::infrastructure::jwt::JwtService;
use scribe_server::presentation::AppState;
use scribe_server::server::build_router;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-signing-0123456789";

/// In-memory stand-in for the external store, good enough to drive the
/// full HTTP surface without a database.
pub struct InMemoryUserStore {
    users: Mutex<Vec<(User, String)>>,
    next_id: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.lock().expect("users mutex poisoned");
        if users.iter().any(|(user, _)| user.email == input.email) {
            return Err(DomainError::AlreadyExists("email".to_string()));
        }

        let id = format!("user-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let user = User::new(id, input.full_name, input.email)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        users.push((user.clone(), input.password_hash));
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let users = self.users.lock().expect("users mutex poisoned");
        Ok(users
            .iter()
            .find(|(user, _)| user.email == email)
            .map(|(user, password_hash)| UserCredentials {
                user: user.clone(),
                password_hash: password_hash.clone(),
            }))
    }
}

pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicUsize,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().expect("posts mutex poisoned").len()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let id = format!("post-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let post = Post::new(id, input.title, input.content, input.author_id)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        self.posts
            .lock()
            .expect("posts mutex poisoned")
            .push(post.clone());
        Ok(post)
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.lock().expect("posts mutex poisoned");
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn update_post_owned(
        &self,
        post_id: &str,
        owner_id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.lock().expect("posts mutex poisoned");
        let Some(post) = posts
            .iter_mut()
            .find(|post| post.id == post_id && post.author_id == owner_id)
        else {
            return Ok(None);
        };

        post.title = patch.title;
        post.content = patch.content;
        Ok(Some(post.clone()))
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.lock().expect("posts mutex poisoned").clone())
    }
}

/// Spawns the app on a random port over in-memory stores.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub post_store: Arc<InMemoryPostStore>,
    pub jwt: Arc<JwtService>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let jwt = Arc::new(JwtService::new(TEST_JWT_SECRET, 3600));
        let user_store = Arc::new(InMemoryUserStore::new());
        let post_store = Arc::new(InMemoryPostStore::new());

        let auth_service = Arc::new(AuthService::new(user_store, jwt.clone()));
        let post_service = Arc::new(PostService::new(post_store.clone()));
        let state = AppState::new(auth_service, post_service, jwt.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let address = format!("http://{}", listener.local_addr().expect("local addr"));

        let app = build_router(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server must run");
        });

        Self {
            address,
            client: reqwest::Client::new(),
            post_store,
            jwt,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("request must be sent")
    }

    pub async fn post_json_auth(
        &self,
        path: &str,
        token: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("request must be sent")
    }

    pub async fn put_json_auth(
        &self,
        path: &str,
        token: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("request must be sent")
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("request must be sent")
    }

    /// Signs up a fresh user and returns its bearer token.
    pub async fn signup_token(&self, full_name: &str, email: &str, password: &str) -> String {
        let response = self
            .post_json(
                "/api/v1/user/signup",
                &serde_json::json!({
                    "fullName": full_name,
                    "email": email,
                    "password": password,
                }),
            )
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("signup body must parse");
        body["token"]
            .as_str()
            .expect("signup must return a token")
            .to_string()
    }
}
