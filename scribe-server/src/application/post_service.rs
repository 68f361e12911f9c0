use std::sync::Arc;

use crate::data::post_store::{NewPost, PostPatch, PostStore};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};

pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    pub async fn create_post(
        &self,
        author_id: &str,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            title: req.title,
            content: req.content,
            author_id: author_id.to_string(),
        };
        self.store.create_post(new_post).await
    }

    /// Absent posts are not an error at this level; the route contract
    /// responds 200 with a null post.
    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        self.store.find_post(id).await
    }

    pub async fn update_post(
        &self,
        actor_user_id: &str,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;
        let patch = PostPatch {
            title: req.title,
            content: req.content,
        };
        self.store
            .update_post_owned(&req.id, actor_user_id, patch)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {}", req.id)))
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.store.list_posts().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::PostService;
    use crate::data::post_store::{NewPost, PostPatch, PostStore};
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};

    #[derive(Clone)]
    struct FakePostStore {
        created_input: Arc<Mutex<Option<NewPost>>>,
        post_for_find: Arc<Mutex<Option<Post>>>,
        update_owned_result: Arc<Mutex<Option<Post>>>,
        update_owned_call: Arc<Mutex<Option<(String, String, PostPatch)>>>,
        list_result: Arc<Mutex<Vec<Post>>>,
    }

    impl FakePostStore {
        fn new() -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                post_for_find: Arc::new(Mutex::new(None)),
                update_owned_result: Arc::new(Mutex::new(None)),
                update_owned_call: Arc::new(Mutex::new(None)),
                list_result: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl PostStore for FakePostStore {
        async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_post(
                "p-1",
                &input.title,
                &input.content,
                &input.author_id,
            ))
        }

        async fn find_post(&self, _id: &str) -> Result<Option<Post>, DomainError> {
            Ok(self
                .post_for_find
                .lock()
                .expect("post_for_find mutex poisoned")
                .clone())
        }

        async fn update_post_owned(
            &self,
            post_id: &str,
            owner_id: &str,
            patch: PostPatch,
        ) -> Result<Option<Post>, DomainError> {
            *self
                .update_owned_call
                .lock()
                .expect("update_owned_call mutex poisoned") =
                Some((post_id.to_string(), owner_id.to_string(), patch));
            Ok(self
                .update_owned_result
                .lock()
                .expect("update_owned_result mutex poisoned")
                .clone())
        }

        async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
            Ok(self
                .list_result
                .lock()
                .expect("list_result mutex poisoned")
                .clone())
        }
    }

    #[tokio::test]
    async fn create_post_normalizes_request_before_store_call() {
        let store = FakePostStore::new();
        let service = PostService::new(Arc::new(store.clone()));

        let req = CreatePostRequest {
            title: "  title  ".to_string(),
            content: "  content  ".to_string(),
        };

        let created = service
            .create_post("u-10", req)
            .await
            .expect("create_post must succeed");

        assert_eq!(created.title, "title");
        assert_eq!(created.content, "content");

        let input = store
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("store input must be captured");
        assert_eq!(input.title, "title");
        assert_eq!(input.content, "content");
        assert_eq!(input.author_id, "u-10");
    }

    #[tokio::test]
    async fn get_post_tolerates_missing_post() {
        let store = FakePostStore::new();
        let service = PostService::new(Arc::new(store));

        let found = service
            .get_post("absent")
            .await
            .expect("lookup must succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_post_uses_owned_filter_contract() {
        let store = FakePostStore::new();
        *store
            .update_owned_result
            .lock()
            .expect("update_owned_result mutex poisoned") =
            Some(sample_post("p-7", "new", "body", "u-10"));

        let service = PostService::new(Arc::new(store.clone()));
        let req = UpdatePostRequest {
            id: "p-7".to_string(),
            title: "  new  ".to_string(),
            content: "  body  ".to_string(),
        };

        let updated = service
            .update_post("u-10", req)
            .await
            .expect("update must succeed");
        assert_eq!(updated.id, "p-7");

        let call = store
            .update_owned_call
            .lock()
            .expect("update_owned_call mutex poisoned")
            .clone()
            .expect("update call must be captured");
        assert_eq!(call.0, "p-7");
        assert_eq!(call.1, "u-10");
        assert_eq!(call.2.title, "new");
        assert_eq!(call.2.content, "body");
    }

    #[tokio::test]
    async fn update_post_reports_not_found_when_no_row_matched() {
        let store = FakePostStore::new();
        let service = PostService::new(Arc::new(store));

        let req = UpdatePostRequest {
            id: "p-7".to_string(),
            title: "new".to_string(),
            content: "body".to_string(),
        };

        let err = service
            .update_post("someone-else", req)
            .await
            .expect_err("update must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_posts_returns_store_contents() {
        let store = FakePostStore::new();
        *store.list_result.lock().expect("list_result mutex poisoned") =
            vec![sample_post("p-1", "a", "b", "u-10")];

        let service = PostService::new(Arc::new(store));
        let posts = service.list_posts().await.expect("list must succeed");

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author_id, "u-10");
    }

    fn sample_post(id: &str, title: &str, content: &str, author_id: &str) -> Post {
        Post::new(id, title, content, author_id).expect("sample post must be valid")
    }
}
