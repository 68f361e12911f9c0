use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
}

/// Seam to the external post store. `update_post_owned` must filter by
/// (id, owner) in one operation so a non-owner update matches zero rows.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn find_post(&self, id: &str) -> Result<Option<Post>, DomainError>;
    async fn update_post_owned(
        &self,
        post_id: &str,
        owner_id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError>;
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
}
