use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::data::post_store::{NewPost, PostPatch, PostStore};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub struct PostgresPostStore {
    pool: PgPool,
}

impl PostgresPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: String,
    title: String,
    content: String,
    author_id: String,
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let id = Uuid::new_v4().to_string();
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, title, content, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author_id
            "#,
        )
        .bind(&id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        map_row_to_post(row)
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        row.map(map_row_to_post).transpose()
    }

    async fn update_post_owned(
        &self,
        post_id: &str,
        owner_id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        // One filtered statement; a non-owner update matches zero rows.
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = $3,
                content = $4
            WHERE id = $1 AND author_id = $2
            RETURNING id, title, content, author_id
            "#,
        )
        .bind(post_id)
        .bind(owner_id)
        .bind(&patch.title)
        .bind(&patch.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        row.map(map_row_to_post).transpose()
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, author_id
            FROM posts
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }
}

fn map_row_to_post(row: PostRow) -> Result<Post, DomainError> {
    Post::new(row.id, row.title, row.content, row.author_id)
        .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23503")
    {
        return DomainError::NotFound("author".to_string());
    }
    DomainError::Unexpected(err.to_string())
}
