use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::data::user_store::{NewUser, UserCredentials, UserStore};
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    full_name: String,
    email: String,
}

#[derive(sqlx::FromRow)]
struct UserCredentialsRow {
    id: String,
    full_name: String,
    email: String,
    password_hash: String,
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let id = Uuid::new_v4().to_string();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, full_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, email
            "#,
        )
        .bind(&id)
        .bind(&input.full_name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        User::new(row.id, row.full_name, row.email)
            .map_err(|err| DomainError::Unexpected(err.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let row = sqlx::query_as::<_, UserCredentialsRow>(
            r#"
            SELECT id, full_name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        if let Some(r) = row {
            let user = User::new(r.id, r.full_name, r.email)
                .map_err(|err| DomainError::Unexpected(err.to_string()))?;

            Ok(Some(UserCredentials {
                user,
                password_hash: r.password_hash,
            }))
        } else {
            Ok(None)
        }
    }
}

fn map_user_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some("23505")
    {
        return DomainError::AlreadyExists("email".to_string());
    }
    DomainError::Unexpected(err.to_string())
}
