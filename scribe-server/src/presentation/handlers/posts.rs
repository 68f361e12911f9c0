use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::extract::ValidatedJson;
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct UpdatePostDto {
    #[validate(length(min = 1))]
    pub(crate) id: String,
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostDto {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostIdResponseDto {
    pub(crate) id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct GetPostResponseDto {
    pub(crate) post: Option<PostDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ListPostsResponseDto {
    pub(crate) posts: Vec<PostDto>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
        }
    }
}

fn map_post_error(err: DomainError) -> AppError {
    match err {
        DomainError::Validation { .. } => AppError::InvalidBody,
        _ => AppError::StoreRejected,
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/post",
    tag = "post",
    security(("bearer_auth" = [])),
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "Post created", body = PostIdResponseDto),
        (status = 401, description = "Unauthorized"),
        (status = 411, description = "Invalid request body"),
        (status = 400, description = "Store error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> AppResult<(StatusCode, Json<PostIdResponseDto>)> {
    let req = CreatePostRequest {
        title: dto.title,
        content: dto.content,
    };

    let post = state
        .post_service
        .create_post(&auth.user_id, req)
        .await
        .map_err(map_post_error)?;

    Ok((StatusCode::OK, Json(PostIdResponseDto { id: post.id })))
}

#[utoipa::path(
    put,
    path = "/api/v1/post",
    tag = "post",
    security(("bearer_auth" = [])),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostIdResponseDto),
        (status = 401, description = "Unauthorized"),
        (status = 411, description = "Invalid request body"),
        (status = 400, description = "Store error or no owned row matched")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    ValidatedJson(dto): ValidatedJson<UpdatePostDto>,
) -> AppResult<(StatusCode, Json<PostIdResponseDto>)> {
    let req = UpdatePostRequest {
        id: dto.id,
        title: dto.title,
        content: dto.content,
    };

    let post = state
        .post_service
        .update_post(&auth.user_id, req)
        .await
        .map_err(map_post_error)?;

    Ok((StatusCode::OK, Json(PostIdResponseDto { id: post.id })))
}

#[utoipa::path(
    get,
    path = "/api/v1/post/get/{id}",
    tag = "post",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post (null when absent)", body = GetPostResponseDto),
        (status = 401, description = "Unauthorized"),
        (status = 411, description = "Invalid request id"),
        (status = 400, description = "Store error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<GetPostResponseDto>)> {
    if id.trim().is_empty() {
        return Err(AppError::InvalidId);
    }

    let post = state
        .post_service
        .get_post(&id)
        .await
        .map_err(map_post_error)?;

    Ok((
        StatusCode::OK,
        Json(GetPostResponseDto {
            post: post.map(PostDto::from),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/post/all",
    tag = "post",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All posts", body = ListPostsResponseDto),
        (status = 401, description = "Unauthorized"),
        (status = 400, description = "Store error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> AppResult<(StatusCode, Json<ListPostsResponseDto>)> {
    let posts = state
        .post_service
        .list_posts()
        .await
        .map_err(map_post_error)?;

    Ok((
        StatusCode::OK,
        Json(ListPostsResponseDto {
            posts: posts.into_iter().map(PostDto::from).collect(),
        }),
    ))
}
