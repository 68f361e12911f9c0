use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::auth::{AuthResponseDto, SigninDto, SignupDto};
use crate::presentation::handlers::posts::{
    CreatePostDto, GetPostResponseDto, ListPostsResponseDto, PostDto, PostIdResponseDto,
    UpdatePostDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::auth::signup,
        crate::presentation::handlers::auth::signin,
        crate::presentation::handlers::posts::create_post,
        crate::presentation::handlers::posts::update_post,
        crate::presentation::handlers::posts::get_post,
        crate::presentation::handlers::posts::list_posts
    ),
    components(
        schemas(
            SignupDto,
            SigninDto,
            AuthResponseDto,
            CreatePostDto,
            UpdatePostDto,
            PostDto,
            PostIdResponseDto,
            GetPostResponseDto,
            ListPostsResponseDto
        )
    ),
    tags(
        (name = "user", description = "Signup and signin"),
        (name = "post", description = "Post endpoints (bearer protected)")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}
