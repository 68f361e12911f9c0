use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            content: normalize_content(&self.content)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl UpdatePostRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        validate_id("id", &self.id)?;
        Ok(Self {
            id: self.id,
            title: normalize_title(&self.title)?,
            content: normalize_content(&self.content)?,
        })
    }
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let author_id = author_id.into();
        validate_id("id", &id)?;
        validate_id("authorId", &author_id)?;
        let title = normalize_title(&title.into())?;
        let content = normalize_content(&content.into())?;

        Ok(Self {
            id,
            title,
            content,
            author_id,
        })
    }
}

fn validate_id(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation {
            field,
            message: "must not be empty",
        });
    }
    Ok(())
}

fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() || title.len() > 255 {
        return Err(DomainError::Validation {
            field: "title",
            message: "must be 1..255 chars",
        });
    }
    Ok(title.to_string())
}

fn normalize_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation {
            field: "content",
            message: "must not be empty",
        });
    }
    Ok(content.to_string())
}
