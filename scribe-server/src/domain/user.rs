use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        let full_name = normalize_full_name(&self.full_name)?;
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(DomainError::Validation {
                field: "password",
                message: "must not be empty",
            });
        }
        Ok(Self {
            full_name,
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

impl SigninRequest {
    pub fn validate(self) -> Result<Self, DomainError> {
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(DomainError::Validation {
                field: "password",
                message: "must not be empty",
            });
        }
        Ok(Self {
            email,
            password: self.password,
        })
    }
}

/// Identifiers are opaque strings assigned by the store; nothing here
/// assumes any particular shape beyond non-emptiness.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation {
                field: "id",
                message: "must not be empty",
            });
        }
        let full_name = normalize_full_name(&full_name.into())?;
        let email = normalize_email(&email.into())?;

        Ok(Self {
            id,
            full_name,
            email,
        })
    }
}

fn normalize_full_name(full_name: &str) -> Result<String, DomainError> {
    let full_name = full_name.trim();
    if full_name.is_empty() || full_name.len() > 255 {
        return Err(DomainError::Validation {
            field: "fullName",
            message: "must be 1..255 chars",
        });
    }
    Ok(full_name.to_string())
}

fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    if !email.validate_email() {
        return Err(DomainError::Validation {
            field: "email",
            message: "must be a valid email",
        });
    }
    Ok(email)
}
