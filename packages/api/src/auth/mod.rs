//! Login and registration payloads.
//!
//! The backend issues the session token; the client only posts credentials
//! and stores what comes back.

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(ApiError::validation("Username and password are required"));
        }
        Ok(())
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Client-side checks; password strength is left to the backend.
    pub fn validate(&self, confirm_password: &str) -> Result<(), ApiError> {
        let email = self.email.trim();
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("Username is required"));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::validation("Please enter a valid email"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation("Password is required"));
        }
        if self.password != confirm_password {
            return Err(ApiError::validation("Passwords do not match"));
        }
        Ok(())
    }
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "Token")]
    pub token: String,
}
