/*
 * Responsibility
 * - /users/authenticate の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use serde::{Deserialize, Serialize};

// No Debug: the request carries a plaintext password.
#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub username: String,
    pub password: String,
}

impl AuthenticateRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }

        Ok(())
    }
}

/// Successful login: the user's public profile plus a fresh access token.
#[derive(Debug, Serialize)]
pub struct AuthenticateResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub token: String,
    /// Seconds until expiry.
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_fail_validation() {
        let req = AuthenticateRequest {
            username: "  ".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_err());

        let req = AuthenticateRequest {
            username: "test".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());

        let req = AuthenticateRequest {
            username: "test".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
