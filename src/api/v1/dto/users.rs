/*
 * Responsibility
 * - Users の response DTO
 */
use serde::Serialize;

use crate::services::users::UserRecord;

/// Public view of a user. The credential digest never leaves the directory.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl UserResponse {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
        }
    }
}
