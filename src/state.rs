/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: auth: AuthService, users: UserDirectory
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{auth::AuthService, users::UserDirectory};

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, users: Arc<UserDirectory>) -> Self {
        Self { auth, users }
    }
}
