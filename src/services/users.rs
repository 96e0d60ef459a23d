//! In-memory user directory.
//!
//! Responsibility:
//! - Credential store behind `/users/authenticate`, seeded at startup.
//! - Read-only after startup, so concurrent requests need no locking.
//!
//! Passwords are kept as SHA-256 digests; the plaintext is dropped at seed
//! time and never stored or logged.

use std::fmt;

use sha2::{Digest, Sha256};

#[derive(Clone)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    password_sha256: [u8; 32],
}

impl UserRecord {
    fn new(id: i64, first_name: &str, last_name: &str, username: &str, password: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
            password_sha256: digest(password),
        }
    }

    fn password_matches(&self, candidate: &str) -> bool {
        digest(candidate) == self.password_sha256
    }
}

pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print credential digests
        f.debug_struct("UserDirectory")
            .field("users", &self.users.len())
            .finish()
    }
}

impl UserDirectory {
    /// Demo data. A real deployment would back this with a database.
    pub fn seeded() -> Self {
        Self {
            users: vec![UserRecord::new(1, "Test", "User", "test", "test")],
        }
    }

    /// Credential check. `None` for unknown username or wrong password;
    /// the caller cannot tell which.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&UserRecord> {
        let user = self.users.iter().find(|u| u.username == username)?;
        user.password_matches(password).then_some(user)
    }

    pub fn all(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn get(&self, id: i64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }
}

fn digest(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}
