//! Accounts that own registered leagues

use super::{models::User, queries::unix_now, schema::StatsDatabase};
use crate::core::password::{hash_password, verify_password};
use crate::error::{CompanionError, Result};
use rusqlite::{params, ErrorCode, OptionalExtension, Row};
use tracing::info;

const USER_COLUMNS: &str = "id, username, password_hash, created_at, updated_at";

impl StatsDatabase {
    /// Create an account; usernames are unique and the password is stored hashed
    pub fn create_user(&mut self, username: &str, password: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CompanionError::MissingField { field: "username" });
        }
        if password.is_empty() {
            return Err(CompanionError::MissingField { field: "password" });
        }

        let now = unix_now();
        let inserted = self.conn.execute(
            "INSERT INTO users (username, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?)",
            params![username, hash_password(password), now, now],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                return Err(CompanionError::UserExists {
                    username: username.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let id = self.conn.last_insert_rowid();
        info!(id, username, "created user");
        self.find_user(id)?
            .ok_or(CompanionError::InvalidCredentials)
    }

    pub fn find_user(&self, id: i64) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"),
                params![id],
                row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    pub fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?"),
                params![username.trim()],
                row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    /// The account for `username` if `password` matches, else `None`
    pub fn verify_user(&self, username: &str, password: &str) -> Result<Option<User>> {
        Ok(self
            .find_user_by_username(username)?
            .filter(|user| verify_password(&user.password_hash, password)))
    }

    /// Like [`verify_user`](Self::verify_user), but a mismatch is an error
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        self.verify_user(username, password)?
            .ok_or(CompanionError::InvalidCredentials)
    }
}

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        password_hash: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
