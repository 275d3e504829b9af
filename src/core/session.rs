use std::fs;
use std::path::Path;

use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::session::{self, KEY_AUTH_TOKEN, KEY_USER_DATA};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub struct SessionLogic;

impl SessionLogic {
    pub fn set_token(pool: &mut DbPool, token: &str) -> AppResult<()> {
        session::set(&pool.conn, KEY_AUTH_TOKEN, token)?;
        ttlog_soft(&pool.conn, "session", "set", "auth token stored");
        success("Auth token stored.");
        Ok(())
    }

    /// Cache the user blob; it must be valid JSON.
    pub fn set_user(pool: &mut DbPool, path: &Path) -> AppResult<()> {
        let raw = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        session::set(&pool.conn, KEY_USER_DATA, &value.to_string())?;
        ttlog_soft(&pool.conn, "session", "set", "user data stored");
        success("User data stored.");
        Ok(())
    }

    pub fn show(pool: &mut DbPool) -> AppResult<()> {
        match session::get(&pool.conn, KEY_AUTH_TOKEN)? {
            Some(token) => println!("Token : {}", mask(&token)),
            None => info("No auth token stored."),
        }
        match session::get(&pool.conn, KEY_USER_DATA)? {
            Some(user) => println!("User  : {user}"),
            None => info("No user data stored."),
        }
        Ok(())
    }

    /// Logout: drop token and user blob.
    pub fn clear(pool: &mut DbPool) -> AppResult<usize> {
        let n = session::clear(&pool.conn)?;
        ttlog_soft(&pool.conn, "session", "clear", &format!("{n} keys removed"));
        success("Session cleared.");
        Ok(n)
    }
}

/// Keep the first 4 chars, hide the rest.
fn mask(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    let hidden = token.chars().count().saturating_sub(4);
    format!("{visible}{}", "*".repeat(hidden))
}
