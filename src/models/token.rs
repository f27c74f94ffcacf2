//! Token request payload.

use serde::{Deserialize, Serialize};

pub const MIN_TOKEN_HOURS: u32 = 1;
pub const MAX_TOKEN_HOURS: u32 = 720;
pub const DEFAULT_TOKEN_HOURS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRole {
    #[default]
    User,
    Admin,
    #[serde(rename = "readonly")]
    ReadOnly,
}

impl TokenRole {
    pub fn label(self) -> &'static str {
        match self {
            TokenRole::User => "User",
            TokenRole::Admin => "Admin",
            TokenRole::ReadOnly => "Read Only",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenRole::User => "user",
            TokenRole::Admin => "admin",
            TokenRole::ReadOnly => "readonly",
        }
    }

    pub fn all() -> &'static [TokenRole] {
        &[TokenRole::User, TokenRole::Admin, TokenRole::ReadOnly]
    }
}

/// Claims sent to the token endpoint. `exp` is a lifetime in hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub sub: String,
    pub name: String,
    pub role: TokenRole,
    pub exp: u32,
}

impl TokenPayload {
    pub fn set_exp_hours(&mut self, hours: u32) {
        self.exp = hours.clamp(MIN_TOKEN_HOURS, MAX_TOKEN_HOURS);
    }

    /// Parse a lifetime typed by the user; unparsable input becomes the minimum.
    pub fn set_exp_from_input(&mut self, input: &str) {
        let hours = input.trim().parse::<u32>().unwrap_or(MIN_TOKEN_HOURS);
        self.set_exp_hours(hours);
    }
}

impl Default for TokenPayload {
    fn default() -> Self {
        Self {
            sub: String::new(),
            name: String::new(),
            role: TokenRole::User,
            exp: DEFAULT_TOKEN_HOURS,
        }
    }
}
