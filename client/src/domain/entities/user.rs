//! User domain entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(UserId)
            .map_err(|_| format!("Invalid user id: {}", s))
    }
}

/// A registered user as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(default)]
    pub username: String,
    /// Display name; optional on the backend
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Name shown next to posts: the display name, or the username when blank
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Role assigned to self-registered accounts
pub const DEFAULT_ROLE: &str = "USER";

/// Registration form payload for `POST /user/create`
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub role: String,
}

impl NewUser {
    pub fn new(name: &str, username: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            bio: String::new(),
            role: DEFAULT_ROLE.to_string(),
        }
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = bio.to_string();
        self
    }

    /// Names of required fields that were left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
