//! Post domain entities
//!
//! A post is split across two record sets on the backend: language-independent
//! metadata and one translated content row per language.

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Unique identifier for a post (metadata key)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a translated content row, distinct from the post id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub i64);

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language-independent post record from `/posts/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostMetadata {
    #[serde(rename = "postId")]
    pub post_id: PostId,
    #[serde(rename = "authorId", default)]
    pub author_id: Option<UserId>,
    /// The backend spells this field `catogery`
    #[serde(default, alias = "catogery")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Translated post body from `/post_contents/`, already filtered by language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostContent {
    #[serde(default)]
    pub id: Option<ContentId>,
    /// Foreign key into metadata, matched by value
    pub postid: PostId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Categories offered when publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Technology,
    Life,
    Coding,
    Travel,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Technology,
        Category::Life,
        Category::Coding,
        Category::Travel,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Technology => write!(f, "Technology"),
            Category::Life => write!(f, "Life"),
            Category::Coding => write!(f, "Coding"),
            Category::Travel => write!(f, "Travel"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technology" => Ok(Category::Technology),
            "life" => Ok(Category::Life),
            "coding" => Ok(Category::Coding),
            "travel" => Ok(Category::Travel),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Payload for `POST /posts/publish`
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub category: Category,
    pub content: String,
}

impl NewPost {
    pub fn new(title: &str, category: Category, content: &str) -> Self {
        Self {
            title: title.to_string(),
            category,
            content: content.to_string(),
        }
    }

    /// Names of required fields that were left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }
        missing
    }
}
