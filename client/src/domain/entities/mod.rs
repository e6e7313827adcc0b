//! Domain entities
//!
//! Records exchanged with the blog API plus the transient feed view model.
//! Nothing here is persisted locally.

pub mod feed_item;
pub mod lang;
pub mod post;
pub mod user;

pub use feed_item::{parse_timestamp, FeedItem, FeedKey};
pub use lang::Lang;
pub use post::{Category, ContentId, NewPost, PostContent, PostId, PostMetadata};
pub use user::{NewUser, User, UserId};
