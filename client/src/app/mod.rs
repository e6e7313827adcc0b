//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the session gate.

pub mod account_service;
pub mod feed_loader;
pub mod feed_service;
pub mod merge;
pub mod post_service;
pub mod session;

pub use account_service::AccountService;
pub use feed_loader::{FeedLoader, LoadState, ProfileLoader};
pub use feed_service::{FeedService, ProfileView};
pub use merge::{
    merge_global, merge_profile, sort_newest_first, AuthorDirectory, DEFAULT_CATEGORY,
    UNKNOWN_AUTHOR, UNKNOWN_USER, UNTITLED,
};
pub use post_service::PostService;
pub use session::{Access, SessionGate, SessionState};
