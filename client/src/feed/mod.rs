//! Feed module
//!
//! Plain-text (markdown) rendering of feeds and profiles.

pub mod renderer;

pub use renderer::{
    format_date, render_feed, render_languages, render_login_prompt, render_post_card,
    render_profile,
};
