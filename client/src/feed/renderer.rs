//! Feed renderer
//!
//! Renders feed items and profiles to markdown for tool consumers.

use crate::app::{Access, ProfileView, UNKNOWN_AUTHOR};
use crate::domain::entities::lang::KNOWN_LANGUAGES;
use crate::domain::entities::{parse_timestamp, FeedItem, Lang, User};

const PREVIEW_CHARS: usize = 280;

/// Render the home feed
pub fn render_feed(items: &[FeedItem], lang: &Lang) -> String {
    let mut buf = String::new();

    buf.push_str("# Latest Updates\n\n");
    buf.push_str(&format!(
        "Explore stories translated to your preferred language ({}).\n\n",
        lang.display_name()
    ));

    if items.is_empty() {
        buf.push_str("## No stories yet\n\n");
        buf.push_str("_Be the first to share your thoughts!_\n");
        return buf;
    }

    for item in items {
        buf.push_str(&render_post_card(item));
        buf.push('\n');
    }

    buf
}

/// Render one post the way the feed card shows it
pub fn render_post_card(item: &FeedItem) -> String {
    let author = if item.author_name.trim().is_empty() {
        UNKNOWN_AUTHOR
    } else {
        item.author_name.as_str()
    };

    let mut buf = format!(
        "[{}] **{}** · {} · `{}`\n",
        avatar_initial(author),
        author,
        format_date(item.created_at.as_deref()),
        item.category
    );
    buf.push_str(&format!("### {}\n", item.title));
    if !item.content.is_empty() {
        buf.push_str(&format!("{}\n", truncate(&item.content, PREVIEW_CHARS)));
    }
    buf.push_str(&format!("_post {} · id {}_\n", item.post_id, item.id));
    buf
}

/// Render a profile page
pub fn render_profile(view: &ProfileView) -> String {
    let (owner, posts) = match view {
        ProfileView::NotFound => return "### User not found\n".to_string(),
        ProfileView::Loaded { owner, posts } => (owner, posts),
    };

    let mut buf = String::new();
    buf.push_str(&render_profile_header(owner));

    let count = posts.len();
    buf.push_str(&format!(
        "## Published Posts ({} {})\n\n",
        count,
        if count == 1 { "Post" } else { "Posts" }
    ));

    if posts.is_empty() {
        buf.push_str("No posts yet.\n\n");
        buf.push_str("_When this user writes something, it will appear here._\n");
        return buf;
    }

    for post in posts {
        buf.push_str(&render_post_card(post));
        buf.push('\n');
    }

    buf
}

fn render_profile_header(owner: &User) -> String {
    let name = owner.name.as_deref().unwrap_or_default();
    let mut buf = format!(
        "# [{}] {}\n@{}\n\n",
        owner
            .name
            .as_deref()
            .map(avatar_initial)
            .unwrap_or('U'),
        name,
        owner.username
    );

    buf.push_str("## About\n\n");
    match owner.bio.as_deref() {
        Some(bio) if !bio.trim().is_empty() => buf.push_str(&format!("{}\n\n", bio)),
        _ => buf.push_str("This user hasn't written a bio yet.\n\n"),
    }

    if let Some(email) = &owner.email {
        buf.push_str("## Contact\n\n");
        buf.push_str(&format!("{}\n\n", email));
    }

    buf
}

/// Message for a gated view that cannot render yet
pub fn render_login_prompt(access: &Access) -> String {
    match access {
        Access::Loading => "Checking your session, try again in a moment.".to_string(),
        Access::RedirectToLogin => "Please log in first (use the `login` tool).".to_string(),
        Access::Granted(user) => format!("Logged in as @{}", user.username),
    }
}

/// List the languages a feed can be read in, marking the current one
pub fn render_languages(current: &Lang) -> String {
    let mut buf = String::from("## Languages\n\n");
    for (code, name) in KNOWN_LANGUAGES {
        let marker = if code == current.code() { " (current)" } else { "" };
        buf.push_str(&format!("- `{}` {}{}\n", code, name, marker));
    }
    buf
}

/// Format a post date as `Jan 5, 2024`
///
/// Missing dates read "Just now"; dates that do not parse are shown as given.
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => "Just now".to_string(),
        Some(raw) if raw.trim().is_empty() => "Just now".to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|ts| ts.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

fn avatar_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('U')
}

/// Truncate on a char boundary with ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ContentId, FeedKey, PostId, UserId};
    use crate::test_utils::test_user;

    fn item(title: &str, author: &str, created_at: Option<&str>) -> FeedItem {
        FeedItem {
            id: FeedKey::Content(ContentId(100)),
            post_id: PostId(1),
            title: title.to_string(),
            content: "Body".to_string(),
            category: "General".to_string(),
            status: None,
            created_at: created_at.map(str::to_string),
            author_name: author.to_string(),
            author_id: Some(UserId(9)),
        }
    }

    #[test]
    fn format_date_variants() {
        assert_eq!(format_date(None), "Just now");
        assert_eq!(format_date(Some("")), "Just now");
        assert_eq!(format_date(Some("2024-01-05")), "Jan 5, 2024");
        assert_eq!(format_date(Some("2023-11-20T10:00:00Z")), "Nov 20, 2023");
        assert_eq!(format_date(Some("soon")), "soon");
    }

    #[test]
    fn post_card_contents() {
        let card = render_post_card(&item("Hello", "ann", Some("2024-01-05")));

        assert!(card.starts_with("[A] **ann** · Jan 5, 2024 · `General`"));
        assert!(card.contains("### Hello"));
        assert!(card.contains("Body"));
        assert!(card.contains("_post 1 · id 100_"));
    }

    #[test]
    fn post_card_blank_author() {
        let card = render_post_card(&item("Hello", "", None));

        assert!(card.starts_with("[U] **Unknown Author** · Just now"));
    }

    #[test]
    fn feed_empty_state() {
        let out = render_feed(&[], &"hi".parse().unwrap());

        assert!(out.contains("(Hindi)"));
        assert!(out.contains("No stories yet"));
    }

    #[test]
    fn feed_lists_items_in_order() {
        let out = render_feed(
            &[item("First", "ann", None), item("Second", "bob", None)],
            &Lang::default(),
        );

        let first = out.find("### First").unwrap();
        let second = out.find("### Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn profile_not_found() {
        assert_eq!(render_profile(&ProfileView::NotFound), "### User not found\n");
    }

    #[test]
    fn profile_without_posts_or_bio() {
        let mut owner = test_user(3, "bob");
        owner.name = Some("Bob".to_string());
        let out = render_profile(&ProfileView::Loaded {
            owner,
            posts: vec![],
        });

        assert!(out.starts_with("# [B] Bob\n@bob"));
        assert!(out.contains("This user hasn't written a bio yet."));
        assert!(out.contains("bob@example.com"));
        assert!(out.contains("(0 Posts)"));
        assert!(out.contains("No posts yet."));
    }

    #[test]
    fn profile_single_post_count() {
        let out = render_profile(&ProfileView::Loaded {
            owner: test_user(3, "bob"),
            posts: vec![item("Only", "bob", None)],
        });

        assert!(out.contains("(1 Post)"));
        assert!(out.contains("### Only"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("नमस्ते दुनिया", 5), "नम...");
    }

    #[test]
    fn languages_mark_current() {
        let out = render_languages(&"es".parse().unwrap());

        assert!(out.contains("- `es` Spanish (current)"));
        assert!(out.contains("- `en` English\n"));
    }

    #[test]
    fn login_prompt() {
        assert!(render_login_prompt(&Access::RedirectToLogin).contains("log in"));
        assert_eq!(
            render_login_prompt(&Access::Granted(test_user(1, "ann"))),
            "Logged in as @ann"
        );
    }
}
