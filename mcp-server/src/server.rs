//! Lingopost MCP Server implementation
//!
//! Feed, profile and publish tools require a login; they answer with a login
//! prompt instead of calling the API when the session does not allow it.

use std::sync::Arc;

use lingopost_client::feed::{render_feed, render_languages, render_login_prompt, render_profile};
use lingopost_client::{BlogApp, Category, HttpBlogClient, NewPost, NewUser, UserId};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Lingopost MCP Server
///
/// Holds one blog session for the life of the process.
#[derive(Clone)]
pub struct LingopostServer {
    app: Arc<BlogApp<HttpBlogClient>>,
    tool_router: ToolRouter<Self>,
}

impl LingopostServer {
    pub fn new(app: BlogApp<HttpBlogClient>) -> Self {
        Self {
            app: Arc::new(app),
            tool_router: Self::tool_router(),
        }
    }
}

fn text(content: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(content.into())]))
}

fn error_text(content: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(content.into())]))
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LoginParams {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RegisterParams {
    /// Full name
    pub name: String,
    /// Unique username
    pub username: String,
    /// Unique email
    pub email: String,
    /// Password
    pub password: String,
    /// Short bio (optional)
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FeedParams {
    /// Two-letter language code: "en", "hi", "es" or "fr" (defaults to the configured language)
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProfileParams {
    /// Numeric user id
    pub user_id: i64,
    /// Two-letter language code (optional)
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PublishParams {
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Category: "Technology", "Life", "Coding" or "Travel" (defaults to Technology)
    #[serde(default)]
    pub category: Option<String>,
}

fn parse_category(value: Option<&str>) -> Result<Category, String> {
    match value {
        None => Ok(Category::default()),
        Some(raw) => raw.parse::<Category>().map_err(|e| {
            let options: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
            format!("{}. Choose one of: {}", e, options.join(", "))
        }),
    }
}

#[tool_router]
impl LingopostServer {
    // === Session ===

    #[tool(description = "Show who is logged in.")]
    async fn whoami(&self) -> Result<CallToolResult, McpError> {
        self.app.session.probe().await;
        text(render_login_prompt(&self.app.session.access()))
    }

    #[tool(description = "Log in with email and password. Required before reading feeds.")]
    async fn login(&self, params: Parameters<LoginParams>) -> Result<CallToolResult, McpError> {
        match self
            .app
            .session
            .login(&params.0.email, &params.0.password)
            .await
        {
            Ok(user) => text(format!("Welcome back, {}!", user.display_name())),
            Err(e) => error_text(e.user_message()),
        }
    }

    #[tool(description = "Log out. Always clears the local session.")]
    async fn logout(&self) -> Result<CallToolResult, McpError> {
        self.app.session.logout().await;
        text("Logged out.")
    }

    #[tool(description = "Create a new account. Log in afterwards to use it.")]
    async fn register(
        &self,
        params: Parameters<RegisterParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let new_user = NewUser::new(&p.name, &p.username, &p.email, &p.password)
            .with_bio(p.bio.as_deref().unwrap_or_default());
        match self.app.accounts.register(&new_user).await {
            Ok(()) => text("Registration successful! Please login."),
            Err(e) => error_text(e.user_message()),
        }
    }

    // === Reading ===

    #[tool(description = "Read the latest posts, translated into the requested language.")]
    async fn feed(&self, params: Parameters<FeedParams>) -> Result<CallToolResult, McpError> {
        let lang = self.app.config.lang_or_default(params.0.lang.as_deref());
        match self.app.fetch_feed(&lang).await {
            Ok(items) => text(render_feed(&items, &lang)),
            Err(access) => error_text(render_login_prompt(&access)),
        }
    }

    #[tool(description = "View a user's profile and every post they published.")]
    async fn profile(&self, params: Parameters<ProfileParams>) -> Result<CallToolResult, McpError> {
        let lang = self.app.config.lang_or_default(params.0.lang.as_deref());
        match self.app.fetch_profile(UserId(params.0.user_id), &lang).await {
            Ok(view) => text(render_profile(&view)),
            Err(access) => error_text(render_login_prompt(&access)),
        }
    }

    #[tool(description = "List the languages posts can be read in.")]
    async fn languages(&self, params: Parameters<FeedParams>) -> Result<CallToolResult, McpError> {
        let lang = self.app.config.lang_or_default(params.0.lang.as_deref());
        text(render_languages(&lang))
    }

    // === Writing ===

    #[tool(description = "Publish a new post as the logged-in user.")]
    async fn publish(&self, params: Parameters<PublishParams>) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let category = match parse_category(p.category.as_deref()) {
            Ok(category) => category,
            Err(msg) => return error_text(msg),
        };
        match self
            .app
            .posts
            .publish(&NewPost::new(&p.title, category, &p.content))
            .await
        {
            Ok(()) => text(format!("Published \"{}\" in {}.", p.title, category)),
            Err(e) => error_text(e.user_message()),
        }
    }
}

#[tool_handler]
impl ServerHandler for LingopostServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "lingopost".into(),
                title: Some("Lingopost MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Lingopost - multilingual blog

WORKFLOW:
1. 'whoami' - Check whether a session is active
2. 'login' - Log in with email and password ('register' first if needed)
3. 'feed' - Read the latest posts in a language (en, hi, es, fr)
4. 'profile' - Read one user's profile and posts
5. 'publish' - Write a post (Technology, Life, Coding or Travel)
6. 'logout' - End the session

NOTES:
- The home feed only shows posts translated into the requested language
- Profiles show every post, untranslated ones as "Untitled""#
                    .into(),
            ),
        }
    }
}
