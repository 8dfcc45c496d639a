use askama::Template;

/// Image used when no emblem URL is known
pub const FALLBACK_LOGO: &str = "/images/guild-logo.png";

#[derive(Debug, Clone, Template)]
#[template(path = "components/guild_logo.html")]
pub struct GuildLogo {
    pub src: String,
    pub alt: String,
}

impl GuildLogo {
    pub fn new(emblem_url: Option<&str>, alt: impl Into<String>) -> Self {
        let src = emblem_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(FALLBACK_LOGO);
        Self {
            src: src.to_string(),
            alt: alt.into(),
        }
    }
}
