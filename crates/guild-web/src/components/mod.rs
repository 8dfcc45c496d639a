//! Page components
//!
//! Each component is an Askama template over plain fields; pages render
//! them to strings and embed the markup.

mod code;
mod cookie_consent;
mod footer;
mod guild_logo;
mod guild_stats;
mod test_auth_button;

pub use code::Code;
pub use cookie_consent::CookieConsent;
pub use footer::Footer;
pub use guild_logo::{GuildLogo, FALLBACK_LOGO};
pub use guild_stats::{progress_label, GuildStats, ProgressSummary};
pub use test_auth_button::{AuthTarget, TestAuthButton};

use askama::Template;
use tracing::warn;

/// Render a component, logging and degrading to an inline error on failure
pub fn render_component<T: Template>(component: &T) -> String {
    component.render().unwrap_or_else(|e| {
        warn!(error = %e, "Component render failed");
        format!("<pre>Template error: {e}</pre>")
    })
}
