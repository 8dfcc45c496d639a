use askama::Template;
use chrono::{Datelike, Utc};

#[derive(Debug, Clone, Template)]
#[template(path = "components/footer.html")]
pub struct Footer {
    pub guild_name: String,
    pub year: i32,
    pub rights: String,
    pub disclaimer: String,
}

impl Footer {
    pub fn new(guild_name: impl Into<String>, rights: String, disclaimer: String) -> Self {
        Self {
            guild_name: guild_name.into(),
            year: Utc::now().year(),
            rights,
            disclaimer,
        }
    }
}
