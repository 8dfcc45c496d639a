//! Translations
//!
//! English and Norwegian bundles are compiled in and flattened to dotted
//! keys (`guild.members`). Built once at startup and shared through
//! [`WebState`](crate::WebState).

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// Cookie holding the chosen language
pub const LANGUAGE_COOKIE: &str = "i18nextLng";

const EN_BUNDLE: &str = include_str!("../locales/en.json");
const NO_BUNDLE: &str = include_str!("../locales/no.json");

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    No,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Self::En, Self::No];

    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::No => "no",
        }
    }

    /// Match a language tag; Bokmål and Nynorsk both map to Norwegian
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "no" | "nb" | "nn" => Some(Self::No),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Bundle parse failure
#[derive(Debug, thiserror::Error)]
#[error("invalid {lang} translation bundle: {source}")]
pub struct BundleError {
    lang: Lang,
    #[source]
    source: serde_json::Error,
}

/// Loaded translation bundles
#[derive(Debug, Clone)]
pub struct I18n {
    bundles: HashMap<Lang, HashMap<String, String>>,
}

impl I18n {
    /// Load the bundled resources
    pub fn new() -> Result<Self, BundleError> {
        let mut bundles = HashMap::new();
        for (lang, raw) in [(Lang::En, EN_BUNDLE), (Lang::No, NO_BUNDLE)] {
            let value: Value =
                serde_json::from_str(raw).map_err(|source| BundleError { lang, source })?;
            let mut flat = HashMap::new();
            flatten("", &value, &mut flat);
            bundles.insert(lang, flat);
        }
        Ok(Self { bundles })
    }

    /// Translate `key`; falls back to English, then to the key itself
    pub fn t(&self, lang: Lang, key: &str) -> String {
        [lang, Lang::En]
            .iter()
            .find_map(|l| self.bundles.get(l).and_then(|b| b.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Language for a request: stored cookie, then `Accept-Language`, then English
    pub fn detect(cookie: Option<&str>, accept_language: Option<&str>) -> Lang {
        if let Some(lang) = cookie.and_then(Lang::from_tag) {
            return lang;
        }

        accept_language
            .and_then(|header| {
                preferred_tags(header)
                    .into_iter()
                    .find_map(|tag| Lang::from_tag(&tag))
            })
            .unwrap_or_default()
    }

    /// Bind a language for rendering
    pub fn translator(&self, lang: Lang) -> Translator<'_> {
        Translator { i18n: self, lang }
    }
}

/// Bundles plus the request's language
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    i18n: &'a I18n,
    lang: Lang,
}

impl Translator<'_> {
    pub fn t(&self, key: &str) -> String {
        self.i18n.t(self.lang, key)
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

/// Language tags of an `Accept-Language` header, highest quality first
fn preferred_tags(header: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((tag.to_string(), quality))
        })
        .filter(|(_, q)| *q > 0.0)
        .collect();

    // stable: equal weights keep header order
    tags.sort_by(|a, b| b.1.total_cmp(&a.1));
    tags.into_iter().map(|(tag, _)| tag).collect()
}
