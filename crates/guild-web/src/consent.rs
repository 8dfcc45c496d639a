//! Consent persistence
//!
//! The banner only needs a string key-value store. In HTTP handlers that is
//! the request's cookie jar; tests use a plain map.

use std::collections::HashMap;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// Key of the stored consent flag
pub const CONSENT_KEY: &str = "cookie-consent";

/// Value written when the visitor accepts
pub const CONSENT_ACCEPTED: &str = "accepted";

/// Minimal string store behind the consent banner
pub trait ConsentStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl ConsentStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Cookies set here are permanent; the flag carries no expiry semantics.
impl ConsentStore for CookieJar {
    fn get(&self, key: &str) -> Option<String> {
        CookieJar::get(self, key).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        *self = self.clone().add(persistent_cookie(key, value));
    }
}

/// Site-wide cookie with a far-future expiry
pub fn persistent_cookie(name: &str, value: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), value.to_string()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_store() {
        let mut store: HashMap<String, String> = HashMap::new();
        assert!(ConsentStore::get(&store, CONSENT_KEY).is_none());
        store.set(CONSENT_KEY, CONSENT_ACCEPTED);
        assert_eq!(ConsentStore::get(&store, CONSENT_KEY).as_deref(), Some("accepted"));
    }

    #[test]
    fn test_cookie_store_is_permanent() {
        let mut jar = CookieJar::new();
        jar.set(CONSENT_KEY, CONSENT_ACCEPTED);

        let cookie = jar.get(CONSENT_KEY).unwrap();
        assert_eq!(cookie.value(), "accepted");
        assert_eq!(cookie.path(), Some("/"));
        assert!(cookie.max_age().is_some());
    }
}
