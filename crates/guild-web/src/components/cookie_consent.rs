use askama::Template;

use crate::consent::{ConsentStore, CONSENT_ACCEPTED, CONSENT_KEY};

/// Consent banner, shown until the visitor accepts
#[derive(Debug, Clone, Template)]
#[template(path = "components/cookie_consent.html")]
pub struct CookieConsent {
    visible: bool,
    pub message: String,
    pub accept_label: String,
}

impl CookieConsent {
    /// Visible only while the consent key is absent
    pub fn mount(store: &impl ConsentStore) -> Self {
        Self {
            visible: store.get(CONSENT_KEY).is_none(),
            message: String::new(),
            accept_label: String::new(),
        }
    }

    /// Persist acceptance and hide the banner
    pub fn accept(&mut self, store: &mut impl ConsentStore) {
        store.set(CONSENT_KEY, CONSENT_ACCEPTED);
        self.visible = false;
    }

    pub fn with_labels(mut self, message: String, accept_label: String) -> Self {
        self.message = message;
        self.accept_label = accept_label;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
