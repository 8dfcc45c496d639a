use askama::Template;
use guild_common::Environment;

/// Fixed authentication endpoints. Nothing is ever interpolated into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTarget {
    ApiLogin,
    BattleNetDirect,
}

impl AuthTarget {
    pub const fn href(&self) -> &'static str {
        match self {
            Self::ApiLogin => "/api/auth/login",
            Self::BattleNetDirect => "/auth-bnet-direct.php",
        }
    }
}

/// Development-only link for exercising the login flows
#[derive(Debug, Clone, Template)]
#[template(path = "components/test_auth_button.html")]
pub struct TestAuthButton {
    href: &'static str,
    pub label: String,
}

impl TestAuthButton {
    /// `None` outside development
    pub fn for_environment(env: Environment, target: AuthTarget, label: impl Into<String>) -> Option<Self> {
        env.is_development().then(|| Self {
            href: target.href(),
            label: label.into(),
        })
    }

    pub fn href(&self) -> &'static str {
        self.href
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_in_development() {
        assert!(TestAuthButton::for_environment(Environment::Production, AuthTarget::ApiLogin, "Test").is_none());
        assert!(TestAuthButton::for_environment(Environment::Staging, AuthTarget::ApiLogin, "Test").is_none());

        let button = TestAuthButton::for_environment(Environment::Development, AuthTarget::BattleNetDirect, "Test").unwrap();
        assert_eq!(button.href(), "/auth-bnet-direct.php");
        assert!(button.render().unwrap().contains(r#"href="/auth-bnet-direct.php""#));
    }
}
