//! Login check for interactive sessions

use crate::config::Config;

/// Decides whether a username/password pair may open a session
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

/// Single credential pair taken from the configuration
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials() {
        let auth = StaticCredentials::from_config(&Config::default());
        assert!(auth.authenticate("admin", "1234"));
    }

    #[test]
    fn test_rejects_wrong_pairs() {
        let auth = StaticCredentials::new("admin", "1234");
        assert!(!auth.authenticate("admin", "12345"));
        assert!(!auth.authenticate("Admin", "1234"));
        assert!(!auth.authenticate("", ""));
    }
}
