//! Explicit session state for the API client.
//!
//! The session is a value constructed at login and dropped at logout; there
//! is no ambient token storage for the client to reach into.

/// Connection parameters for one authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    token: Option<String>,
}

impl Session {
    /// An anonymous session against `base_url` (login/signup only).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// An authenticated session carrying a bearer token.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token.into()),
        }
    }

    /// Attach a bearer token after login.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the bearer token on logout.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifecycle() {
        let mut session = Session::new("https://api.example.org");
        assert!(!session.is_authenticated());

        session.set_token("jwt-abc");
        assert_eq!(session.token(), Some("jwt-abc"));

        session.clear_token();
        assert!(session.token().is_none());
    }
}
