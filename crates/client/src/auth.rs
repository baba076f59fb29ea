//! Session key storage for username/password authentication.

use secrecy::{ExposeSecret, SecretString};

/// Credentials plus the current session key, if logged in.
#[derive(Debug)]
pub struct SessionManager {
    username: String,
    password: SecretString,
    session_key: Option<SecretString>,
}

impl SessionManager {
    pub fn new(username: String, password: SecretString) -> Self {
        Self {
            username,
            password,
            session_key: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn session_key(&self) -> Option<&str> {
        self.session_key.as_ref().map(|key| key.expose_secret())
    }

    pub fn has_session(&self) -> bool {
        self.session_key.is_some()
    }

    pub fn set_session_key(&mut self, key: String) {
        self.session_key = Some(SecretString::new(key.into()));
    }

    pub fn clear_session(&mut self) {
        self.session_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        SessionManager::new("admin".to_string(), SecretString::new("hunter2".into()))
    }

    #[test]
    fn test_new_manager_has_no_session() {
        let m = manager();
        assert!(!m.has_session());
        assert!(m.session_key().is_none());
    }

    #[test]
    fn test_session_key_round_trips() {
        let mut m = manager();
        m.set_session_key("abc".to_string());
        assert_eq!(m.session_key(), Some("abc"));
    }

    #[test]
    fn test_clear_session() {
        let mut m = manager();
        m.set_session_key("abc".to_string());
        m.clear_session();
        assert!(!m.has_session());
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let mut m = manager();
        m.set_session_key("session-key-value".to_string());
        let debug = format!("{m:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("session-key-value"));
    }
}
