//! Session
//!
//! The signed-in user's email, cached in key-value storage.

use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct Session<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn current_email(&self) -> Option<String> {
        match self.storage.get(&self.key) {
            Ok(email) => email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
            Err(e) => {
                log::warn!("session read failed: {}", e);
                None
            }
        }
    }

    /// Remember `email`; returns the stored value, or `None` if blank
    pub fn sign_in(&self, email: &str) -> Option<String> {
        let email = email.trim();
        if email.is_empty() {
            return None;
        }
        if let Err(e) = self.storage.set(&self.key, email) {
            log::warn!("session write failed: {}", e);
        }
        Some(email.to_string())
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("session clear failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::new(MemoryStorage::new(), "currentUserEmail");
        assert_eq!(session.current_email(), None);

        assert_eq!(session.sign_in("  a@b.com "), Some("a@b.com".to_string()));
        assert_eq!(session.current_email().as_deref(), Some("a@b.com"));

        session.sign_out();
        assert_eq!(session.current_email(), None);
    }

    #[test]
    fn test_blank_sign_in_rejected() {
        let session = Session::new(MemoryStorage::new(), "currentUserEmail");
        assert_eq!(session.sign_in("   "), None);
        assert_eq!(session.current_email(), None);
    }
}
