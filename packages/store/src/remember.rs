//! Remember-me persistence for the login form.
//!
//! The email and password are stored verbatim under fixed keys. Only the email
//! is ever read back; the stored password is plaintext.

use crate::kv::{KeyValueStore, StoreError};

pub const REMEMBERED_EMAIL_KEY: &str = "rememberedEmail";
pub const REMEMBERED_PASSWORD_KEY: &str = "rememberedPassword";

/// Store both fields verbatim.
pub fn remember<S: KeyValueStore>(store: &S, email: &str, password: &str) -> Result<(), StoreError> {
    store.set(REMEMBERED_EMAIL_KEY, email)?;
    store.set(REMEMBERED_PASSWORD_KEY, password)
}

/// Remove both keys, whether or not they were set.
pub fn forget<S: KeyValueStore>(store: &S) -> Result<(), StoreError> {
    // Attempt both removals even if the first fails.
    let email = store.remove(REMEMBERED_EMAIL_KEY);
    let password = store.remove(REMEMBERED_PASSWORD_KEY);
    email.and(password)
}

/// The remembered email, if one is stored and non-empty.
pub fn remembered_email<S: KeyValueStore>(store: &S) -> Option<String> {
    store
        .get(REMEMBERED_EMAIL_KEY)
        .filter(|email| !email.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_remember_writes_both_keys_verbatim() {
        let store = MemoryStore::new();
        remember(&store, " ada@example.com ", "p@ss word").unwrap();

        assert_eq!(
            store.get(REMEMBERED_EMAIL_KEY).as_deref(),
            Some(" ada@example.com ")
        );
        assert_eq!(
            store.get(REMEMBERED_PASSWORD_KEY).as_deref(),
            Some("p@ss word")
        );
    }

    #[test]
    fn test_forget_removes_both_keys() {
        let store = MemoryStore::new();
        remember(&store, "ada@example.com", "secret").unwrap();

        forget(&store).unwrap();
        assert!(store.get(REMEMBERED_EMAIL_KEY).is_none());
        assert!(store.get(REMEMBERED_PASSWORD_KEY).is_none());

        // Forgetting with nothing stored is fine
        forget(&store).unwrap();
    }

    #[test]
    fn test_forget_removes_password_without_email() {
        let store = MemoryStore::new();
        store.set(REMEMBERED_PASSWORD_KEY, "orphan").unwrap();

        forget(&store).unwrap();
        assert!(store.get(REMEMBERED_PASSWORD_KEY).is_none());
    }

    #[test]
    fn test_remembered_email_ignores_empty() {
        let store = MemoryStore::new();
        assert!(remembered_email(&store).is_none());

        store.set(REMEMBERED_EMAIL_KEY, "").unwrap();
        assert!(remembered_email(&store).is_none());

        store.set(REMEMBERED_EMAIL_KEY, "ada@example.com").unwrap();
        assert_eq!(remembered_email(&store).as_deref(), Some("ada@example.com"));
    }
}
