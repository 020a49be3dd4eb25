//! # Login form controller
//!
//! [`LoginForm`] is the local state behind the sign-in page: the two fields, the
//! "remember me" checkbox, and the error flag shown as a callout.
//!
//! Lifecycle:
//!
//! 1. [`LoginForm::restore`] on mount pre-fills a remembered email and ticks
//!    "remember me". The remembered password is never read back.
//! 2. [`LoginForm::begin_submit`] writes or clears the remembered credentials
//!    and hands out the [`Credentials`] to send.
//! 3. [`LoginForm::finish`] records the facade's answer. Any failure sets the
//!    error flag; there is no distinction between kinds of failure.
//!
//! [`submit_login`] runs steps 2 and 3 around [`Session::login`]; the sign-in
//! page hands it its signals directly.

use api::{Credentials, Session, TravelBackend};
use store::KeyValueStore;

use super::StateCell;

/// State of the sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    /// Set when the last login attempt failed.
    pub error: bool,
    pub submitting: bool,
}

impl LoginForm {
    /// Initial form state, pre-filled from the remember-me store.
    pub fn restore<S: KeyValueStore>(store: &S) -> Self {
        match store::remembered_email(store) {
            Some(email) => Self {
                email,
                remember_me: true,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// Store both fields verbatim when "remember me" is ticked, otherwise remove both.
    ///
    /// A storage failure is logged and does not stop the login.
    pub fn persist<S: KeyValueStore>(&self, store: &S) {
        let result = if self.remember_me {
            store::remember(store, &self.email, &self.password)
        } else {
            store::forget(store)
        };
        if let Err(e) = result {
            tracing::warn!("Failed to update remembered credentials: {e}");
        }
    }

    /// Persist the remember-me choice and return the credentials to submit.
    pub fn begin_submit<S: KeyValueStore>(&mut self, store: &S) -> Credentials {
        self.persist(store);
        self.submitting = true;
        self.credentials()
    }

    /// Record the login outcome.
    pub fn finish(&mut self, success: bool) {
        self.error = !success;
        self.submitting = false;
    }
}

/// Submit the form through the session facade. Returns whether login succeeded.
///
/// The session is only written back on success, so a failed attempt never
/// disturbs an existing token.
pub async fn submit_login<S, B>(
    mut form: impl StateCell<LoginForm>,
    store: &S,
    backend: &B,
    mut session: impl StateCell<Session>,
) -> bool
where
    S: KeyValueStore,
    B: TravelBackend,
{
    let credentials = form.update(|f| f.begin_submit(store));
    let mut current = session.update(|s| s.clone());
    let success = current.login(backend, &credentials).await;
    if success {
        session.update(|s| *s = current);
    }
    form.update(|f| f.finish(success));
    success
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::{Call, MockBackend};
    use store::remember::{REMEMBERED_EMAIL_KEY, REMEMBERED_PASSWORD_KEY};
    use store::MemoryStore;

    fn filled(remember_me: bool) -> LoginForm {
        let mut form = LoginForm::default();
        form.set_email("ada@example.com".to_string());
        form.set_password("hunter2".to_string());
        form.set_remember_me(remember_me);
        form
    }

    #[test]
    fn test_restore_prefills_remembered_email() {
        let store = MemoryStore::new();
        store.set(REMEMBERED_EMAIL_KEY, "ada@example.com").unwrap();
        store.set(REMEMBERED_PASSWORD_KEY, "hunter2").unwrap();

        let form = LoginForm::restore(&store);
        assert_eq!(form.email, "ada@example.com");
        assert!(form.remember_me);
        // The password is never restored into the form
        assert_eq!(form.password, "");
        assert!(!form.error);
    }

    #[test]
    fn test_restore_without_remembered_email() {
        let store = MemoryStore::new();
        assert_eq!(LoginForm::restore(&store), LoginForm::default());

        store.set(REMEMBERED_EMAIL_KEY, "").unwrap();
        let form = LoginForm::restore(&store);
        assert!(!form.remember_me);
        assert_eq!(form.email, "");
    }

    #[tokio::test]
    async fn test_remember_me_persists_both_fields() {
        let store = MemoryStore::new();
        let backend = MockBackend::new().with_token("tok");
        let mut session = Session::new();
        let mut form = filled(true);

        assert!(submit_login(&mut form, &store, &backend, &mut session).await);
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY).as_deref(), Some("ada@example.com"));
        assert_eq!(store.get(REMEMBERED_PASSWORD_KEY).as_deref(), Some("hunter2"));
    }

    #[tokio::test]
    async fn test_unchecked_remember_me_removes_both_keys() {
        let store = MemoryStore::new();
        store.set(REMEMBERED_EMAIL_KEY, "old@example.com").unwrap();
        store.set(REMEMBERED_PASSWORD_KEY, "old").unwrap();
        let backend = MockBackend::new().with_token("tok");
        let mut session = Session::new();
        let mut form = filled(false);

        submit_login(&mut form, &store, &backend, &mut session).await;
        assert!(store.get(REMEMBERED_EMAIL_KEY).is_none());
        assert!(store.get(REMEMBERED_PASSWORD_KEY).is_none());
    }

    #[tokio::test]
    async fn test_failed_login_sets_error_flag() {
        let store = MemoryStore::new();
        let backend = MockBackend::new();
        let mut session = Session::new();
        let mut form = filled(false);

        assert!(!submit_login(&mut form, &store, &backend, &mut session).await);
        assert!(form.error);
        assert!(!form.submitting);
        assert!(!session.is_authenticated());

        // Remember-me is applied even when the login fails
        let mut form = filled(true);
        submit_login(&mut form, &store, &backend, &mut session).await;
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY).as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_token() {
        let store = MemoryStore::new();
        let backend = MockBackend::new();
        let mut session = Session::with_token("old");
        let mut form = filled(false);

        assert!(!submit_login(&mut form, &store, &backend, &mut session).await);
        assert_eq!(session.token(), Some("old"));
        assert!(form.error);
    }

    #[tokio::test]
    async fn test_successful_login_clears_error_flag() {
        let store = MemoryStore::new();
        let backend = MockBackend::new().with_token("tok");
        let mut session = Session::new();
        let mut form = filled(false);
        form.error = true;

        assert!(submit_login(&mut form, &store, &backend, &mut session).await);
        assert!(!form.error);
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(backend.calls(), vec![Call::Login("ada@example.com".to_string())]);
    }
}
