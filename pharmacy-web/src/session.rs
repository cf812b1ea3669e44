//! Session store: the bearer token, the validated user and the auth phase.
//!
//! The store is the only shared mutable state of the client. It is cheap to
//! clone (all clones see the same session) and every mutation is published to
//! an optional observer so the view state can follow along.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use shared::models::User;
use tracing::{debug, info, warn};
use yew::Callback;

use crate::storage::TokenStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Read-only copy of the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub phase: AuthPhase,
}

impl Session {
    /// A token is held and the user behind it is known.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Session>>,
    storage: Rc<dyn TokenStorage>,
    observer: Rc<RefCell<Option<Callback<Session>>>>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.inner.borrow();
        f.debug_struct("SessionStore")
            .field("has_token", &session.token.is_some())
            .field("user", &session.user.as_ref().map(|u| u.username.as_str()))
            .field("phase", &session.phase)
            .finish()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    pub fn new(storage: Rc<dyn TokenStorage>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Session::default())),
            storage,
            observer: Rc::new(RefCell::new(None)),
        }
    }

    /// Attach the callback that receives a snapshot after every mutation.
    #[must_use]
    pub fn with_observer(self, observer: Callback<Session>) -> Self {
        *self.observer.borrow_mut() = Some(observer);
        self
    }

    /// Load the persisted token, if any, into memory.
    ///
    /// Returns the token so the caller can validate it. An empty stored value
    /// counts as absent and is removed.
    pub fn restore(&self) -> Option<String> {
        let token = match self.storage.load() {
            Some(token) if !token.is_empty() => token,
            Some(_) => {
                self.storage.remove();
                return None;
            }
            None => return None,
        };
        debug!("restored persisted session token");
        self.mutate(|session| {
            session.token = Some(token.clone());
            session.user = None;
            session.phase = AuthPhase::Authenticating;
        });
        Some(token)
    }

    /// Store a freshly issued token together with its user.
    pub fn set(&self, token: String, user: User) {
        if token.is_empty() {
            warn!("refusing to store an empty session token");
            self.clear();
            return;
        }
        self.storage.store(&token);
        info!(username = %user.username, "session established");
        self.mutate(|session| {
            session.token = Some(token);
            session.user = Some(user);
            session.phase = AuthPhase::Authenticated;
        });
    }

    /// Replace the user of the current session. Ignored without a token.
    pub fn set_user(&self, user: User) {
        if self.inner.borrow().token.is_none() {
            warn!(username = %user.username, "ignoring user without a session token");
            return;
        }
        self.mutate(|session| {
            session.user = Some(user);
            session.phase = AuthPhase::Authenticated;
        });
    }

    /// Forget the token and the user, in memory and in storage.
    pub fn clear(&self) {
        self.storage.remove();
        let was_empty = {
            let session = self.inner.borrow();
            session.token.is_none() && session.user.is_none() && session.phase == AuthPhase::Anonymous
        };
        if was_empty {
            return;
        }
        info!("session cleared");
        self.mutate(|session| *session = Session::default());
    }

    /// Mark a login or registration round trip as in flight.
    pub fn begin_authentication(&self) {
        self.mutate(|session| {
            if session.token.is_none() {
                session.phase = AuthPhase::Authenticating;
            }
        });
    }

    /// Undo [`begin_authentication`](Self::begin_authentication) after a failed attempt.
    pub fn abort_authentication(&self) {
        self.mutate(|session| {
            if session.token.is_none() {
                session.phase = AuthPhase::Anonymous;
            }
        });
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.borrow().clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.inner.borrow().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().is_authenticated()
    }

    fn mutate(&self, change: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.inner.borrow_mut();
            change(&mut session);
            session.clone()
        };
        // Borrow released before the observer runs; it may read the store.
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer.emit(snapshot);
        }
    }
}
