use shared::models::User;
use uuid::Uuid;
use yewdux::Store;

use crate::session::{AuthPhase, Session};
use crate::shell::Notice;

/// View-side mirror of the session plus transient UI state.
///
/// The token itself never lands here; views only need to know who is signed in.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<User>,
    pub phase: AuthPhase,
    pub notices: Vec<Notice>,
    pub cart_items: u32,
}

impl AppState {
    /// Follow a session snapshot published by the session store.
    pub fn apply_session(&mut self, session: &Session) {
        self.user = session.user.clone();
        self.phase = session.phase;
        if session.token.is_none() {
            self.cart_items = 0;
        }
    }

    pub fn dismiss_notice(&mut self, id: Uuid) {
        self.notices.retain(|notice| notice.id != id);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}
