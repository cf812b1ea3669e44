//! Browser side effects the orchestration layer triggers: transient notices,
//! redirects and the cart badge.

use gloo_timers::callback::Timeout;
use tracing::debug;
use uuid::Uuid;
use yew_router::history::{BrowserHistory, History};
use yew_router::Routable;
use yewdux::Dispatch;

use crate::models::app_state::AppState;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
            Self::Warning => "alert alert-warning",
            Self::Info => "alert alert-info",
        }
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        }
    }
}

pub trait Shell {
    /// Show a transient notice.
    fn notify(&self, level: NoticeLevel, message: &str);
    /// Navigate to `route`.
    fn redirect(&self, route: Route);
    /// The number of distinct items in the cart changed.
    fn cart_changed(&self, items: u32);
}

/// Shell backed by the yewdux store and the browser history.
#[derive(Clone)]
pub struct BrowserShell {
    dispatch: Dispatch<AppState>,
    notice_timeout_ms: u32,
}

impl BrowserShell {
    pub fn new(dispatch: Dispatch<AppState>, notice_timeout_ms: u32) -> Self {
        Self {
            dispatch,
            notice_timeout_ms,
        }
    }
}

impl Shell for BrowserShell {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let notice = Notice::new(level, message);
        let id = notice.id;
        self.dispatch.reduce_mut(|state| state.notices.push(notice));

        let dispatch = self.dispatch.clone();
        Timeout::new(self.notice_timeout_ms, move || {
            dispatch.reduce_mut(|state| state.dismiss_notice(id));
        })
        .forget();
    }

    fn redirect(&self, route: Route) {
        debug!(path = %route.to_path(), "redirect");
        BrowserHistory::new().push(route.to_path());
    }

    fn cart_changed(&self, items: u32) {
        self.dispatch.reduce_mut(|state| state.cart_items = items);
    }
}
