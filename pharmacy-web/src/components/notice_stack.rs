use yew::prelude::*;
use yewdux::prelude::{use_selector, use_store};

use crate::models::app_state::AppState;

/// Transient notices, newest last. Each one also dismisses itself on a timer.
#[function_component(NoticeStack)]
pub fn notice_stack() -> Html {
    let notices = use_selector(|state: &AppState| state.notices.clone());
    let (_, dispatch) = use_store::<AppState>();

    html! {
        <div class="toast toast-top toast-end z-50">
            { for notices.iter().map(|notice| {
                let id = notice.id;
                let onclick = dispatch.reduce_mut_callback(move |state| state.dismiss_notice(id));
                html! {
                    <div key={id.to_string()} class={notice.level.css_class()} role="alert">
                        <span>{ &notice.message }</span>
                        <button class="btn btn-ghost btn-xs" aria-label="Dismiss" {onclick}>
                            <i class="fa-solid fa-xmark"></i>
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
