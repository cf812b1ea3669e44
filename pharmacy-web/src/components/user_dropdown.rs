use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::app::use_client;
use crate::models::app_state::AppState;
use crate::routes::Route;
use crate::services::auth;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let client = use_client();
    let user_state = use_selector(|state: &AppState| state.user.clone());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            auth::logout(&client);
        });
        html! {
            <li><a {onclick}>{"Logout"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ &user.full_name }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                <li><Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>></li>
                <li><Link<Route> to={Route::Orders}>{"My Orders"}</Link<Route>></li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
