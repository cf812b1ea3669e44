use yew::prelude::*;
use yew_router::prelude::{Link, use_route};
use yewdux::prelude::use_selector;

use crate::components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown};
use crate::models::app_state::AppState;
use crate::routes::Route;

/// Path of the admin console, served outside this application.
const ADMIN_PATH: &str = "/admin";

const ANONYMOUS_LINKS: [Route; 4] = [Route::Home, Route::Medicines, Route::Login, Route::Register];
const AUTHENTICATED_LINKS: [Route; 5] = [
    Route::Home,
    Route::Medicines,
    Route::Prescriptions,
    Route::Orders,
    Route::Dashboard,
];

/// Navigation entries for the current session.
pub fn nav_links(authenticated: bool) -> &'static [Route] {
    if authenticated {
        &AUTHENTICATED_LINKS
    } else {
        &ANONYMOUS_LINKS
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let current_route = use_route::<Route>();
    let authenticated = *use_selector(AppState::is_authenticated);
    let is_admin = *use_selector(AppState::is_admin);
    let cart_items = *use_selector(|state: &AppState| state.cart_items);

    let render_routes = || -> Html {
        html! {
            <>
                { for nav_links(authenticated).iter().map(|route| html! {
                    <HeaderNavItem route={*route} {current_route} />
                }) }
                if is_admin {
                    <li>
                        <a href={ADMIN_PATH} class="btn btn-ghost gap-2">
                            <i class="fa-solid fa-fw fa-screwdriver-wrench"></i>
                            {"Admin"}
                        </a>
                    </li>
                }
            </>
        }
    };

    let cart_link = if authenticated {
        html! {
            <Link<Route> to={Route::Cart} classes="btn btn-ghost btn-circle">
                <div class="indicator">
                    <i class="fa-solid fa-cart-shopping text-lg"></i>
                    if cart_items > 0 {
                        <span class="badge badge-sm badge-primary indicator-item">{ cart_items }</span>
                    }
                </div>
            </Link<Route>>
        }
    } else {
        html! {}
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={Route::Home} classes="btn btn-ghost text-lg">
                <i class="fa-solid fa-prescription-bottle-medical text-primary"></i>
                {"Pharmacy"}
            </Link<Route>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { render_routes() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_routes() }
            </ul>
            <div class="flex items-center gap-2">
                { cart_link }
                if authenticated {
                    <UserDropdown />
                }
            </div>
        </nav>
    }
}
