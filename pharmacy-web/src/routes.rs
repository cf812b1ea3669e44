use strum::{EnumIter, IntoEnumIterator};
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::PharmacyClient;
use crate::components::loading::{Loading, page_message};
use crate::initializer::{PageData, PageLoad, dispatch};
use crate::pages::*;
use crate::session::Session;

/// The storefront routes. Paths match exactly; there is no fallback route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/medicines")]
    Medicines,
    #[at("/cart")]
    Cart,
    #[at("/orders")]
    Orders,
    #[at("/prescriptions")]
    Prescriptions,
    #[at("/profile")]
    Profile,
    #[at("/dashboard")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
}

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Public,
    Authenticated,
}

/// Outcome of checking a route's guard against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Granted,
    RedirectToLogin,
}

impl Route {
    pub const fn guard(self) -> Guard {
        match self {
            Self::Home | Self::Medicines | Self::Login | Self::Register => Guard::Public,
            Self::Cart | Self::Orders | Self::Prescriptions | Self::Profile | Self::Dashboard => {
                Guard::Authenticated
            }
        }
    }

    /// Look up the route registered for exactly `path`.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::iter().find(|route| route.to_path() == path)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Medicines => "Medicines",
            Self::Cart => "Cart",
            Self::Orders => "Orders",
            Self::Prescriptions => "Prescriptions",
            Self::Profile => "Profile",
            Self::Dashboard => "Dashboard",
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

/// Check `route`'s guard against `session`.
pub fn admit(route: Route, session: &Session) -> Admission {
    match route.guard() {
        Guard::Public => Admission::Granted,
        Guard::Authenticated if session.is_authenticated() => Admission::Granted,
        Guard::Authenticated => Admission::RedirectToLogin,
    }
}

/// Renders the page for the current location.
#[function_component(RouteOutlet)]
pub fn route_outlet() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    html! { <RoutedPage key={path.clone()} path={path.clone()} /> }
}

#[derive(Debug, Clone, PartialEq)]
enum PageState {
    Loading,
    Unrouted,
    Loaded(PageLoad),
}

#[derive(Properties, PartialEq)]
struct RoutedPageProps {
    path: String,
}

#[function_component(RoutedPage)]
fn routed_page(props: &RoutedPageProps) -> Html {
    let client = use_context::<PharmacyClient>();
    let state = use_state(|| PageState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.path.clone(), move |path| {
            if let Some(client) = client {
                let path = path.clone();
                spawn_local(async move {
                    let next = match dispatch(&path, &client).await {
                        Some(load) => PageState::Loaded(load),
                        None => PageState::Unrouted,
                    };
                    state.set(next);
                });
            } else {
                debug!("no client in context; page not initialized");
            }
            || ()
        });
    }

    match &*state {
        PageState::Loading => html! { <Loading message={page_message(&props.path)} /> },
        PageState::Unrouted | PageState::Loaded(PageLoad::Redirected(_) | PageLoad::Abandoned) => {
            html! {}
        }
        PageState::Loaded(PageLoad::Ready(data)) => render_page(data.clone()),
    }
}

fn render_page(data: PageData) -> Html {
    match data {
        PageData::Home => html! { <HomePage /> },
        PageData::Login => html! { <LoginPage /> },
        PageData::Register => html! { <RegisterPage /> },
        PageData::Dashboard => html! { <DashboardPage /> },
        PageData::Medicines {
            categories,
            medicines,
        } => html! { <MedicinesPage {categories} {medicines} /> },
        PageData::Cart(cart) => html! { <CartPage {cart} /> },
        PageData::Orders(orders) => html! { <OrdersPage {orders} /> },
        PageData::Prescriptions(prescriptions) => {
            html! { <PrescriptionsPage {prescriptions} /> }
        }
        PageData::Profile(user) => html! { <ProfilePage {user} /> },
    }
}
