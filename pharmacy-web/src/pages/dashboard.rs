use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::use_client;
use crate::components::emergency_modal::EmergencyModal;
use crate::models::app_state::AppState;
use crate::routes::Route;
use crate::services::delivery;

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let client = use_client();
    let user = use_selector(|state: &AppState| state.user.clone());
    let cart_items = *use_selector(|state: &AppState| state.cart_items);
    let emergency_open = use_state(|| false);

    let on_emergency = {
        let emergency_open = emergency_open.clone();
        Callback::from(move |_: MouseEvent| {
            if delivery::can_request_emergency(&client) {
                emergency_open.set(true);
            }
        })
    };
    let on_close = {
        let emergency_open = emergency_open.clone();
        Callback::from(move |()| emergency_open.set(false))
    };

    let greeting = (*user)
        .as_ref()
        .map_or_else(|| "Welcome".to_string(), |user| format!("Welcome, {}", user.full_name));

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ greeting }</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                // Medicines card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title"><Icon icon_id={IconId::HeroiconsOutlineBeaker} class="w-6 h-6" />{"Medicines"}</h2>
                        <p>{"Browse the catalog and add items to your cart."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Medicines} classes="btn btn-primary">{"Shop"}</Link<Route>>
                        </div>
                    </div>
                </div>

                // Cart card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title"><Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-6 h-6" />{"Cart"}</h2>
                        <p>{ format!("{cart_items} item(s) waiting for checkout.") }</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Cart} classes="btn btn-secondary">{"View Cart"}</Link<Route>>
                        </div>
                    </div>
                </div>

                // Prescriptions card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title"><Icon icon_id={IconId::HeroiconsOutlineDocumentText} class="w-6 h-6" />{"Prescriptions"}</h2>
                        <p>{"Upload and review your prescriptions."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Prescriptions} classes="btn btn-outline">{"Manage"}</Link<Route>>
                        </div>
                    </div>
                </div>

                // Orders card
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title"><Icon icon_id={IconId::HeroiconsOutlineArchiveBox} class="w-6 h-6" />{"Orders"}</h2>
                        <p>{"Track deliveries and review past orders."}</p>
                        <div class="card-actions justify-end">
                            <Link<Route> to={Route::Orders} classes="btn btn-outline">{"My Orders"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </div>

            <div class="alert alert-error">
                <Icon icon_id={IconId::HeroiconsOutlineTruck} class="w-6 h-6" />
                <span>{"Need medicines urgently? Request an emergency delivery."}</span>
                <button class="btn btn-sm" onclick={on_emergency}>{"Emergency Delivery"}</button>
            </div>

            if *emergency_open {
                <EmergencyModal {on_close} />
            }
        </div>
    }
}
