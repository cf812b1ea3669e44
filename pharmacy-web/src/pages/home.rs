use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::app::use_client;
use crate::components::emergency_modal::EmergencyModal;
use crate::models::app_state::AppState;
use crate::routes::Route;
use crate::services::delivery;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let client = use_client();
    let authenticated = *use_selector(AppState::is_authenticated);
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

    html! {
        <div class="space-y-8">
            <div class="hero bg-base-200 rounded-box py-12">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-4xl font-bold">{"Your pharmacy, delivered"}</h1>
                        <p class="py-6">
                            {"Search medicines, upload prescriptions and get orders delivered to your door."}
                        </p>
                        <div class="flex flex-wrap justify-center gap-2">
                            <Link<Route> to={Route::Medicines} classes="btn btn-primary">
                                <i class="fa-solid fa-pills"></i>
                                {"Browse Medicines"}
                            </Link<Route>>
                            <button class="btn btn-error" onclick={on_emergency}>
                                <i class="fa-solid fa-truck-medical"></i>
                                {"Emergency Delivery"}
                            </button>
                            if !authenticated {
                                <Link<Route> to={Route::Register} classes="btn btn-outline">
                                    {"Create Account"}
                                </Link<Route>>
                            }
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title"><i class="fa-solid fa-magnifying-glass"></i>{"Find medicines"}</h2>
                        <p>{"Search by name and filter by category, price or prescription requirement."}</p>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title"><i class="fa-solid fa-file-prescription"></i>{"Upload prescriptions"}</h2>
                        <p>{"Attach a verified prescription to order prescription-only medicines."}</p>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title"><i class="fa-solid fa-truck-fast"></i>{"Track deliveries"}</h2>
                        <p>{"Follow every order from confirmation to your door."}</p>
                    </div>
                </div>
            </div>

            if *emergency_open {
                <EmergencyModal {on_close} />
            }
        </div>
    }
}
