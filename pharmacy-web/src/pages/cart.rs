use shared::models::{Cart, format_price};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::use_client;
use crate::components::cart_item_row::CartItemRow;
use crate::components::checkout_modal::CheckoutModal;
use crate::routes::Route;
use crate::services::cart;

#[derive(Properties, PartialEq)]
pub struct CartPageProps {
    pub cart: Cart,
}

#[function_component(CartPage)]
pub fn cart_page(props: &CartPageProps) -> Html {
    let client = use_client();
    let current = {
        let initial = props.cart.clone();
        use_state(move || initial)
    };
    let checkout_open = use_state(|| false);
    let validating = use_state(|| false);

    let on_change = {
        let current = current.clone();
        Callback::from(move |cart: Cart| current.set(cart))
    };

    let on_checkout = {
        let checkout_open = checkout_open.clone();
        let validating = validating.clone();
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let checkout_open = checkout_open.clone();
            let validating = validating.clone();
            validating.set(true);
            spawn_local(async move {
                let validation = cart::validate_for_checkout(&client).await;
                validating.set(false);
                if validation.is_ok_and(|report| report.can_proceed_to_checkout) {
                    checkout_open.set(true);
                }
            });
        })
    };
    let on_close = {
        let checkout_open = checkout_open.clone();
        Callback::from(move |()| checkout_open.set(false))
    };

    if current.is_empty() {
        return html! {
            <div class="hero py-12">
                <div class="hero-content text-center flex-col">
                    <i class="fa-solid fa-cart-shopping text-5xl text-base-content/40"></i>
                    <h1 class="text-2xl font-bold">{"Your cart is empty"}</h1>
                    <Link<Route> to={Route::Medicines} classes="btn btn-primary">{"Browse Medicines"}</Link<Route>>
                </div>
            </div>
        };
    }

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Shopping Cart"}</h1>
            if current.prescription_required_items > 0 {
                <div class="alert alert-info">
                    <span>
                        { format!("{} item(s) in your cart require a prescription.", current.prescription_required_items) }
                    </span>
                </div>
            }
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Medicine"}</th>
                            <th>{"Price"}</th>
                            <th>{"Quantity"}</th>
                            <th>{"Total"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for current.items.iter().map(|item| html! {
                            <CartItemRow key={item.id} item={item.clone()} on_change={on_change.clone()} />
                        }) }
                    </tbody>
                </table>
            </div>
            <div class="flex justify-end items-center gap-4">
                <span class="text-xl font-bold">{ format!("Total: {}", format_price(current.total_amount)) }</span>
                <button class="btn btn-primary" disabled={*validating} onclick={on_checkout}>
                    {"Proceed to Checkout"}
                </button>
            </div>
            if *checkout_open {
                <CheckoutModal total={current.total_amount} {on_close} />
            }
        </div>
    }
}
