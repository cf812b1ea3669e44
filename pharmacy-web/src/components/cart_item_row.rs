use shared::models::{Cart, CartItem, format_price};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_client;
use crate::services::cart;

#[derive(Properties, PartialEq)]
pub struct CartItemRowProps {
    pub item: CartItem,
    /// Receives the reloaded cart after a change.
    pub on_change: Callback<Cart>,
}

#[function_component(CartItemRow)]
pub fn cart_item_row(props: &CartItemRowProps) -> Html {
    let client = use_client();
    let item = &props.item;

    let set_quantity = {
        let client = client.clone();
        let on_change = props.on_change.clone();
        let item_id = item.id;
        Callback::from(move |quantity: i64| {
            let client = client.clone();
            let on_change = on_change.clone();
            spawn_local(async move {
                if let Ok(cart) = cart::update_quantity(&client, item_id, quantity).await {
                    on_change.emit(cart);
                }
            });
        })
    };

    let on_remove = {
        let on_change = props.on_change.clone();
        let item_id = item.id;
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let on_change = on_change.clone();
            spawn_local(async move {
                if let Ok(cart) = cart::remove_item(&client, item_id).await {
                    on_change.emit(cart);
                }
            });
        })
    };

    let quantity = item.quantity;
    let decrement = set_quantity.reform(move |_: MouseEvent| quantity - 1);
    let increment = set_quantity.reform(move |_: MouseEvent| quantity + 1);

    html! {
        <tr>
            <td>
                <div class="font-semibold">{ &item.medicine.name }</div>
                if item.medicine.prescription_required {
                    <div class="text-xs text-base-content/70">
                        if item.prescription_id.is_some() {
                            {"Prescription attached"}
                        } else {
                            {"Prescription required"}
                        }
                    </div>
                }
            </td>
            <td>{ format_price(item.medicine.price) }</td>
            <td>
                <div class="join">
                    <button class="btn btn-sm join-item" onclick={decrement}>{"-"}</button>
                    <span class="btn btn-sm join-item no-animation">{ quantity }</span>
                    <button class="btn btn-sm join-item" onclick={increment}>{"+"}</button>
                </div>
            </td>
            <td>{ format_price(item.line_total()) }</td>
            <td>
                <button class="btn btn-ghost btn-sm text-error" aria-label="Remove" onclick={on_remove}>
                    <i class="fa-solid fa-trash"></i>
                </button>
            </td>
        </tr>
    }
}
