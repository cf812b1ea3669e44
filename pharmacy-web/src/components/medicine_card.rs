use shared::models::{Medicine, Prescription, format_price};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_client;
use crate::components::form_field::selected_value;
use crate::services::cart;

#[derive(Properties, PartialEq)]
pub struct MedicineCardProps {
    pub medicine: Medicine,
    /// The signed-in user's prescriptions; offered when the medicine needs one.
    #[prop_or_default]
    pub prescriptions: Vec<Prescription>,
}

#[function_component(MedicineCard)]
pub fn medicine_card(props: &MedicineCardProps) -> Html {
    let client = use_client();
    let selected = use_state(|| None::<i64>);
    let busy = use_state(|| false);
    let medicine = &props.medicine;

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            let value = selected_value(&event).and_then(|value| value.parse().ok());
            selected.set(value);
        })
    };

    let on_add = {
        let medicine = medicine.clone();
        let selected = selected.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let medicine = medicine.clone();
            let prescription_id = *selected;
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                // Outcome is already on screen as a notice.
                let _ = cart::add_to_cart(&client, &medicine, prescription_id).await;
                busy.set(false);
            });
        })
    };

    let stock = if !medicine.in_stock() {
        html! { <span class="badge badge-error">{"Out of stock"}</span> }
    } else if medicine.is_low_stock() {
        html! { <span class="badge badge-warning">{ format!("Only {} left", medicine.stock_quantity) }</span> }
    } else {
        html! { <span class="badge badge-success">{"In stock"}</span> }
    };

    let picker = if medicine.prescription_required {
        let options: Vec<&Prescription> = props
            .prescriptions
            .iter()
            .filter(|prescription| prescription.is_selectable())
            .collect();
        html! {
            <select class="select select-bordered select-sm w-full" onchange={on_select}>
                <option value="" selected={selected.is_none()}>{"Select prescription"}</option>
                { for options.into_iter().map(|prescription| html! {
                    <option
                        value={prescription.id.to_string()}
                        selected={*selected == Some(prescription.id)}
                    >
                        { prescription.label() }
                    </option>
                }) }
            </select>
        }
    } else {
        html! {}
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    { &medicine.name }
                    if medicine.prescription_required {
                        <span class="badge badge-secondary">{"Rx"}</span>
                    }
                </h2>
                if let Some(generic) = &medicine.generic_name {
                    <p class="text-sm text-base-content/70">{ generic }</p>
                }
                if let Some(description) = &medicine.description {
                    <p>{ description }</p>
                }
                <div class="flex flex-wrap gap-2 text-sm">
                    if let Some(strength) = &medicine.strength {
                        <span class="badge badge-outline">{ strength }</span>
                    }
                    if let Some(form) = &medicine.form {
                        <span class="badge badge-outline">{ form }</span>
                    }
                    { stock }
                </div>
                <div class="text-xl font-bold text-primary">{ format_price(medicine.price) }</div>
                { picker }
                <div class="card-actions justify-end">
                    <button
                        class="btn btn-primary btn-sm"
                        disabled={!medicine.in_stock() || *busy}
                        onclick={on_add}
                    >
                        <i class="fa-solid fa-cart-plus"></i>
                        {"Add to Cart"}
                    </button>
                </div>
            </div>
        </div>
    }
}
