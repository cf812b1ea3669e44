use shared::models::{PaymentMethod, User, format_price};
use rust_decimal::Decimal;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_client;
use crate::components::form_field::{TextAreaField, TextField, checked_value, selected_value};
use crate::components::modal::Modal;
use crate::containers::form_validation::CheckoutForm;
use crate::services::orders;

const PAYMENT_METHODS: [PaymentMethod; 2] = [PaymentMethod::CashOnDelivery, PaymentMethod::Card];

fn initial_form(user: Option<&User>) -> CheckoutForm {
    CheckoutForm {
        delivery_address: user
            .and_then(|user| user.address.clone())
            .unwrap_or_default(),
        delivery_phone: user.map(|user| user.phone.clone()).unwrap_or_default(),
        ..CheckoutForm::default()
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckoutModalProps {
    pub total: Decimal,
    pub on_close: Callback<()>,
}

#[function_component(CheckoutModal)]
pub fn checkout_modal(props: &CheckoutModalProps) -> Html {
    let client = use_client();
    let form = {
        let user = client.session().user();
        use_state(move || initial_form(user.as_ref()))
    };
    let submitting = use_state(|| false);

    let update = |apply: fn(&mut CheckoutForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_address = update(|form, value| form.delivery_address = value);
    let on_phone = update(|form, value| form.delivery_phone = value);
    let on_notes = update(|form, value| form.delivery_notes = value);

    let on_payment = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(method) = selected_value(&event).as_deref().and_then(PaymentMethod::from_value) {
                let mut next = (*form).clone();
                next.payment_method = method;
                form.set(next);
            }
        })
    };

    let on_emergency = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(checked) = checked_value(&event) {
                let mut next = (*form).clone();
                next.is_emergency = checked;
                form.set(next);
            }
        })
    };

    let place = {
        let form = form.clone();
        let submitting = submitting.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let client = client.clone();
            let request = (*form).clone();
            let submitting = submitting.clone();
            let on_close = on_close.clone();
            submitting.set(true);
            spawn_local(async move {
                let placed = orders::place_order(&client, &request).await.is_ok();
                submitting.set(false);
                if placed {
                    on_close.emit(());
                }
            });
        })
    };

    let actions = html! {
        <button class="btn btn-primary" disabled={*submitting} onclick={place}>
            { if *submitting { "Placing order..." } else { "Place Order" } }
        </button>
    };

    html! {
        <Modal title="Checkout" on_close={props.on_close.clone()} {actions}>
            <div class="space-y-2">
                <TextAreaField
                    id="delivery-address"
                    label="Delivery address"
                    value={form.delivery_address.clone()}
                    oninput={on_address}
                    required=true
                />
                <TextField
                    id="delivery-phone"
                    label="Delivery phone"
                    input_type="tel"
                    value={form.delivery_phone.clone()}
                    oninput={on_phone}
                    required=true
                />
                <div class="form-control">
                    <label class="label" for="payment-method">
                        <span class="label-text">{"Payment method"}</span>
                    </label>
                    <select id="payment-method" class="select select-bordered" onchange={on_payment}>
                        { for PAYMENT_METHODS.iter().map(|method| html! {
                            <option value={method.as_str()} selected={form.payment_method == *method}>
                                { method.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <label class="label cursor-pointer justify-start gap-2">
                    <input
                        type="checkbox"
                        class="checkbox checkbox-error"
                        checked={form.is_emergency}
                        onchange={on_emergency}
                    />
                    <span class="label-text">{"Emergency delivery"}</span>
                </label>
                <TextAreaField
                    id="delivery-notes"
                    label="Delivery notes"
                    value={form.delivery_notes.clone()}
                    oninput={on_notes}
                />
                <div class="text-right text-lg font-bold">
                    { format!("Total: {}", format_price(props.total)) }
                </div>
            </div>
        </Modal>
    }
}
