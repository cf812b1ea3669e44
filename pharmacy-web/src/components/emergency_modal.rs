use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_client;
use crate::components::form_field::{TextAreaField, TextField};
use crate::components::modal::Modal;
use crate::containers::form_validation::EmergencyForm;
use crate::services::delivery;

#[derive(Properties, PartialEq)]
pub struct EmergencyModalProps {
    pub on_close: Callback<()>,
}

#[function_component(EmergencyModal)]
pub fn emergency_modal(props: &EmergencyModalProps) -> Html {
    let client = use_client();
    let form = {
        let user = client.session().user();
        use_state(move || EmergencyForm {
            delivery_address: user
                .as_ref()
                .and_then(|user| user.address.clone())
                .unwrap_or_default(),
            delivery_phone: user.map(|user| user.phone).unwrap_or_default(),
            ..EmergencyForm::default()
        })
    };
    let submitting = use_state(|| false);

    let update = |apply: fn(&mut EmergencyForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_medicines = update(|form, value| form.medicine_names = value);
    let on_notes = update(|form, value| form.urgent_notes = value);
    let on_address = update(|form, value| form.delivery_address = value);
    let on_phone = update(|form, value| form.delivery_phone = value);

    let submit = {
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
                let created = delivery::request_emergency(&client, &request).await.is_ok();
                submitting.set(false);
                if created {
                    on_close.emit(());
                }
            });
        })
    };

    let actions = html! {
        <button class="btn btn-error" disabled={*submitting} onclick={submit}>
            <i class="fa-solid fa-truck-medical"></i>
            { if *submitting { "Requesting..." } else { "Request Emergency Delivery" } }
        </button>
    };

    html! {
        <Modal title="Emergency Delivery" on_close={props.on_close.clone()} {actions}>
            <div class="alert alert-warning mb-2">
                <span>{"Emergency orders are dispatched to the nearest available delivery partner."}</span>
            </div>
            <TextAreaField
                id="emergency-medicines"
                label="Medicines (one per line)"
                value={form.medicine_names.clone()}
                oninput={on_medicines}
                rows={4}
                required=true
            />
            <TextAreaField
                id="emergency-notes"
                label="Urgent notes"
                value={form.urgent_notes.clone()}
                oninput={on_notes}
                required=true
            />
            <TextAreaField
                id="emergency-address"
                label="Delivery address"
                value={form.delivery_address.clone()}
                oninput={on_address}
                required=true
            />
            <TextField
                id="emergency-phone"
                label="Emergency contact"
                input_type="tel"
                value={form.delivery_phone.clone()}
                oninput={on_phone}
                required=true
            />
        </Modal>
    }
}
