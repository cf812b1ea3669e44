use shared::models::{ProfileUpdate, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_client;
use crate::components::form_field::{TextAreaField, TextField};
use crate::containers::form_validation::ProfileForm;
use crate::services::auth;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub user: User,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let client = use_client();
    let form = {
        let seed = ProfileForm::from_update(&ProfileUpdate::from_user(&props.user));
        use_state(move || seed)
    };
    let saving = use_state(|| false);

    let update = |apply: fn(&mut ProfileForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let request = (*form).clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                let _ = auth::update_profile(&client, &request).await;
                saving.set(false);
            });
        })
    };

    let user = &props.user;

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Profile" }</h1>
            <div class="card bg-base-200">
                <div class="card-body">
                    <div class="font-semibold">{ &user.username }</div>
                    <div class="text-sm text-base-content/70">{ &user.email }</div>
                    if let Some(joined) = &user.created_at {
                        <div class="text-sm text-base-content/70">{"Member since "}{ joined.to_html() }</div>
                    }
                </div>
            </div>
            <form class="card bg-base-100 shadow" {onsubmit}>
                <div class="card-body">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-x-4">
                        <TextField id="full-name" label="Full name" required=true
                            value={form.full_name.clone()}
                            oninput={update(|form, value| form.full_name = value)} />
                        <TextField id="phone" label="Phone" input_type="tel" required=true
                            value={form.phone.clone()}
                            oninput={update(|form, value| form.phone = value)} />
                        <TextField id="age" label="Age" input_type="number"
                            value={form.age.clone()}
                            oninput={update(|form, value| form.age = value)} />
                        <TextField id="address" label="Address"
                            value={form.address.clone()}
                            oninput={update(|form, value| form.address = value)} />
                        <TextField id="city" label="City"
                            value={form.city.clone()}
                            oninput={update(|form, value| form.city = value)} />
                        <TextField id="state" label="State"
                            value={form.state.clone()}
                            oninput={update(|form, value| form.state = value)} />
                        <TextField id="zip-code" label="ZIP code"
                            value={form.zip_code.clone()}
                            oninput={update(|form, value| form.zip_code = value)} />
                    </div>
                    <TextAreaField id="medical-conditions" label="Medical conditions"
                        value={form.medical_conditions.clone()}
                        oninput={update(|form, value| form.medical_conditions = value)} />
                    <TextAreaField id="allergies" label="Allergies"
                        value={form.allergies.clone()}
                        oninput={update(|form, value| form.allergies = value)} />
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" type="submit" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save Changes" } }
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
