use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::use_client;
use crate::components::form_field::{TextAreaField, TextField};
use crate::containers::form_validation::RegistrationForm;
use crate::routes::Route;
use crate::services::auth;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let client = use_client();
    let form = use_state(RegistrationForm::default);
    let loading = use_state(|| false);

    let update = |apply: fn(&mut RegistrationForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let form = (*form).clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                let _ = auth::register(&client, &form).await;
                loading.set(false);
            });
        })
    };

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-2xl shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Create your account"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-x-4">
                        <TextField id="username" label="Username" required=true
                            value={form.username.clone()}
                            oninput={update(|form, value| form.username = value)} />
                        <TextField id="email" label="Email" input_type="email" required=true
                            value={form.email.clone()}
                            oninput={update(|form, value| form.email = value)} />
                        <TextField id="full-name" label="Full name" required=true
                            value={form.full_name.clone()}
                            oninput={update(|form, value| form.full_name = value)} />
                        <TextField id="phone" label="Phone" input_type="tel" required=true
                            value={form.phone.clone()}
                            oninput={update(|form, value| form.phone = value)} />
                        <TextField id="password" label="Password" input_type="password" required=true
                            value={form.password.clone()}
                            oninput={update(|form, value| form.password = value)} />
                        <TextField id="confirm-password" label="Confirm password" input_type="password" required=true
                            value={form.confirm_password.clone()}
                            oninput={update(|form, value| form.confirm_password = value)} />
                        <TextField id="age" label="Age" input_type="number"
                            value={form.age.clone()}
                            oninput={update(|form, value| form.age = value)} />
                    </div>
                    <TextAreaField id="medical-conditions" label="Medical conditions"
                        value={form.medical_conditions.clone()}
                        oninput={update(|form, value| form.medical_conditions = value)} />
                    <TextAreaField id="allergies" label="Allergies"
                        value={form.allergies.clone()}
                        oninput={update(|form, value| form.allergies = value)} />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            {if *loading { "Creating account..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"Already registered? "}
                        <Link<Route> to={Route::Login} classes="link link-primary">{"Sign in"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
