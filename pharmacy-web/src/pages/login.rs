use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::use_client;
use crate::components::form_field::TextField;
use crate::routes::Route;
use crate::services::auth;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let client = use_client();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                // Success redirects; failures are shown as notices.
                let _ = auth::login(&client, &username, &password).await;
                loading.set(false);
            });
        })
    };

    let on_username = {
        let username = username.clone();
        Callback::from(move |value: String| username.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let is_busy = *loading;
    let disable_submit = username.is_empty() || password.is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    <TextField
                        id="username"
                        label="Username"
                        value={(*username).clone()}
                        oninput={on_username}
                        required=true
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        value={(*password).clone()}
                        oninput={on_password}
                        required=true
                    />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"No account yet? "}
                        <Link<Route> to={Route::Register} classes="link link-primary">{"Register"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
