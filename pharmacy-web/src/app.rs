use std::rc::Rc;

use tracing::{debug, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::PharmacyClient;
use crate::components::loading::Loading;
use crate::config::FrontendConfig;
use crate::containers::layout::Layout;
use crate::models::app_state::AppState;
use crate::routes::RouteOutlet;
use crate::services::auth;
use crate::session::{Session, SessionStore};
use crate::shell::BrowserShell;
use crate::storage::BrowserStorage;
use crate::transport::ReqwestTransport;

/// The client provided by [`App`].
///
/// Every view that calls this is mounted beneath the provider, so a missing
/// context is a wiring bug rather than a runtime condition.
#[hook]
pub fn use_client() -> PharmacyClient {
    use_context::<PharmacyClient>().expect("PharmacyClient context is provided by App")
}

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let booted = use_state(|| false);

    let client = use_memo((), move |_| {
        let config = FrontendConfig::new();
        let observer = {
            let dispatch = dispatch.clone();
            Callback::from(move |session: Session| {
                dispatch.reduce_mut(|state| state.apply_session(&session));
            })
        };
        let session = SessionStore::new(Rc::new(BrowserStorage::new(config.token_key.clone())))
            .with_observer(observer);
        let shell = BrowserShell::new(dispatch, config.notice_timeout_ms);
        let base = config.resolved_api_base();
        debug!(api_base = %base, "storefront client configured");
        PharmacyClient::new(&base, Rc::new(ReqwestTransport::new()), session, Rc::new(shell))
    });

    {
        let booted = booted.clone();
        let client = (*client).clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let restored = auth::restore_session(&client).await;
                info!(signed_in = restored.is_some(), "session restored");
                booted.set(true);
            });
            || ()
        });
    }

    if !*booted {
        return html! { <Loading message="Checking your session" /> };
    }

    html! {
        <ContextProvider<PharmacyClient> context={(*client).clone()}>
            <BrowserRouter>
                <Layout>
                    <RouteOutlet />
                </Layout>
            </BrowserRouter>
        </ContextProvider<PharmacyClient>>
    }
}
