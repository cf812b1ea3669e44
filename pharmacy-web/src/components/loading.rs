use yew::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// What is being waited on, e.g. "Checking your session".
    #[prop_or(AttrValue::Static("Loading"))]
    pub message: AttrValue,
}

/// Placeholder shown while the session is checked or a page's data loads.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex justify-center py-16" role="status" aria-live="polite">
            <div class="flex items-center gap-3 text-base-content/70">
                <span class="loading loading-spinner loading-md text-primary"></span>
                <i class="fa-solid fa-capsules text-primary"></i>
                <span>{ format!("{}...", props.message) }</span>
            </div>
        </div>
    }
}

/// Message for a routed page whose data is still loading.
pub fn page_message(path: &str) -> AttrValue {
    Route::from_path(path).map_or(AttrValue::Static("Loading"), |route| {
        AttrValue::from(format!("Loading {}", route.title().to_lowercase()))
    })
}
