use std::str::FromStr;

use rust_decimal::Decimal;
use shared::models::{Category, Medicine, MedicineQuery, Prescription};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::use_client;
use crate::components::form_field::{TextField, checked_value, selected_value};
use crate::components::medicine_card::MedicineCard;
use crate::models::app_state::AppState;
use crate::services::{catalog, prescriptions};

/// Raw search form input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchFilters {
    term: String,
    category: String,
    /// `""`, `"true"` or `"false"`.
    prescription: String,
    min_price: String,
    max_price: String,
    in_stock: bool,
}

/// The backend hides out-of-stock medicines unless told otherwise.
impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            term: String::new(),
            category: String::new(),
            prescription: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            in_stock: true,
        }
    }
}

impl SearchFilters {
    /// Unparseable fields are treated as unset.
    fn to_query(&self) -> MedicineQuery {
        let price = |value: &str| Decimal::from_str(value.trim()).ok();
        MedicineQuery {
            q: Some(self.term.clone()),
            category: self.category.parse().ok(),
            prescription_required: self.prescription.parse().ok(),
            min_price: price(&self.min_price),
            max_price: price(&self.max_price),
            in_stock: Some(self.in_stock),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MedicinesPageProps {
    pub categories: Vec<Category>,
    pub medicines: Vec<Medicine>,
}

#[function_component(MedicinesPage)]
pub fn medicines_page(props: &MedicinesPageProps) -> Html {
    let client = use_client();
    let authenticated = *use_selector(AppState::is_authenticated);
    let medicines = {
        let initial = props.medicines.clone();
        use_state(move || initial)
    };
    let prescriptions = use_state(Vec::<Prescription>::new);
    let filters = use_state(SearchFilters::default);
    let searching = use_state(|| false);

    {
        let client = client.clone();
        let prescriptions = prescriptions.clone();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                spawn_local(async move {
                    prescriptions.set(prescriptions::picker_options(&client).await);
                });
            } else {
                prescriptions.set(Vec::new());
            }
            || ()
        });
    }

    let update = |apply: fn(&mut SearchFilters, String)| {
        let filters = filters.clone();
        Callback::from(move |value: String| {
            let mut next = (*filters).clone();
            apply(&mut next, value);
            filters.set(next);
        })
    };
    let on_select = |apply: fn(&mut SearchFilters, String)| {
        let filters = filters.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = selected_value(&event) {
                let mut next = (*filters).clone();
                apply(&mut next, value);
                filters.set(next);
            }
        })
    };
    let on_in_stock = {
        let filters = filters.clone();
        Callback::from(move |event: Event| {
            if let Some(checked) = checked_value(&event) {
                let mut next = (*filters).clone();
                next.in_stock = checked;
                filters.set(next);
            }
        })
    };

    let onsubmit = {
        let filters = filters.clone();
        let medicines = medicines.clone();
        let searching = searching.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let query = filters.to_query();
            let medicines = medicines.clone();
            let searching = searching.clone();
            searching.set(true);
            spawn_local(async move {
                if let Ok(found) = catalog::search_medicines(&client, &query).await {
                    medicines.set(found);
                }
                searching.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"Medicines"}</h1>
            <form class="card bg-base-200 p-4 grid grid-cols-1 md:grid-cols-3 lg:grid-cols-6 gap-3 items-end" {onsubmit}>
                <div class="md:col-span-2">
                    <TextField id="search-term" label="Search" placeholder="Name, brand or generic"
                        value={filters.term.clone()}
                        oninput={update(|filters, value| filters.term = value)} />
                </div>
                <div class="form-control">
                    <label class="label" for="search-category"><span class="label-text">{"Category"}</span></label>
                    <select id="search-category" class="select select-bordered"
                        onchange={on_select(|filters, value| filters.category = value)}>
                        <option value="" selected={filters.category.is_empty()}>{"All categories"}</option>
                        { for props.categories.iter().map(|category| html! {
                            <option
                                value={category.id.to_string()}
                                selected={filters.category == category.id.to_string()}
                            >
                                { &category.name }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-control">
                    <label class="label" for="search-prescription"><span class="label-text">{"Prescription"}</span></label>
                    <select id="search-prescription" class="select select-bordered"
                        onchange={on_select(|filters, value| filters.prescription = value)}>
                        <option value="" selected={filters.prescription.is_empty()}>{"Any"}</option>
                        <option value="true" selected={filters.prescription == "true"}>{"Required"}</option>
                        <option value="false" selected={filters.prescription == "false"}>{"Not required"}</option>
                    </select>
                </div>
                <TextField id="min-price" label="Min price" input_type="number"
                    value={filters.min_price.clone()}
                    oninput={update(|filters, value| filters.min_price = value)} />
                <TextField id="max-price" label="Max price" input_type="number"
                    value={filters.max_price.clone()}
                    oninput={update(|filters, value| filters.max_price = value)} />
                <label class="label cursor-pointer justify-start gap-2">
                    <input type="checkbox" class="checkbox" checked={filters.in_stock} onchange={on_in_stock} />
                    <span class="label-text">{"In stock only"}</span>
                </label>
                <button class="btn btn-primary" type="submit" disabled={*searching}>
                    <i class="fa-solid fa-magnifying-glass"></i>
                    {"Search"}
                </button>
            </form>

            if medicines.is_empty() {
                <div class="alert"><span>{"No medicines found"}</span></div>
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for medicines.iter().map(|medicine| html! {
                        <MedicineCard
                            key={medicine.id}
                            medicine={medicine.clone()}
                            prescriptions={(*prescriptions).clone()}
                        />
                    }) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_only_send_in_stock() {
        let pairs = SearchFilters::default().to_query().to_pairs();
        assert_eq!(pairs, vec![("in_stock", "true".to_string())]);
    }

    #[test]
    fn test_unchecked_in_stock_is_sent_as_false() {
        let filters = SearchFilters {
            in_stock: false,
            ..SearchFilters::default()
        };

        let pairs = filters.to_query().to_pairs();

        assert_eq!(pairs, vec![("in_stock", "false".to_string())]);
    }

    #[test]
    fn test_filters_to_query() {
        let filters = SearchFilters {
            term: "para".into(),
            category: "2".into(),
            prescription: "false".into(),
            min_price: "1.5".into(),
            max_price: "abc".into(),
            in_stock: true,
        };

        let query = filters.to_query();

        assert_eq!(query.q.as_deref(), Some("para"));
        assert_eq!(query.category, Some(2));
        assert_eq!(query.prescription_required, Some(false));
        assert_eq!(query.min_price, Some(Decimal::new(15, 1)));
        assert_eq!(query.max_price, None);
        assert_eq!(query.in_stock, Some(true));
    }
}
