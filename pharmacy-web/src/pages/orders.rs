use shared::models::{Order, OrderTracking, format_price};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::use_client;
use crate::components::order_details_modal::OrderDetailsModal;
use crate::components::status_badge::OrderStatusBadge;
use crate::components::tracking_modal::TrackingModal;
use crate::routes::Route;
use crate::services::orders;

#[derive(Debug, Clone, PartialEq)]
enum OrderPanel {
    Closed,
    Tracking(OrderTracking),
    Details(Order),
}

#[derive(Properties, PartialEq)]
pub struct OrdersPageProps {
    pub orders: Vec<Order>,
}

#[function_component(OrdersPage)]
pub fn orders_page(props: &OrdersPageProps) -> Html {
    let client = use_client();
    let panel = use_state(|| OrderPanel::Closed);

    let on_track = {
        let client = client.clone();
        let panel = panel.clone();
        Callback::from(move |order_id: i64| {
            let client = client.clone();
            let panel = panel.clone();
            spawn_local(async move {
                if let Ok(tracking) = orders::track_order(&client, order_id).await {
                    panel.set(OrderPanel::Tracking(tracking));
                }
            });
        })
    };
    let on_details = {
        let panel = panel.clone();
        Callback::from(move |order_id: i64| {
            let client = client.clone();
            let panel = panel.clone();
            spawn_local(async move {
                if let Ok(order) = orders::order_details(&client, order_id).await {
                    panel.set(OrderPanel::Details(order));
                }
            });
        })
    };
    let on_close = {
        let panel = panel.clone();
        Callback::from(move |()| panel.set(OrderPanel::Closed))
    };

    if props.orders.is_empty() {
        return html! {
            <div class="hero py-12">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-2xl font-bold">{"No orders yet"}</h1>
                    <Link<Route> to={Route::Medicines} classes="btn btn-primary">{"Start Shopping"}</Link<Route>>
                </div>
            </div>
        };
    }

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{"My Orders"}</h1>
            <div class="space-y-4">
                { for props.orders.iter().map(|order| {
                    let order_id = order.id;
                    let track = on_track.reform(move |_: MouseEvent| order_id);
                    let details = on_details.reform(move |_: MouseEvent| order_id);
                    html! {
                        <div key={order.id} class="card bg-base-200 shadow">
                            <div class="card-body">
                                <div class="flex flex-wrap justify-between items-center gap-2">
                                    <h2 class="card-title">
                                        { format!("Order #{}", order.order_number) }
                                        if order.is_emergency {
                                            <span class="badge badge-error">{"Emergency"}</span>
                                        }
                                    </h2>
                                    <OrderStatusBadge status={order.status} />
                                </div>
                                <div class="text-sm text-base-content/70">
                                    { format!("Placed {}", order.created_at.display()) }
                                </div>
                                <div>
                                    { format!("{} item(s) · {}", order.order_items.len(), format_price(order.total_amount)) }
                                </div>
                                if let Some(eta) = &order.estimated_delivery_time {
                                    <div class="text-sm">{ format!("Estimated delivery: {}", eta.display()) }</div>
                                }
                                <div class="card-actions justify-end">
                                    <button class="btn btn-sm btn-outline" onclick={details}>{"Details"}</button>
                                    <button class="btn btn-sm btn-primary" onclick={track}>{"Track"}</button>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
            {
                match &*panel {
                    OrderPanel::Closed => html! {},
                    OrderPanel::Tracking(tracking) => html! {
                        <TrackingModal tracking={tracking.clone()} on_close={on_close.clone()} />
                    },
                    OrderPanel::Details(order) => html! {
                        <OrderDetailsModal order={order.clone()} on_close={on_close.clone()} />
                    },
                }
            }
        </div>
    }
}
