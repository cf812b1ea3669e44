use shared::models::OrderTracking;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::status_badge::OrderStatusBadge;

#[derive(Properties, PartialEq)]
pub struct TrackingModalProps {
    pub tracking: OrderTracking,
    pub on_close: Callback<()>,
}

#[function_component(TrackingModal)]
pub fn tracking_modal(props: &TrackingModalProps) -> Html {
    let tracking = &props.tracking;
    let title = format!("Track Order #{}", tracking.order_number);

    html! {
        <Modal {title} on_close={props.on_close.clone()}>
            <div class="space-y-3">
                <div class="flex items-center gap-2">
                    <OrderStatusBadge status={tracking.status} />
                    if tracking.is_emergency {
                        <span class="badge badge-error">{"Emergency"}</span>
                    }
                </div>
                <progress
                    class="progress progress-primary w-full"
                    value={tracking.progress_percentage.to_string()}
                    max="100"
                />
                <div class="text-sm">{ format!("{}% complete", tracking.progress_percentage) }</div>
                if let Some(number) = &tracking.tracking_number {
                    <div><span class="font-semibold">{"Tracking number: "}</span>{ number }</div>
                }
                if let Some(eta) = &tracking.estimated_delivery_time {
                    <div><span class="font-semibold">{"Estimated delivery: "}</span>{ eta.to_html() }</div>
                }
                if let Some(delivered) = &tracking.actual_delivery_time {
                    <div><span class="font-semibold">{"Delivered: "}</span>{ delivered.to_html() }</div>
                }
                if let Some(partner) = &tracking.delivery_partner {
                    <div class="card bg-base-200">
                        <div class="card-body p-4">
                            <div class="font-semibold">{"Delivery partner"}</div>
                            <div>{ &partner.name }</div>
                            <a class="link" href={format!("tel:{}", partner.phone)}>{ &partner.phone }</a>
                        </div>
                    </div>
                }
                if let Some(notes) = &tracking.delivery_notes {
                    <p class="text-sm text-base-content/70">{ notes }</p>
                }
            </div>
        </Modal>
    }
}
