use shared::models::{Order, format_price};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::status_badge::{OrderStatusBadge, status_label};

#[derive(Properties, PartialEq)]
pub struct OrderDetailsModalProps {
    pub order: Order,
    pub on_close: Callback<()>,
}

#[function_component(OrderDetailsModal)]
pub fn order_details_modal(props: &OrderDetailsModalProps) -> Html {
    let order = &props.order;
    let title = format!("Order #{}", order.order_number);

    html! {
        <Modal {title} on_close={props.on_close.clone()}>
            <div class="space-y-3">
                <div class="flex items-center gap-2">
                    <OrderStatusBadge status={order.status} />
                    <span class="text-sm">{ &order.created_at }</span>
                </div>
                <table class="table table-sm">
                    <thead>
                        <tr><th>{"Medicine"}</th><th>{"Qty"}</th><th>{"Price"}</th></tr>
                    </thead>
                    <tbody>
                        { for order.order_items.iter().map(|item| html! {
                            <tr key={item.id}>
                                <td>{ &item.medicine.name }</td>
                                <td>{ item.quantity }</td>
                                <td>{ format_price(item.price) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
                <div class="grid grid-cols-2 gap-1 text-sm">
                    <span>{"Delivery fee"}</span><span class="text-right">{ format_price(order.delivery_fee) }</span>
                    <span>{"Tax"}</span><span class="text-right">{ format_price(order.tax_amount) }</span>
                    <span>{"Discount"}</span><span class="text-right">{ format_price(order.discount_amount) }</span>
                    <span class="font-bold">{"Total"}</span>
                    <span class="text-right font-bold">{ format_price(order.total_amount) }</span>
                </div>
                <div class="text-sm">
                    <div><span class="font-semibold">{"Deliver to: "}</span>{ &order.delivery_address }</div>
                    <div><span class="font-semibold">{"Phone: "}</span>{ &order.delivery_phone }</div>
                    <div>
                        <span class="font-semibold">{"Payment: "}</span>
                        { format!("{} ({})", status_label(&order.payment_method), status_label(&order.payment_status)) }
                    </div>
                    if let Some(notes) = &order.delivery_notes {
                        <div><span class="font-semibold">{"Notes: "}</span>{ notes }</div>
                    }
                </div>
            </div>
        </Modal>
    }
}
