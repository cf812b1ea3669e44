use shared::models::{OrderStatus, PrescriptionStatus};
use yew::prelude::*;

fn order_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge-warning",
        OrderStatus::Confirmed | OrderStatus::Processing => "badge-info",
        OrderStatus::Ready | OrderStatus::OutForDelivery => "badge-primary",
        OrderStatus::Delivered => "badge-success",
        OrderStatus::Cancelled => "badge-error",
    }
}

fn prescription_badge_class(status: PrescriptionStatus) -> &'static str {
    match status {
        PrescriptionStatus::Pending => "badge-warning",
        PrescriptionStatus::Verified => "badge-success",
        PrescriptionStatus::Rejected => "badge-error",
    }
}

/// Status words as shown to customers: `out_for_delivery` reads "Out For Delivery".
pub fn status_label(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, PartialEq)]
pub struct OrderStatusBadgeProps {
    pub status: OrderStatus,
}

#[function_component(OrderStatusBadge)]
pub fn order_status_badge(props: &OrderStatusBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", order_badge_class(props.status))}>
            { status_label(props.status.as_str()) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrescriptionStatusBadgeProps {
    pub status: PrescriptionStatus,
}

#[function_component(PrescriptionStatusBadge)]
pub fn prescription_status_badge(props: &PrescriptionStatusBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", prescription_badge_class(props.status))}>
            { status_label(props.status.as_str()) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("out_for_delivery"), "Out For Delivery");
        assert_eq!(status_label("pending"), "Pending");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(order_badge_class(OrderStatus::Delivered), "badge-success");
        assert_eq!(order_badge_class(OrderStatus::Cancelled), "badge-error");
        assert_eq!(prescription_badge_class(PrescriptionStatus::Pending), "badge-warning");
    }
}
