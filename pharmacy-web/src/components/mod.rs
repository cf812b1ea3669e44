pub(crate) mod cart_item_row;
pub(crate) mod checkout_modal;
pub(crate) mod emergency_modal;
pub(crate) mod form_field;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod medicine_card;
pub(crate) mod modal;
pub(crate) mod notice_stack;
pub(crate) mod order_details_modal;
pub(crate) mod status_badge;
pub(crate) mod tracking_modal;
pub(crate) mod user_dropdown;
