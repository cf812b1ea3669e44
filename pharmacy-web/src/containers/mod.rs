pub(crate) mod form_validation;
pub(crate) mod header;
pub(crate) mod layout;
