pub mod cart_list;
pub mod checkout_form;
pub mod contact_form;
pub mod discount_form;
pub mod package_catalog;
pub mod toast;
