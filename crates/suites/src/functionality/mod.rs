//! Functional flows: login, cart, checkout, browsing, error paths and
//! the burger menu

pub mod checkout;
pub mod error_handling;
pub mod login_logout;
pub mod product_browsing;
pub mod shopping_cart;
pub mod sidebar_buttons;
