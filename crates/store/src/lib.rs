//! Storefront model for SwagCheck
//!
//! Everything the suites know about the demo shop lives here: the six
//! site accounts, every locator, page objects over the DOM, and the
//! expected-value catalog (products, prices, images, button labels,
//! sidebar links) that healthy pages are checked against.

pub mod catalog;
pub mod money;
pub mod pages;
pub mod persona;
pub mod selectors;
pub mod session;

pub use pages::{CartItem, CartPage, CheckoutPage, InventoryPage, LoginPage, SideMenu};
pub use persona::{Persona, PASSWORD};
pub use session::StoreSession;
