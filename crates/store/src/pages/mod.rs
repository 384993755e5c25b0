//! Page objects over the storefront DOM
//!
//! Each struct borrows the session and wraps one page's interactions.
//! Pages do mechanics only; pass/fail judgment belongs to the suites.

mod cart;
mod checkout;
mod inventory;
mod login;
mod menu;

pub use cart::{CartItem, CartPage};
pub use checkout::CheckoutPage;
pub use inventory::InventoryPage;
pub use login::LoginPage;
pub use menu::SideMenu;
