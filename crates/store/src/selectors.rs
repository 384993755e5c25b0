//! Every locator the suites touch, in one place

use swagcheck_webdriver::By;

// Login page

pub fn username_field() -> By {
    By::id("user-name")
}

pub fn password_field() -> By {
    By::id("password")
}

pub fn login_button() -> By {
    By::id("login-button")
}

pub fn error_banner() -> By {
    By::css("[data-test='error']")
}

// Burger menu

pub fn burger_button() -> By {
    By::id("react-burger-menu-btn")
}

pub fn menu_close_button() -> By {
    By::id("react-burger-cross-btn")
}

pub fn menu_container() -> By {
    By::class_name("bm-menu")
}

pub fn all_items_link() -> By {
    By::id("inventory_sidebar_link")
}

pub fn about_link() -> By {
    By::id("about_sidebar_link")
}

pub fn logout_link() -> By {
    By::id("logout_sidebar_link")
}

pub fn reset_link() -> By {
    By::id("reset_sidebar_link")
}

// Inventory page

pub fn inventory_items() -> By {
    By::class_name("inventory_item")
}

pub fn item_name() -> By {
    By::class_name("inventory_item_name")
}

pub fn item_description() -> By {
    By::class_name("inventory_item_desc")
}

pub fn item_price() -> By {
    By::class_name("inventory_item_price")
}

pub fn add_to_cart_buttons() -> By {
    By::xpath("//button[text()='Add to cart']")
}

pub fn remove_buttons() -> By {
    By::xpath("//button[text()='Remove']")
}

pub fn add_to_cart_button(slug: &str) -> By {
    By::id(format!("add-to-cart-{}", slug))
}

/// First add button by id prefix, so the label suites can find it
/// without matching on the very text under test.
pub fn any_add_button() -> By {
    By::xpath("//button[starts-with(@id, 'add-to-cart')]")
}

pub fn any_remove_button() -> By {
    By::xpath("//button[starts-with(@id, 'remove')]")
}

/// The product photo inside one inventory card.
pub fn item_image() -> By {
    By::css(".inventory_item_img img")
}

pub fn sort_select() -> By {
    By::class_name("product_sort_container")
}

pub fn sort_option(value: &str) -> By {
    By::css(format!("option[value=\"{}\"]", value))
}

pub fn active_sort_label() -> By {
    By::class_name("active_option")
}

// Cart

pub fn cart_link() -> By {
    By::class_name("shopping_cart_link")
}

pub fn cart_badge() -> By {
    By::class_name("shopping_cart_badge")
}

pub fn cart_list() -> By {
    By::class_name("cart_list")
}

pub fn cart_items() -> By {
    By::class_name("cart_item")
}

// Checkout

pub fn checkout_button() -> By {
    By::id("checkout")
}

pub fn continue_shopping_button() -> By {
    By::id("continue-shopping")
}

pub fn continue_button() -> By {
    By::id("continue")
}

pub fn cancel_button() -> By {
    By::id("cancel")
}

pub fn finish_button() -> By {
    By::id("finish")
}

pub fn first_name_field() -> By {
    By::id("first-name")
}

pub fn last_name_field() -> By {
    By::id("last-name")
}

pub fn postal_code_field() -> By {
    By::id("postal-code")
}

pub fn summary_subtotal() -> By {
    By::class_name("summary_subtotal_label")
}

pub fn summary_tax() -> By {
    By::class_name("summary_tax_label")
}

pub fn summary_total() -> By {
    By::class_name("summary_total_label")
}

// Chrome shared across pages

pub fn secondary_header() -> By {
    By::class_name("header_secondary_container")
}

pub fn footer() -> By {
    By::tag("footer")
}

pub fn primary_buttons() -> By {
    By::class_name("btn")
}

/// Everything that renders text, for the font consistency sweep.
pub fn text_elements() -> By {
    By::xpath("//h1 | //h2 | //h3 | //p | //span | //button | //label | //a")
}
