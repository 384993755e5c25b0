//! Expected storefront data
//!
//! Rendered names, descriptions, prices and image assets as the demo
//! site serves them to a healthy account. The broken personas are
//! expected to deviate from this table, which is what the usability
//! suites detect.

/// One product as the inventory page should render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Rendered price text, e.g. `$29.99`.
    pub price: &'static str,
    /// Absolute `img src` of the product photo.
    pub image: &'static str,
    /// Suffix of the product's `add-to-cart-*` button id.
    pub slug: &'static str,
}

pub const PRODUCTS: &[ProductSpec] = &[
    ProductSpec {
        name: "Sauce Labs Backpack",
        description: "carry.allTheThings() with the sleek, streamlined Sly Pack that melds uncompromising style with unequaled laptop and tablet protection.",
        price: "$29.99",
        image: "https://www.saucedemo.com/static/media/sauce-backpack-1200x1500.0a0b85a3.jpg",
        slug: "sauce-labs-backpack",
    },
    ProductSpec {
        name: "Sauce Labs Bike Light",
        description: "A red light isn't the desired state in testing but it sure helps when riding your bike at night. Water-resistant with 3 lighting modes, 1 AAA battery included.",
        price: "$9.99",
        image: "https://www.saucedemo.com/static/media/bike-light-1200x1500.37c843b0.jpg",
        slug: "sauce-labs-bike-light",
    },
    ProductSpec {
        name: "Sauce Labs Bolt T-Shirt",
        description: "Get your testing superhero on with the Sauce Labs bolt T-shirt. From American Apparel, 100% ringspun combed cotton, heather gray with red bolt.",
        price: "$15.99",
        image: "https://www.saucedemo.com/static/media/bolt-shirt-1200x1500.c2599ac5.jpg",
        slug: "sauce-labs-bolt-t-shirt",
    },
    ProductSpec {
        name: "Sauce Labs Fleece Jacket",
        description: "It's not every day that you come across a midweight quarter-zip fleece jacket capable of handling everything from a relaxing day outdoors to a busy day at the office.",
        price: "$49.99",
        image: "https://www.saucedemo.com/static/media/sauce-pullover-1200x1500.51d7ffaf.jpg",
        slug: "sauce-labs-fleece-jacket",
    },
    ProductSpec {
        name: "Sauce Labs Onesie",
        description: "Rib snap infant onesie for the junior automation engineer in development. Reinforced 3-snap bottom closure, two-needle hemmed sleeved and bottom won't unravel.",
        price: "$7.99",
        image: "https://www.saucedemo.com/static/media/red-onesie-1200x1500.2ec615b2.jpg",
        slug: "sauce-labs-onesie",
    },
    ProductSpec {
        name: "Test.allTheThings() T-Shirt (Red)",
        description: "This classic Sauce Labs t-shirt is perfect to wear when cozying up to your keyboard to automate a few tests. Super-soft and comfy ringspun combed cotton.",
        price: "$15.99",
        image: "https://www.saucedemo.com/static/media/red-tatt-1200x1500.30dadef4.jpg",
        slug: "test.allthethings()-t-shirt-(red)",
    },
];

pub fn product_by_name(name: &str) -> Option<&'static ProductSpec> {
    PRODUCTS.iter().find(|p| p.name == name)
}

/// Item slugs the broken-UI personas (`problem_user`, `error_user`) can
/// still add reliably; the rest of their add buttons are dead on the
/// real site.
pub const RELIABLE_ADD_SLUGS: &[&str] = &[
    "sauce-labs-backpack",
    "sauce-labs-bike-light",
    "sauce-labs-onesie",
];

/// Items the checkout suites purchase.
pub const CHECKOUT_SLUGS: &[&str] = &["sauce-labs-backpack", "sauce-labs-bike-light"];

/// Links every account should see in the burger menu.
pub const SIDEBAR_LINKS: &[&str] = &["All Items", "About", "Logout", "Reset App State"];

/// Sort label the select shows after a reset.
pub const DEFAULT_SORT_LABEL: &str = "Name (A to Z)";

/// Navigation controls and the label each should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpec {
    /// Logical control name, used in result lines.
    pub control: &'static str,
    pub expected: &'static str,
}

pub const BUTTON_LABELS: &[LabelSpec] = &[
    LabelSpec { control: "Add to Cart", expected: "Add to cart" },
    LabelSpec { control: "Remove", expected: "Remove" },
    LabelSpec { control: "Checkout", expected: "Checkout" },
    LabelSpec { control: "Continue Shopping", expected: "Continue Shopping" },
    LabelSpec { control: "Continue", expected: "Continue" },
    LabelSpec { control: "Cancel", expected: "Cancel" },
    LabelSpec { control: "Login", expected: "Login" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::parse_price_cents;

    #[test]
    fn catalog_has_the_six_products() {
        assert_eq!(PRODUCTS.len(), 6);
        let backpack = product_by_name("Sauce Labs Backpack").expect("backpack in catalog");
        assert_eq!(backpack.price, "$29.99");
        assert!(backpack.image.ends_with(".jpg"));
    }

    #[test]
    fn every_price_parses() {
        for product in PRODUCTS {
            let cents = parse_price_cents(product.price)
                .unwrap_or_else(|e| panic!("{}: {}", product.name, e));
            assert!(cents > 0);
        }
    }

    #[test]
    fn reliable_slugs_exist_in_the_catalog() {
        for slug in RELIABLE_ADD_SLUGS.iter().chain(CHECKOUT_SLUGS) {
            assert!(
                PRODUCTS.iter().any(|p| p.slug == *slug),
                "unknown slug {slug}"
            );
        }
    }

    #[test]
    fn sidebar_links_are_in_menu_order() {
        assert_eq!(
            SIDEBAR_LINKS,
            &["All Items", "About", "Logout", "Reset App State"]
        );
    }
}
