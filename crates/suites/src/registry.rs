//! Every suite the harness knows about

use swagcheck_harness::Suite;

use crate::{functionality, performance, security, usability};

/// All runnable suites, in result-tree order.
pub fn all_suites() -> Vec<Suite> {
    vec![
        functionality::login_logout::suite(),
        functionality::shopping_cart::suite(),
        functionality::checkout::suite(),
        functionality::product_browsing::suite(),
        functionality::error_handling::suite(),
        functionality::sidebar_buttons::suite(),
        usability::navigation_sidebar::suite(),
        usability::button_labels::suite(),
        usability::ui_color_font::suite(),
        usability::ui_images::suite(),
        usability::responsiveness::suite(),
        performance::user_performance::suite(),
        security::account_lockout::suite(),
        security::session_timeout::suite(),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use swagcheck_harness::Category;

    use super::*;

    #[test]
    fn case_ids_are_unique_across_all_suites() {
        let mut seen = HashSet::new();
        for suite in all_suites() {
            for case in &suite.cases {
                assert!(seen.insert(case.id), "duplicate case id {}", case.id);
            }
        }
    }

    #[test]
    fn every_category_has_suites() {
        let suites = all_suites();
        for category in Category::all() {
            assert!(
                suites.iter().any(|s| s.category == *category),
                "no suites under {category}"
            );
        }
    }

    #[test]
    fn suite_names_match_their_result_files() {
        let names: Vec<_> = all_suites().iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 14);
        for expected in [
            "LoginLogout",
            "ShoppingCart",
            "CheckoutProcess",
            "ProductBrowsing",
            "ErrorHandling",
            "SidebarButtons",
            "NavigationSidebar",
            "NavigationButtonLabels",
            "UIColorFont",
            "UIImages",
            "Responsiveness",
            "UserPerformance",
            "AccountLockout",
            "SessionTimeout",
        ] {
            assert!(names.contains(&expected), "missing suite {expected}");
        }
    }

    #[test]
    fn full_case_catalog() {
        let total: usize = all_suites().iter().map(|s| s.cases.len()).sum();
        assert_eq!(total, 105);
    }

    #[test]
    fn no_suite_is_empty() {
        for suite in all_suites() {
            assert!(!suite.cases.is_empty(), "{} has no cases", suite.name);
        }
    }
}
