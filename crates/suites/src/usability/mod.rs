//! Usability checks: navigation affordances, visual consistency,
//! product imagery and responsive layout

pub mod button_labels;
pub mod navigation_sidebar;
pub mod responsiveness;
pub mod ui_color_font;
pub mod ui_images;
