//! Timed interaction checks

pub mod user_performance;
