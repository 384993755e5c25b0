//! CLI Commands

pub mod brute_force;
pub mod cipher_scan;
pub mod config;
pub mod list;
pub mod report;
pub mod run;
