//! Security probes, plus the engines behind the standalone
//! `brute-force` and `cipher-scan` commands

pub mod account_lockout;
pub mod brute_force;
pub mod cipher_scan;
pub mod session_timeout;
