//! SwagCheck suite harness
//!
//! This crate turns suites of browser cases into result files:
//! - Spawns the WebDriver server as a subprocess (or attaches to one)
//! - Opens storefront sessions with suite- or case-level lifetimes
//! - Folds case outcomes into per-suite text files and summary.json
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Suite Runner (Rust)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Runner                                                     │
//! │    ├── preflight() -> GET base_url                          │
//! │    ├── ensure_driver() -> DriverProcess | attach            │
//! │    ├── run_suite(suite) -> SuiteReport                      │
//! │    └── run_case(case, ctx) -> CaseRecord + notes            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Suite                                                      │
//! │    ├── name, category, tags                                 │
//! │    ├── scope: Suite | Case   (session lifetime)             │
//! │    └── cases: [Case]                                        │
//! │          ├── id (stable key on the result line)             │
//! │          ├── persona: Option<Persona>                       │
//! │          └── body: async fn(&mut CaseCtx, Option<Persona>)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ResultWriter                                               │
//! │    ├── <results>/<Category>/<Suite>.txt  (append)           │
//! │    └── <results>/summary.json                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod runner;

pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use model::{Baselines, Case, CaseCtx, CaseFn, Category, SessionScope, Suite};
pub use report::{parse_result_line, CaseRecord, ResultWriter, RunSummary, SuiteReport, Verdict};
pub use runner::{RunOptions, Runner};
