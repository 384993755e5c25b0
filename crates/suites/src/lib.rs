//! Suite definitions for every check SwagCheck runs
//!
//! Four modules mirror the result tree: functionality, usability,
//! performance and security. Each suite module wires plain async fns
//! into a [`Suite`](swagcheck_harness::Suite); `registry::all_suites`
//! is the single list the runner and the CLI consume. The security
//! module also hosts the engines behind the standalone `brute-force`
//! and `cipher-scan` commands.

pub mod functionality;
pub mod performance;
pub mod registry;
pub mod security;
pub mod usability;

pub use registry::all_suites;

use anyhow::Context;

use swagcheck_store::Persona;

/// Personas arrive through the case table; a missing one is a wiring
/// bug in the suite definition, not a site failure.
pub(crate) fn bound_persona(persona: Option<Persona>) -> anyhow::Result<Persona> {
    persona.context("case registered without a persona")
}
