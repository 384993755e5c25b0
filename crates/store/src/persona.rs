//! Site accounts used to parametrize the suites

use serde::{Deserialize, Serialize};

/// Shared password for every demo-site account.
pub const PASSWORD: &str = "secret_sauce";

/// The six accounts the demo site ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    StandardUser,
    LockedOutUser,
    ProblemUser,
    PerformanceGlitchUser,
    ErrorUser,
    VisualUser,
}

impl Persona {
    /// Every account, in the site's listing order.
    pub fn all() -> &'static [Persona] {
        &[
            Persona::StandardUser,
            Persona::LockedOutUser,
            Persona::ProblemUser,
            Persona::PerformanceGlitchUser,
            Persona::ErrorUser,
            Persona::VisualUser,
        ]
    }

    /// Accounts that can actually log in.
    pub fn active() -> &'static [Persona] {
        &[
            Persona::StandardUser,
            Persona::ProblemUser,
            Persona::PerformanceGlitchUser,
            Persona::ErrorUser,
            Persona::VisualUser,
        ]
    }

    pub fn username(&self) -> &'static str {
        match self {
            Persona::StandardUser => "standard_user",
            Persona::LockedOutUser => "locked_out_user",
            Persona::ProblemUser => "problem_user",
            Persona::PerformanceGlitchUser => "performance_glitch_user",
            Persona::ErrorUser => "error_user",
            Persona::VisualUser => "visual_user",
        }
    }

    pub fn credentials(&self) -> (&'static str, &'static str) {
        (self.username(), PASSWORD)
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn all_lists_six_accounts() {
        assert_eq!(Persona::all().len(), 6);
    }

    #[test]
    fn active_excludes_the_locked_out_account() {
        let active = Persona::active();
        assert_eq!(active.len(), 5);
        assert!(!active.contains(&Persona::LockedOutUser));
    }

    #[test_case(Persona::StandardUser, "standard_user")]
    #[test_case(Persona::PerformanceGlitchUser, "performance_glitch_user")]
    #[test_case(Persona::VisualUser, "visual_user")]
    fn username_mapping(persona: Persona, expected: &str) {
        assert_eq!(persona.username(), expected);
        assert_eq!(persona.to_string(), expected);
    }

    #[test]
    fn credentials_share_the_site_password() {
        for persona in Persona::all() {
            let (user, pass) = persona.credentials();
            assert_eq!(user, persona.username());
            assert_eq!(pass, PASSWORD);
        }
    }
}
