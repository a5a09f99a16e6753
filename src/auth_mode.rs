//! Which panel of the authentication page is visible.

use serde::{Deserialize, Serialize};

/// The authentication page shows either the sign-in or the registration
/// form; a single button switches between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Label of the switch button: it names the mode a click leads to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Registration",
            AuthMode::Register => "Sign in",
        }
    }

    pub fn shows_login(self) -> bool {
        self == AuthMode::Login
    }

    pub fn shows_register(self) -> bool {
        self == AuthMode::Register
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
        }
    }

    /// Reads `?mode=`; unknown values fall back to the login panel.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("register") => AuthMode::Register,
            _ => AuthMode::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_between_two_panels() {
        let mode = AuthMode::default();
        assert!(mode.shows_login() && !mode.shows_register());
        let mode = mode.toggle();
        assert_eq!(mode, AuthMode::Register);
        assert!(mode.shows_register() && !mode.shows_login());
        assert_eq!(mode.toggle(), AuthMode::Login);
    }

    #[test]
    fn label_names_the_other_panel() {
        assert_eq!(AuthMode::Login.toggle_label(), "Registration");
        assert_eq!(AuthMode::Register.toggle_label(), "Sign in");
    }

    #[test]
    fn query_parsing_defaults_to_login() {
        assert_eq!(AuthMode::from_query(Some("register")), AuthMode::Register);
        assert_eq!(AuthMode::from_query(Some("login")), AuthMode::Login);
        assert_eq!(AuthMode::from_query(Some("Registration")), AuthMode::Login);
        assert_eq!(AuthMode::from_query(None), AuthMode::Login);
    }
}
