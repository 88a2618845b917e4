//! Username/password pair supplied with every action.

use super::Username;
use std::fmt;
use zeroize::Zeroizing;

/// Credentials presented by the caller of an action.
///
/// The password is zeroed on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Creates credentials from raw inputs.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Username::new(username),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Returns the username used for the user lookup.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the plaintext password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
