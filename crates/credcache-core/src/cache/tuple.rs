//! Credential tuple type

use super::secure_string::SecureString;

/// One set of access credentials for a server or share
///
/// The default value has every field empty and is what a lookup miss
/// returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialTuple {
    /// Account name
    pub username: String,
    /// Domain, realm or SMB workgroup
    pub domain: String,
    /// Password or token
    secret: SecureString,
}

impl CredentialTuple {
    /// Create a new credential tuple
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        domain: impl Into<String>,
        secret: impl Into<SecureString>,
    ) -> Self {
        Self {
            username: username.into(),
            domain: domain.into(),
            secret: secret.into(),
        }
    }

    /// The empty tuple returned on lookup miss
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the secret value
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.expose()
    }

    /// Whether every field is unset
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.domain.is_empty() && self.secret.is_empty()
    }
}
