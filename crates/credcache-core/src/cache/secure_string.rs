//! Secret field of a credential tuple

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

/// Password or token, wiped from memory when the last copy is dropped
///
/// Only [`expose`](Self::expose) hands out the value; formatting prints a
/// placeholder instead.
///
/// ```
/// use credcache_core::SecureString;
///
/// let secret = SecureString::from("hunter2");
/// assert_eq!(secret.expose(), "hunter2");
/// assert_eq!(format!("{:?}", secret), "[REDACTED]");
/// ```
#[derive(Clone, Default)]
pub struct SecureString(Zeroizing<String>);

impl SecureString {
    /// Borrow the secret for handing to the share client
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether no secret was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecureString {
    fn from(secret: String) -> Self {
        Self(Zeroizing::new(secret))
    }
}

impl From<&str> for SecureString {
    fn from(secret: &str) -> Self {
        secret.to_owned().into()
    }
}

// Shows up as `secret: [REDACTED]` in a tuple's derived Debug
impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

// Constant time so a cached secret can't be probed by comparison timing
impl PartialEq for SecureString {
    fn eq(&self, other: &Self) -> bool {
        self.expose().as_bytes().ct_eq(other.expose().as_bytes()).into()
    }
}

impl Eq for SecureString {}
