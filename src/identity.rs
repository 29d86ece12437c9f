//! Caller identity.
//!
//! Decides which user's records a command reads and writes. Credentials are
//! verified elsewhere; this only picks the user id, with a shared demo user
//! for unauthenticated use.

use std::fmt;

use crate::config::AuthConfig;
use crate::error::DincharyaError;

/// User id shared by every unauthenticated caller.
pub const DEMO_USER: &str = "demo";

/// Identifier of the user owning schedule entries and expenses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Create a user id from raw input.
    ///
    /// Returns `None` if the input is blank.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The demo user.
    #[must_use]
    pub fn demo() -> Self {
        Self(DEMO_USER.to_string())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the demo user.
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.0 == DEMO_USER
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the acting user.
///
/// Demo mode (the `--demo` flag or `allow_unauthenticated` in the config)
/// wins over everything else. Otherwise an explicit user is used, then the
/// configured default user.
///
/// # Errors
///
/// Returns `DincharyaError::Unauthenticated` if no user can be determined.
pub fn resolve_user(
    explicit: Option<&str>,
    demo: bool,
    auth: &AuthConfig,
) -> Result<UserId, DincharyaError> {
    if demo || auth.allow_unauthenticated {
        tracing::debug!("using demo identity");
        return Ok(UserId::demo());
    }

    explicit
        .and_then(UserId::new)
        .or_else(|| auth.default_user.as_deref().and_then(UserId::new))
        .ok_or_else(|| {
            DincharyaError::Unauthenticated(
                "Missing user identity (use --user <ID>, --demo, or set auth.default_user)"
                    .to_string(),
            )
        })
}
