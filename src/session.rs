use crate::config;

/// Sentinel value shipped in configuration templates. A credential equal to
/// this string is treated exactly like having no credential at all.
pub const PLACEHOLDER_CREDENTIAL: &str = "YOUR_SPOTIFY_ACCESS_TOKEN";

/// Holds the bearer credential for the lifetime of the process.
///
/// The credential is created on submission, read on every API call and
/// cleared on demand. It is never written to disk: closing the program
/// forgets it.
pub struct Session {
    credential: Option<String>,
}

impl Session {
    /// Creates a session without a credential.
    pub fn new() -> Self {
        Self { credential: None }
    }

    /// Creates a session seeded from the `SPOTIFY_ACCESS_TOKEN` environment
    /// variable, when it is set to something usable.
    pub fn from_env() -> Self {
        let mut session = Self::new();
        if let Some(token) = config::access_token() {
            session.submit(&token);
        }
        session
    }

    /// Submits a new credential. Surrounding whitespace is trimmed; empty
    /// input and the placeholder sentinel are rejected and leave the
    /// current credential untouched. Returns whether the value was accepted.
    pub fn submit(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER_CREDENTIAL {
            return false;
        }
        self.credential = Some(trimmed.to_string());
        true
    }

    /// Forgets the current credential.
    pub fn clear(&mut self) {
        self.credential = None;
    }

    /// Returns the current credential, if one has been submitted.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
