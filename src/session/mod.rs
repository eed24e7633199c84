//! Admin session state
//!
//! The bearer token issued at login is the only local authentication signal.
//! It lives behind the [`SessionStore`] trait so the API client can be driven
//! by an in-memory store in tests and a file-backed store from the CLI.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Cookie name the web panel reads the token from
pub const SESSION_COOKIE_NAME: &str = "token";

/// Session lifetime: 24 hours
pub const SESSION_MAX_AGE_SECS: i64 = 86_400;

/// Max-Age written when the cookie is cleared
pub const CLEAR_MAX_AGE_SECS: i64 = -99_999_999;

/// A stored admin session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token. Never inspected locally.
    pub token: String,

    /// Lifetime in seconds from `created_at`
    #[serde(default = "default_max_age")]
    pub max_age_seconds: i64,

    /// When the session was stored
    pub created_at: DateTime<Utc>,
}

fn default_max_age() -> i64 {
    SESSION_MAX_AGE_SECS
}

impl Session {
    /// New session with the standard 24 hour lifetime, starting now
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            max_age_seconds: SESSION_MAX_AGE_SECS,
            created_at: Utc::now(),
        }
    }

    /// When Max-Age runs out; `None` if it falls outside the representable range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Duration::try_seconds(self.max_age_seconds)
            .and_then(|lifetime| self.created_at.checked_add_signed(lifetime))
    }

    /// Whether Max-Age has elapsed at `now`. An unrepresentable expiry
    /// counts as elapsed.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_none_or(|expires| expires <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// `Set-Cookie` value that hands this session to the web panel
    pub fn set_cookie(&self, secure: bool) -> String {
        render_cookie(&self.token, self.max_age_seconds, secure)
    }
}

/// `Set-Cookie` value that removes the session cookie
pub fn clear_cookie(secure: bool) -> String {
    render_cookie("", CLEAR_MAX_AGE_SECS, secure)
}

fn render_cookie(value: &str, max_age: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        SESSION_COOKIE_NAME, value, max_age
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Storage for the single active session.
///
/// Implementations hold at most one session. Reads of an expired session
/// return `None`, the way a browser drops a cookie past its Max-Age.
pub trait SessionStore: Send + Sync {
    /// Current session, if one is stored and still within its lifetime
    fn get(&self) -> Result<Option<Session>>;

    /// Replace the stored session
    fn set(&self, session: Session) -> Result<()>;

    /// Remove the stored session. Succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;

    /// Token of the current session
    fn token(&self) -> Result<Option<String>> {
        Ok(self.get()?.map(|s| s.token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_lifetime() {
        let session = Session::new("abc");
        assert_eq!(session.token, "abc");
        assert_eq!(session.max_age_seconds, 86_400);
        assert!(!session.is_expired());
        assert_eq!(
            session.expires_at().unwrap() - session.created_at,
            Duration::hours(24)
        );
    }

    #[test]
    fn test_session_expiry() {
        let mut session = Session::new("abc");
        session.created_at = Utc::now() - Duration::hours(25);
        assert!(session.is_expired());

        session.created_at = Utc::now() - Duration::hours(23);
        assert!(!session.is_expired());
    }

    #[test]
    fn test_out_of_range_max_age_is_expired() {
        let mut session = Session::new("abc");

        session.max_age_seconds = i64::MAX;
        assert!(session.expires_at().is_none());
        assert!(session.is_expired());

        session.max_age_seconds = i64::MIN;
        assert!(session.is_expired());
    }

    #[test]
    fn test_set_cookie_hardened() {
        let session = Session::new("abc");
        assert_eq!(
            session.set_cookie(true),
            "token=abc; Path=/; Max-Age=86400; SameSite=Lax; Secure"
        );
    }

    #[test]
    fn test_set_cookie_without_secure() {
        let session = Session::new("abc");
        assert_eq!(
            session.set_cookie(false),
            "token=abc; Path=/; Max-Age=86400; SameSite=Lax"
        );
    }

    #[test]
    fn test_clear_cookie() {
        assert_eq!(
            clear_cookie(false),
            "token=; Path=/; Max-Age=-99999999; SameSite=Lax"
        );
        assert!(clear_cookie(true).ends_with("; Secure"));
    }
}
