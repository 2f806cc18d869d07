//! Durable auth session storage.
//!
//! The session holds two values: an opaque bearer token and the signed-in
//! user's profile. Both live in durable storage outside process memory and
//! are re-read on every access - there is no in-memory cache, so a token
//! rotation takes effect on the very next API call.
//!
//! Token and user are expected to be set and cleared together on
//! login/logout; [`crate::services::AuthService`] is the call site that
//! upholds this.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use clementine_core::types::{Gender, UserId};

/// The signed-in user's profile as stored alongside the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Durable key-value storage for the auth session.
///
/// Reads are synchronous and side-effect-free; storage failures are logged
/// and reported as an absent value rather than propagated, leaving callers
/// to treat a broken session as "not signed in".
pub trait SessionStore: Send + Sync {
    /// The stored bearer token, if any.
    fn token(&self) -> Option<SecretString>;
    /// Store the bearer token.
    fn set_token(&self, token: &str);
    /// Remove the bearer token.
    fn clear_token(&self);
    /// The stored user profile, if any.
    fn user(&self) -> Option<SessionUser>;
    /// Store the user profile.
    fn set_user(&self, user: &SessionUser);
    /// Remove the user profile.
    fn clear_user(&self);

    /// Whether a token is present (says nothing about expiry).
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Whether the stored token is missing or past its expiry claim.
    fn is_token_expired(&self) -> bool {
        self.token()
            .is_none_or(|token| token_is_expired(token.expose_secret()))
    }
}

/// Check a JWT's `exp` claim against the current time.
///
/// Decodes the payload segment as base64url JSON and compares `exp` with
/// the current Unix timestamp. The signature is not verified; the backend
/// remains the authority on token validity. Any malformed token counts as
/// expired.
#[must_use]
pub fn token_is_expired(token: &str) -> bool {
    let Some(exp) = decode_expiry(token) else {
        debug!("token has no readable expiry claim, treating as expired");
        return true;
    };
    exp < chrono::Utc::now().timestamp()
}

fn decode_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

// =============================================================================
// File-backed store
// =============================================================================

/// On-disk session document. Token and user share one file so they can be
/// inspected and wiped together.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionDocument {
    token: Option<String>,
    user: Option<SessionUser>,
}

/// Session store backed by a JSON file.
///
/// Every read goes back to the file; every write rewrites it wholesale.
/// I/O failures are logged and swallowed.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> SessionDocument {
        match std::fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "session file is corrupt, treating as empty");
                SessionDocument::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionDocument::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read session file");
                SessionDocument::default()
            }
        }
    }

    fn write(&self, document: &SessionDocument) {
        let result = serde_json::to_vec_pretty(document)
            .map_err(std::io::Error::other)
            .and_then(|bytes| std::fs::write(&self.path, bytes));
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }

    fn update(&self, apply: impl FnOnce(&mut SessionDocument)) {
        let mut document = self.read();
        apply(&mut document);
        self.write(&document);
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<SecretString> {
        self.read().token.map(SecretString::from)
    }

    fn set_token(&self, token: &str) {
        self.update(|doc| doc.token = Some(token.to_string()));
    }

    fn clear_token(&self) {
        self.update(|doc| doc.token = None);
    }

    fn user(&self) -> Option<SessionUser> {
        self.read().user
    }

    fn set_user(&self, user: &SessionUser) {
        self.update(|doc| doc.user = Some(user.clone()));
    }

    fn clear_user(&self) {
        self.update(|doc| doc.user = None);
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Session store held in process memory.
///
/// Useful for tests and for embedders that manage persistence themselves.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<SessionDocument>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a store already holding a token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<SecretString> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
            .map(SecretString::from)
    }

    fn set_token(&self, token: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .token = Some(token.to_string());
    }

    fn clear_token(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .token = None;
    }

    fn user(&self) -> Option<SessionUser> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    fn set_user(&self, user: &SessionUser) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .user = Some(user.clone());
    }

    fn clear_user(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .user = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn make_token(claims: &serde_json::Value) -> String {
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("header.{payload}.signature")
    }

    fn sample_user() -> SessionUser {
        SessionUser {
            id: UserId::new(1),
            username: "alice".to_string(),
            real_name: Some("Alice".to_string()),
            phone: None,
            gender: Some(Gender::F),
            roles: vec!["ROLE_USER".to_string()],
        }
    }

    #[test]
    fn test_token_expiry_future() {
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = make_token(&serde_json::json!({ "exp": exp }));
        assert!(!token_is_expired(&token));
    }

    #[test]
    fn test_token_expiry_past() {
        let exp = chrono::Utc::now().timestamp() - 10;
        let token = make_token(&serde_json::json!({ "exp": exp }));
        assert!(token_is_expired(&token));
    }

    #[test]
    fn test_token_expiry_malformed() {
        assert!(token_is_expired("not-a-jwt"));
        assert!(token_is_expired("a.b.c"));
        let token = make_token(&serde_json::json!({ "sub": "alice" }));
        assert!(token_is_expired(&token));
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());

        store.set_token("abc");
        store.set_user(&sample_user());
        assert!(store.is_authenticated());
        assert_eq!(store.token().unwrap().expose_secret(), "abc");
        assert_eq!(store.user().unwrap().username, "alice");

        store.clear_token();
        store.clear_user();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "clementine-session-test-{}.json",
            std::process::id()
        ));
        let store = FileSessionStore::new(&path);

        assert!(store.token().is_none());

        store.set_token("tok-123");
        store.set_user(&sample_user());

        // A second store over the same path observes the write immediately.
        let other = FileSessionStore::new(&path);
        assert_eq!(other.token().unwrap().expose_secret(), "tok-123");
        assert_eq!(other.user().unwrap().id, UserId::new(1));

        store.clear_token();
        assert!(other.token().is_none());
        // User survives clearing just the token.
        assert!(other.user().is_some());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_store_corrupt_file_is_empty_session() {
        let path = std::env::temp_dir().join(format!(
            "clementine-session-corrupt-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, b"{ not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.token().is_none());
        assert!(store.user().is_none());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_store_expiry_without_token() {
        let store = MemorySessionStore::new();
        assert!(store.is_token_expired());
    }
}
