// Token storage
//
// Process-wide session state: access token, refresh token and the signed-in
// user. Persisted as a single JSON file so a restarted console resumes the
// session, the way the browser app kept it in localStorage. Readers never
// observe a half-written pair: all mutation happens under one write lock and
// the file is replaced via temp-file + rename.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use super::types::{JwtAuthResponse, Role, SessionUser};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<SessionUser>,
}

/// Shared token/session store. Only the request pipeline and the auth client
/// write to it.
pub struct TokenStore {
    state: RwLock<StoredSession>,
    path: Option<PathBuf>,
}

impl TokenStore {
    /// Open a store backed by the given file, loading any existing session
    pub fn open(path: PathBuf) -> Self {
        let state = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<StoredSession>(&contents) {
                Ok(session) => session,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                    StoredSession::default()
                }
            },
            Err(_) => StoredSession::default(),
        };

        Self {
            state: RwLock::new(state),
            path: Some(path),
        }
    }

    /// In-memory store, nothing touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            state: RwLock::new(StoredSession::default()),
            path: None,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().unwrap().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.state.read().unwrap().refresh_token.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.read().unwrap().user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().unwrap().user.as_ref().map(|u| u.role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().unwrap().access_token.is_some()
    }

    /// Replace only the access token (refresh path)
    pub fn save_token(&self, token: &str) {
        let mut state = self.state.write().unwrap();
        state.access_token = Some(token.to_string());
        self.persist(&state);
    }

    /// Store a full login/refresh response: both tokens and the identity are
    /// replaced together
    pub fn save_session(&self, response: &JwtAuthResponse) {
        let mut state = self.state.write().unwrap();
        state.access_token = Some(response.access_token.clone());
        state.refresh_token = Some(response.refresh_token.clone());
        state.user = Some(SessionUser::from(response));
        self.persist(&state);
    }

    /// Clear everything, in memory and on disk
    pub fn sign_out(&self) {
        let mut state = self.state.write().unwrap();
        *state = StoredSession::default();
        if let Some(ref path) = self.path {
            if let Err(e) = fs::remove_file(path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to remove session file {}: {}", path.display(), e);
                }
            }
        }
    }

    fn persist(&self, state: &StoredSession) {
        let Some(ref path) = self.path else {
            return;
        };

        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let tmp = path.with_extension("tmp");
            let json = serde_json::to_string_pretty(state)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            fs::write(&tmp, json)?;
            fs::rename(&tmp, path)
        })();

        if let Err(e) = result {
            tracing::warn!("Failed to persist session to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> JwtAuthResponse {
        serde_json::from_str(
            r#"{
                "accessToken": "access-1",
                "refreshToken": "refresh-1",
                "tokenType": "Bearer",
                "userId": 3,
                "username": "admin",
                "role": "ADMIN"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = TokenStore::in_memory();
        assert!(store.token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.user().is_none());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_save_session_replaces_pair_atomically() {
        let store = TokenStore::in_memory();
        store.save_session(&sample_response());
        assert_eq!(store.token().unwrap(), "access-1");
        assert_eq!(store.refresh_token().unwrap(), "refresh-1");
        assert_eq!(store.role().unwrap(), Role::Admin);

        let mut second = sample_response();
        second.access_token = "access-2".into();
        second.refresh_token = "refresh-2".into();
        store.save_session(&second);
        assert_eq!(store.token().unwrap(), "access-2");
        assert_eq!(store.refresh_token().unwrap(), "refresh-2");
    }

    #[test]
    fn test_save_token_keeps_refresh_token() {
        let store = TokenStore::in_memory();
        store.save_session(&sample_response());
        store.save_token("access-9");
        assert_eq!(store.token().unwrap(), "access-9");
        assert_eq!(store.refresh_token().unwrap(), "refresh-1");
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let store = TokenStore::in_memory();
        store.save_session(&sample_response());
        store.sign_out();
        assert!(store.token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_persistence_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = TokenStore::open(path.clone());
        store.save_session(&sample_response());
        drop(store);

        let reopened = TokenStore::open(path.clone());
        assert_eq!(reopened.token().unwrap(), "access-1");
        assert_eq!(reopened.user().unwrap().username, "admin");

        reopened.sign_out();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_session_file_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = TokenStore::open(path);
        assert!(!store.is_logged_in());
    }
}
