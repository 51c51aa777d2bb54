use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{AuthFailure, Authenticator, Credentials};
use crate::model::{Identity, Role};
use crate::storage::{SESSION_KEY, Storage};

/// The logged-in user. Created only by [`SessionManager::login`] or
/// [`SessionManager::restore`], ended by [`SessionManager::logout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.identity.role == Role::Admin
    }
}

/// Persists the current session under [`SESSION_KEY`].
pub struct SessionManager<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn login<A: Authenticator + ?Sized>(
        &self,
        auth: &A,
        credentials: &Credentials,
    ) -> Result<Session, AuthFailure> {
        let identity = match auth.authenticate(credentials).await {
            Ok(identity) => identity,
            Err(e) => {
                metrics::counter!(crate::observability::AUTH_FAILURES_TOTAL).increment(1);
                warn!("login failed: {e}");
                return Err(e);
            }
        };
        let session = Session {
            identity,
            started_at: Utc::now(),
        };
        self.save(&session);
        info!("login: {} ({:?})", session.identity.email, session.identity.role);
        Ok(session)
    }

    /// Reload a previously saved session. Absent or unreadable → `None`.
    pub fn restore(&self) -> Option<Session> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("failed to read session: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("discarding unreadable session: {e}");
                None
            }
        }
    }

    /// End the session and forget it.
    pub fn logout(&self, session: Session) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            warn!("failed to clear session: {e}");
        }
        info!("logout: {}", session.identity.email);
    }

    fn save(&self, session: &Session) {
        let result = serde_json::to_string(session)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            .and_then(|json| self.storage.set(SESSION_KEY, &json));
        if let Err(e) = result {
            warn!("failed to persist session: {e}");
            metrics::counter!(crate::observability::STORAGE_WRITE_FAILURES_TOTAL, "key" => SESSION_KEY)
                .increment(1);
        }
    }
}
