use async_trait::async_trait;

use crate::model::{Identity, Professor};
use crate::storage::Storage;
use crate::store::DirectoryStore;

/// What a user submits on the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: Option<String>,
}

impl Credentials {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    UnknownEmail(String),
    InvalidCredentials,
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthFailure::UnknownEmail(email) => write!(f, "email not found: {email}"),
            AuthFailure::InvalidCredentials => write!(f, "invalid credentials"),
        }
    }
}

impl std::error::Error for AuthFailure {}

/// Turns credentials into an identity. Being registered in the directory is
/// not the same as being authenticated; implementations decide the latter.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthFailure>;
}

/// Accepts any registered email (exact, case-sensitive). The password is
/// ignored.
#[derive(Debug, Clone)]
pub struct DirectoryAuthenticator {
    professors: Vec<Professor>,
}

impl DirectoryAuthenticator {
    pub fn new(professors: Vec<Professor>) -> Self {
        Self { professors }
    }

    /// Snapshot the store's professor directory.
    pub fn from_store<S: Storage>(store: &DirectoryStore<S>) -> Self {
        Self::new(store.list_professors().to_vec())
    }
}

#[async_trait]
impl Authenticator for DirectoryAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthFailure> {
        self.professors
            .iter()
            .find(|p| p.email == credentials.email)
            .map(Identity::from)
            .ok_or_else(|| AuthFailure::UnknownEmail(credentials.email.clone()))
    }
}
