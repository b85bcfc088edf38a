//! Mock authentication and session management
//!
//! Any non-empty email/password pair logs in. A session is an opaque token
//! mapped to the authenticated user in the store; it never expires and is
//! removed only by logout.

use chrono::Utc;
use common::{SharedStore, StoreError, load_json, save_json};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{AuthResponse, RegisterRequest, User};
use crate::repositories::UserDirectory;
use crate::seed;

/// Errors raised while authenticating
#[derive(Error, Debug)]
pub enum SessionError {
    /// Empty email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The session store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type SessionResult<T> = Result<T, SessionError>;

fn session_key(token: &str) -> String {
    format!("phoneflip_session_{}", token)
}

/// Tokens are generated as simple UUIDs; anything else cannot be a session
fn is_well_formed(token: &str) -> bool {
    !token.is_empty() && token.len() <= 64 && token.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Session manager for handling user sessions in the store
#[derive(Clone)]
pub struct SessionManager {
    store: SharedStore,
    users: UserDirectory,
    dev_mode: bool,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(store: SharedStore, users: UserDirectory, dev_mode: bool) -> Self {
        Self {
            store,
            users,
            dev_mode,
        }
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    async fn create_session(&self, user: User) -> SessionResult<AuthResponse> {
        let token = Uuid::new_v4().simple().to_string();
        save_json(self.store.as_ref(), &session_key(&token), &user).await?;

        info!("Created session for user: {}", user.id);
        Ok(AuthResponse { token, user })
    }

    /// Log in with any non-empty credentials as the default user
    ///
    /// The user directory is left alone, so seeded seller profiles stay as
    /// they are.
    pub async fn login(&self, email: &str, password: &str) -> SessionResult<AuthResponse> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            warn!("Rejected login with empty credentials");
            return Err(SessionError::InvalidCredentials);
        }

        info!("Login attempt for user: {}", email);
        let user = User {
            email: email.to_string(),
            ..seed::default_user()
        };
        self.create_session(user).await
    }

    /// Register a new user from the supplied profile
    pub async fn register(&self, request: RegisterRequest) -> SessionResult<AuthResponse> {
        let email = request.email.trim();
        if email.is_empty() || request.password.trim().is_empty() {
            warn!("Rejected registration with empty credentials");
            return Err(SessionError::InvalidCredentials);
        }

        let defaults = seed::default_user();
        let user = User {
            id: format!("user-{}", Uuid::new_v4().simple()),
            name: request.name.unwrap_or(defaults.name),
            email: email.to_string(),
            phone: request.phone.unwrap_or(defaults.phone),
            location: request.location.unwrap_or(defaults.location),
            avatar: request.avatar.or(defaults.avatar),
            created_at: Utc::now(),
        };

        info!("Registering new user: {}", user.email);
        self.users.upsert(&user).await?;
        self.create_session(user).await
    }

    /// Get the user for a session token
    pub async fn current(&self, token: &str) -> SessionResult<Option<User>> {
        if !is_well_formed(token) {
            return Ok(None);
        }
        Ok(load_json(self.store.as_ref(), &session_key(token)).await?)
    }

    /// Resolve the caller: a token must name a live session; without one,
    /// development mode falls back to the default user
    pub async fn resolve(&self, token: Option<&str>) -> SessionResult<Option<User>> {
        match token {
            Some(token) => self.current(token).await,
            None if self.dev_mode => Ok(Some(seed::default_user())),
            None => Ok(None),
        }
    }

    /// Delete a session; unknown tokens are ignored
    pub async fn logout(&self, token: &str) -> SessionResult<()> {
        if !is_well_formed(token) {
            return Ok(());
        }
        self.store.delete(&session_key(token)).await?;
        info!("Deleted session");
        Ok(())
    }
}
