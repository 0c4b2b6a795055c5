use std::sync::{Arc, RwLock};

use prep_core::model::{Mentor, User, UserId};
use storage::SessionStore;

use crate::api::{Backend, CompaniesUpdate, LoginRequest, RegisterRequest, RegisteredUser, TopicsUpdate};
use crate::error::SessionContextError;

/// Selectable topics and companies fetched from the metadata endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub topics: Vec<String>,
    pub companies: Vec<String>,
}

/// Holder for the authenticated user and static reference data.
///
/// The user record is a cache of the last server response, persisted via
/// the injected store so the next launch skips re-login. The persisted
/// record is trusted until explicit logout; there is no token refresh or
/// expiry handling.
pub struct SessionContext {
    backend: Arc<dyn Backend>,
    store: Arc<dyn SessionStore>,
    user: RwLock<Option<User>>,
}

impl SessionContext {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            backend,
            store,
            user: RwLock::new(None),
        }
    }

    /// Loads the persisted user at boot, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionContextError::Store` if the store is unreadable; a
    /// missing or corrupt record is simply `None`.
    pub async fn restore(&self) -> Result<Option<User>, SessionContextError> {
        let user = self.store.load().await?;
        if let Some(user) = &user {
            tracing::info!(user = %user.id, "restored persisted session");
        }
        self.set_user(user.clone());
        Ok(user)
    }

    /// The cached authenticated user, if logged in.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.user.read().map_or(None, |guard| guard.clone())
    }

    /// True when a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.read().map_or(false, |guard| guard.is_some())
    }

    /// Authenticates against the backend and persists the returned record.
    ///
    /// # Errors
    ///
    /// Returns `SessionContextError::Api` with the backend's message on
    /// rejected credentials, or `Store` if persisting fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionContextError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let user = self.backend.login(&request).await?;
        tracing::info!(user = %user.id, "logged in");

        self.store.save(&user).await?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Creates an account with initial topic/company preferences.
    ///
    /// Registration does not log in; the user is routed back to the login
    /// form afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SessionContextError::Api` with the backend's message (e.g.
    /// an already-registered email).
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisteredUser, SessionContextError> {
        let registered = self.backend.register(request).await?;
        tracing::info!(user = %registered.id, "registered");
        Ok(registered)
    }

    /// Clears both the in-memory user and the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `SessionContextError::Store` if the record cannot be removed.
    pub async fn logout(&self) -> Result<(), SessionContextError> {
        self.store.clear().await?;
        self.set_user(None);
        tracing::info!("logged out");
        Ok(())
    }

    /// Replaces topic preferences on the backend and refreshes the cache.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` without a user, otherwise backend/store errors.
    pub async fn update_topics(
        &self,
        selected: Vec<String>,
        custom: Vec<String>,
    ) -> Result<User, SessionContextError> {
        let user = self.current_user().ok_or(SessionContextError::NotLoggedIn)?;

        let update = TopicsUpdate {
            selected_topics: selected.clone(),
            custom_topics: custom.clone(),
        };
        self.backend.update_topics(&user.id, &update).await?;

        let updated = user.with_topics(selected, custom);
        self.store.save(&updated).await?;
        self.set_user(Some(updated.clone()));
        Ok(updated)
    }

    /// Replaces target companies on the backend and refreshes the cache.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` without a user, otherwise backend/store errors.
    pub async fn update_companies(
        &self,
        companies: Vec<String>,
    ) -> Result<User, SessionContextError> {
        let user = self.current_user().ok_or(SessionContextError::NotLoggedIn)?;

        let update = CompaniesUpdate {
            companies: companies.clone(),
        };
        self.backend.update_companies(&user.id, &update).await?;

        let updated = user.with_companies(companies);
        self.store.save(&updated).await?;
        self.set_user(Some(updated.clone()));
        Ok(updated)
    }

    /// Fetches the selectable topics and companies.
    ///
    /// # Errors
    ///
    /// Returns `SessionContextError::Api` if either request fails.
    pub async fn metadata(&self) -> Result<Metadata, SessionContextError> {
        let topics = self.backend.topics().await?;
        let companies = self.backend.companies().await?;
        Ok(Metadata { topics, companies })
    }

    /// The static mentor directory.
    #[must_use]
    pub fn mentors(&self) -> &'static [Mentor] {
        Mentor::directory()
    }

    /// The id of the logged-in user, if any.
    #[must_use]
    pub fn current_user_id(&self) -> Option<UserId> {
        self.user
            .read()
            .map_or(None, |guard| guard.as_ref().map(|user| user.id.clone()))
    }

    fn set_user(&self, user: Option<User>) {
        if let Ok(mut guard) = self.user.write() {
            *guard = user;
        }
    }
}
