//! Form and button handlers.
//!
//! Each handler allows one outstanding request; a call made while the
//! previous one is still waiting returns [`Outcome::Ignored`] without
//! touching the network.

use std::sync::Arc;

use crate::client::guard::BusyFlag;
use crate::client::{
    BannerApi, ClientError, Credentials, NewBannerRequest, Outcome, TOKEN_KEY, TokenStore,
};
use crate::pagination::HOME_ROUTE;

pub const REGISTERED_NOTICE: &str = "Registration successful!";
pub const BANNER_ADDED_NOTICE: &str = "Banner added!";

/// Sign-in and registration forms.
pub struct AuthHandler {
    api: Arc<dyn BannerApi>,
    tokens: Arc<dyn TokenStore>,
    busy: BusyFlag,
}

impl AuthHandler {
    pub fn new(api: Arc<dyn BannerApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            busy: BusyFlag::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Registration stays on the page and only confirms.
    pub async fn register(&self, credentials: &Credentials) -> Outcome {
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        match self.api.register(credentials).await {
            Ok(()) => Outcome::Notice(REGISTERED_NOTICE.to_string()),
            Err(err) => {
                log::warn!("Registration failed: {err}");
                err.into_outcome()
            }
        }
    }

    /// A successful login caches the token and moves to the listing.
    pub async fn login(&self, credentials: &Credentials) -> Outcome {
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        match self.api.login(credentials).await {
            Ok(token) => {
                if let Some(token) = token {
                    self.tokens.set(TOKEN_KEY, token);
                }
                Outcome::Navigate(HOME_ROUTE.to_string())
            }
            Err(err) => {
                log::warn!("Login failed: {err}");
                err.into_outcome()
            }
        }
    }
}

/// The new banner form.
pub struct BannerSubmitHandler {
    api: Arc<dyn BannerApi>,
    busy: BusyFlag,
}

impl BannerSubmitHandler {
    pub fn new(api: Arc<dyn BannerApi>) -> Self {
        Self {
            api,
            busy: BusyFlag::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub async fn submit(&self, request: &NewBannerRequest) -> Outcome {
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        match self.api.new_banner(&request.trimmed()).await {
            Ok(()) => Outcome::Notice(BANNER_ADDED_NOTICE.to_string()),
            Err(err) => {
                log::warn!("Banner submission failed: {err}");
                err.into_outcome()
            }
        }
    }
}

/// The logout button.
pub struct LogoutHandler {
    api: Arc<dyn BannerApi>,
    tokens: Arc<dyn TokenStore>,
    busy: BusyFlag,
}

impl LogoutHandler {
    pub fn new(api: Arc<dyn BannerApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            busy: BusyFlag::new(),
        }
    }

    /// Any 2xx clears the cached token and reloads, whatever the body says.
    /// A refusal keeps the token and does nothing visible.
    pub async fn logout(&self) -> Outcome {
        let Some(_guard) = self.busy.try_acquire() else {
            return Outcome::Ignored;
        };

        match self.api.logout().await {
            Ok(()) => {
                self.tokens.remove(TOKEN_KEY);
                Outcome::Reload
            }
            Err(ClientError::Server(message)) => {
                log::warn!("Logout refused: {message}");
                Outcome::Ignored
            }
            Err(err) => {
                log::error!("Logout failed: {err}");
                err.into_outcome()
            }
        }
    }
}
