//! Per-page view models: built once per page and handed the handlers it
//! needs, instead of each handler looking up shared page state.

use std::sync::Arc;

use crate::auth_mode::AuthMode;
use crate::client::{
    AuthHandler, BannerApi, BannerListRenderer, BannerSubmitHandler, ClientResult, Credentials,
    LogoutHandler, NewBannerRequest, Outcome, RenderedPage, TokenStore,
};

/// The sign-in / registration page.
pub struct AuthPage {
    mode: AuthMode,
    handler: AuthHandler,
}

impl AuthPage {
    pub fn new(api: Arc<dyn BannerApi>, tokens: Arc<dyn TokenStore>, mode: AuthMode) -> Self {
        Self {
            mode,
            handler: AuthHandler::new(api, tokens),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switches the visible panel and returns the new mode.
    pub fn toggle(&mut self) -> AuthMode {
        self.mode = self.mode.toggle();
        self.mode
    }

    pub fn toggle_label(&self) -> &'static str {
        self.mode.toggle_label()
    }

    /// Submits the form of the visible panel.
    pub async fn submit(&self, credentials: &Credentials) -> Outcome {
        match self.mode {
            AuthMode::Login => self.handler.login(credentials).await,
            AuthMode::Register => self.handler.register(credentials).await,
        }
    }
}

/// The banner listing with its pager and logout button.
pub struct HomePage {
    renderer: BannerListRenderer,
    logout: LogoutHandler,
    current: Option<RenderedPage>,
}

impl HomePage {
    pub fn new(api: Arc<dyn BannerApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            renderer: BannerListRenderer::new(Arc::clone(&api)),
            logout: LogoutHandler::new(api, tokens),
            current: None,
        }
    }

    /// Loads `page`. On failure the previously shown page stays.
    pub async fn open(&mut self, page: usize) -> ClientResult<&RenderedPage> {
        let rendered = self.renderer.load(page).await?;
        Ok(self.current.insert(rendered))
    }

    pub fn current(&self) -> Option<&RenderedPage> {
        self.current.as_ref()
    }

    pub async fn logout(&self) -> Outcome {
        self.logout.logout().await
    }
}

/// The banner submission page.
pub struct NewBannerPage {
    submit: BannerSubmitHandler,
    logout: LogoutHandler,
}

impl NewBannerPage {
    pub fn new(api: Arc<dyn BannerApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            submit: BannerSubmitHandler::new(Arc::clone(&api)),
            logout: LogoutHandler::new(api, tokens),
        }
    }

    pub async fn submit(&self, request: &NewBannerRequest) -> Outcome {
        self.submit.submit(request).await
    }

    pub async fn logout(&self) -> Outcome {
        self.logout.logout().await
    }
}
