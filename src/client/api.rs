use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::client::{ClientConfig, ClientError, ClientResult, Credentials, NewBannerRequest};
use crate::domain::banner::Banner;
use crate::dto::api::{ApiError, BannerPage, LoginResponse};

/// Calls the board exposes over `/api`.
#[async_trait]
pub trait BannerApi: Send + Sync {
    async fn register(&self, credentials: &Credentials) -> ClientResult<()>;
    /// Returns the session token when the server includes one in the body.
    async fn login(&self, credentials: &Credentials) -> ClientResult<Option<String>>;
    async fn logout(&self) -> ClientResult<()>;
    async fn new_banner(&self, request: &NewBannerRequest) -> ClientResult<()>;
    async fn banners(&self) -> ClientResult<Vec<Banner>>;
    async fn banner_page(&self, page: usize) -> ClientResult<BannerPage>;
}

/// [`BannerApi`] over HTTP. Cookies set by the server (the session token)
/// are kept and sent back on later requests.
#[derive(Debug, Clone)]
pub struct HttpBannerApi {
    client: Client,
    base_url: String,
}

impl HttpBannerApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::network)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Passes 2xx responses through; anything else becomes the server's
    /// `{error}` message, or a network error when the body is not one.
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.map_err(ClientError::network)?;
        match serde_json::from_str::<ApiError>(&body) {
            Ok(api_error) => Err(ClientError::Server(api_error.error)),
            Err(_) => Err(ClientError::Network(format!(
                "unexpected response from server ({status})"
            ))),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(ClientError::network)
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Response> {
        let response = self
            .client
            .post(self.api_url(path))
            .json(body)
            .send()
            .await
            .map_err(ClientError::network)?;
        Self::check(response).await
    }

    async fn get(&self, path: &str) -> ClientResult<Response> {
        self.client
            .get(self.api_url(path))
            .send()
            .await
            .map_err(ClientError::network)
    }
}

#[async_trait]
impl BannerApi for HttpBannerApi {
    async fn register(&self, credentials: &Credentials) -> ClientResult<()> {
        self.post_json("/register", credentials).await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<Option<String>> {
        let response = self.post_json("/login", credentials).await?;
        // Any 2xx counts as success, the token in the body is a bonus.
        Ok(response
            .json::<LoginResponse>()
            .await
            .ok()
            .map(|body| body.token))
    }

    async fn logout(&self) -> ClientResult<()> {
        let response = self
            .client
            .post(self.api_url("/logout"))
            .send()
            .await
            .map_err(ClientError::network)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn new_banner(&self, request: &NewBannerRequest) -> ClientResult<()> {
        self.post_json("/newbanner", request).await?;
        Ok(())
    }

    async fn banners(&self) -> ClientResult<Vec<Banner>> {
        let response = self.get("/banners").await?;
        Self::read_json(response).await
    }

    async fn banner_page(&self, page: usize) -> ClientResult<BannerPage> {
        let response = self.get(&format!("/banners/paged?page={page}")).await?;
        Self::read_json(response).await
    }
}
