//! The paginated banner listing, fetched one page at a time.

use std::sync::Arc;

use crate::client::{BannerApi, ClientResult};
use crate::pagination::{HOME_ROUTE, PageState, Pager};
use crate::render::banner_cards;

/// Markup of one page plus the controls to move away from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub pager: Pager,
    /// Number of cards in `html`.
    pub count: usize,
}

pub struct BannerListRenderer {
    api: Arc<dyn BannerApi>,
}

impl BannerListRenderer {
    pub fn new(api: Arc<dyn BannerApi>) -> Self {
        Self { api }
    }

    /// Fetches `page` and renders exactly the banners the server sent.
    /// The pager is built from the page numbers in the response.
    pub async fn load(&self, page: usize) -> ClientResult<RenderedPage> {
        let body = self.api.banner_page(page).await.map_err(|err| {
            log::error!("Failed to load banners: {err}");
            err
        })?;

        let state = PageState::from_parts(body.page, body.max_page);
        Ok(RenderedPage {
            html: banner_cards(&body.banners),
            pager: Pager::new(state, HOME_ROUTE),
            count: body.banners.len(),
        })
    }
}
