use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BannerDescription, BannerTitle, BannerUrl, DisplayName};

/// A promotional card: headline, text, link target and the author's display name.
///
/// `id` and `created_at` are server bookkeeping; API clients may omit them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Banner {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub author: String,
    #[serde(default)]
    pub created_at: NaiveDateTime,
}

/// Validated banner ready to be stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBanner {
    pub title: BannerTitle,
    pub description: BannerDescription,
    pub url: BannerUrl,
    pub author: DisplayName,
}

impl NewBanner {
    #[must_use]
    pub fn new(
        title: BannerTitle,
        description: BannerDescription,
        url: BannerUrl,
        author: DisplayName,
    ) -> Self {
        Self {
            title,
            description,
            url,
            author,
        }
    }
}
