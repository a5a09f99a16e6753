//! Banner submission form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::banner::NewBanner;
use crate::domain::types::{BannerDescription, BannerTitle, BannerUrl, DisplayName};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
/// Form data for a new banner.
pub struct NewBannerForm {
    #[validate(length(min = 2, max = 128, message = "title must be 2-128 characters long"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 256, message = "description must be 0-256 characters long"))]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

/// Validated banner fields, still missing the author.
pub struct NewBannerPayload {
    pub title: BannerTitle,
    pub description: BannerDescription,
    pub url: BannerUrl,
}

impl TryFrom<NewBannerForm> for NewBannerPayload {
    type Error = FormError;

    fn try_from(form: NewBannerForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            title: BannerTitle::new(form.title)?,
            description: BannerDescription::new(form.description)?,
            url: BannerUrl::new(form.url)?,
        })
    }
}

impl NewBannerPayload {
    pub fn into_domain(self, author: DisplayName) -> NewBanner {
        NewBanner::new(self.title, self.description, self.url, author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_trimmed_and_url_normalized() {
        let form = NewBannerForm {
            title: "  Tetris ".to_string(),
            description: " falling blocks ".to_string(),
            url: " tetris.example ".to_string(),
        };
        let payload = NewBannerPayload::try_from(form).unwrap();
        assert_eq!(payload.title.as_str(), "Tetris");
        assert_eq!(payload.description.as_str(), "falling blocks");
        assert_eq!(payload.url.as_str(), "https://tetris.example");
    }

    #[test]
    fn missing_url_is_rejected() {
        let form = NewBannerForm {
            title: "Tetris".to_string(),
            ..NewBannerForm::default()
        };
        let err = NewBannerPayload::try_from(form).err().unwrap();
        assert_eq!(err.to_string(), "url cannot be empty");
    }

    #[test]
    fn long_description_is_rejected() {
        let form = NewBannerForm {
            title: "Tetris".to_string(),
            description: "d".repeat(257),
            url: "tetris.example".to_string(),
        };
        assert!(NewBannerPayload::try_from(form).is_err());
    }
}
