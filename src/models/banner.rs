use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::banner::{Banner as DomainBanner, NewBanner as DomainNewBanner};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::banners)]
/// Diesel model for [`crate::domain::banner::Banner`].
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::banners)]
/// Insertable form of [`Banner`].
pub struct NewBanner<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    pub url: &'a str,
    pub created_at: NaiveDateTime,
}

impl From<Banner> for DomainBanner {
    fn from(banner: Banner) -> Self {
        Self {
            id: banner.id,
            title: banner.title,
            description: banner.description,
            url: banner.url,
            author: banner.author,
            created_at: banner.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewBanner> for NewBanner<'a> {
    fn from(banner: &'a DomainNewBanner) -> Self {
        Self {
            title: banner.title.as_str(),
            description: banner.description.as_str(),
            author: banner.author.as_str(),
            url: banner.url.as_str(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
