//! Repository implementation for banners.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        banner::{Banner, NewBanner},
        types::BannerTitle,
    },
    models::banner::{Banner as DbBanner, NewBanner as DbNewBanner},
    repository::{BannerListQuery, BannerReader, BannerWriter, DieselRepository},
    repository::errors::RepositoryResult,
};

impl BannerReader for DieselRepository {
    fn list_banners(&self, query: BannerListQuery) -> RepositoryResult<(usize, Vec<Banner>)> {
        use crate::schema::banners;

        let mut conn = self.conn()?;

        let total: i64 = banners::table.count().get_result(&mut conn)?;

        let mut items = banners::table
            .order(banners::id.asc())
            .select(DbBanner::as_select())
            .into_boxed();

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1);
            let offset = ((page - 1) * pagination.per_page) as i64;
            items = items.limit(pagination.per_page as i64).offset(offset);
        }

        let items = items
            .load::<DbBanner>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok((total as usize, items))
    }

    fn banner_title_exists(&self, title: &BannerTitle) -> RepositoryResult<bool> {
        use crate::schema::banners;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(
            banners::table.filter(banners::title.eq(title.as_str())),
        ))
        .get_result(&mut conn)?;
        Ok(found)
    }
}

impl BannerWriter for DieselRepository {
    fn create_banner(&self, new_banner: &NewBanner) -> RepositoryResult<Banner> {
        use crate::schema::banners;

        let mut conn = self.conn()?;
        let insertable: DbNewBanner = new_banner.into();
        let banner = diesel::insert_into(banners::table)
            .values(&insertable)
            .returning(DbBanner::as_returning())
            .get_result::<DbBanner>(&mut conn)?;

        Ok(banner.into())
    }
}
