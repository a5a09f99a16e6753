use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        banner::{Banner, NewBanner},
        types::{BannerTitle, DisplayName, Login},
        user::{NewUser, User},
    },
    repository::errors::RepositoryResult,
};

pub mod banner;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod user;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerListQuery {
    pub pagination: Option<Pagination>,
}

impl BannerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait UserReader {
    fn get_user_by_login(&self, login: &Login) -> RepositoryResult<Option<User>>;
    fn display_exists(&self, display: &DisplayName) -> RepositoryResult<bool>;
    fn login_exists(&self, login: &Login) -> RepositoryResult<bool>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

pub trait BannerReader {
    /// Returns the total number of banners together with the requested slice,
    /// oldest first.
    fn list_banners(&self, query: BannerListQuery) -> RepositoryResult<(usize, Vec<Banner>)>;
    fn banner_title_exists(&self, title: &BannerTitle) -> RepositoryResult<bool>;
}

pub trait BannerWriter {
    fn create_banner(&self, new_banner: &NewBanner) -> RepositoryResult<Banner>;
}
