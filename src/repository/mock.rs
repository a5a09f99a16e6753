//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::banner::{Banner, NewBanner};
use crate::domain::types::{BannerTitle, DisplayName, Login};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{BannerListQuery, BannerReader, BannerWriter, UserReader, UserWriter};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn get_user_by_login(&self, login: &Login) -> RepositoryResult<Option<User>>;
        fn display_exists(&self, display: &DisplayName) -> RepositoryResult<bool>;
        fn login_exists(&self, login: &Login) -> RepositoryResult<bool>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }

    impl BannerReader for Repository {
        fn list_banners(&self, query: BannerListQuery) -> RepositoryResult<(usize, Vec<Banner>)>;
        fn banner_title_exists(&self, title: &BannerTitle) -> RepositoryResult<bool>;
    }

    impl BannerWriter for Repository {
        fn create_banner(&self, new_banner: &NewBanner) -> RepositoryResult<Banner>;
    }
}
