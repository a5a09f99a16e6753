//! Banner listing, paging and submission.

use crate::domain::banner::{Banner, NewBanner};
use crate::domain::types::{BannerDescription, BannerTitle, BannerUrl, DisplayName};
use crate::dto::main::HomePageData;
use crate::forms::banner::{NewBannerForm, NewBannerPayload};
use crate::models::auth::AuthenticatedUser;
use crate::pagination::{HOME_ROUTE, PageState, Paginated};
use crate::repository::{BannerListQuery, BannerReader, BannerWriter};
use crate::services::{ServiceError, ServiceResult};

/// One page of banners and where it sits in the listing.
#[derive(Debug)]
pub struct BannerPageSlice {
    pub banners: Vec<Banner>,
    pub state: PageState,
    pub total: usize,
}

/// Returns every banner, oldest first.
pub fn list_all<R>(repo: &R) -> ServiceResult<Vec<Banner>>
where
    R: BannerReader + ?Sized,
{
    let (_, banners) = repo.list_banners(BannerListQuery::new()).map_err(|err| {
        log::error!("Failed to list banners: {err}");
        err
    })?;
    Ok(banners)
}

/// Loads the requested page. Missing pages fall back to page 1, pages past
/// the end are clamped to the last one.
pub fn list_page<R>(
    repo: &R,
    requested: Option<usize>,
    per_page: usize,
) -> ServiceResult<BannerPageSlice>
where
    R: BannerReader + ?Sized,
{
    let first_try = requested.unwrap_or(1);
    let (total, mut banners) = repo
        .list_banners(BannerListQuery::new().paginate(first_try, per_page))
        .map_err(|err| {
            log::error!("Failed to list banners: {err}");
            err
        })?;

    let state = PageState::new(requested, total, per_page);

    if state.current_page() != first_try {
        let (_, clamped) = repo
            .list_banners(BannerListQuery::new().paginate(state.current_page(), per_page))
            .map_err(|err| {
                log::error!("Failed to list banners: {err}");
                err
            })?;
        banners = clamped;
    }

    Ok(BannerPageSlice {
        banners,
        state,
        total,
    })
}

/// Loads the listing shown on the home page.
pub fn load_home_page<R>(
    repo: &R,
    requested: Option<usize>,
    per_page: usize,
) -> ServiceResult<HomePageData>
where
    R: BannerReader + ?Sized,
{
    let slice = list_page(repo, requested, per_page)?;

    Ok(HomePageData {
        banners: Paginated::new(slice.banners, slice.state, HOME_ROUTE),
        total: slice.total,
    })
}

/// Validates and stores a banner authored by `user`.
pub fn create_banner<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: NewBannerForm,
) -> ServiceResult<Banner>
where
    R: BannerReader + BannerWriter + ?Sized,
{
    let author = DisplayName::new(user.display.as_str()).map_err(|err| {
        log::error!("Token carries an unusable display name: {err}");
        ServiceError::Internal("can't get your name".to_string())
    })?;

    let payload = NewBannerPayload::try_from(form)?;

    if repo.banner_title_exists(&payload.title)? {
        return Err(ServiceError::Conflict(
            "banner with this title already exists".to_string(),
        ));
    }

    let banner = repo
        .create_banner(&payload.into_domain(author))
        .map_err(|err| {
            log::error!("Failed to create a banner: {err}");
            ServiceError::from(err)
        })?;

    log::info!("Banner '{}' added by {}", banner.title, banner.author);
    Ok(banner)
}

/// Inserts the example banner when the board is empty. Returns whether it did.
pub fn seed_example_banner<R>(repo: &R) -> ServiceResult<bool>
where
    R: BannerReader + BannerWriter + ?Sized,
{
    let (total, _) = repo.list_banners(BannerListQuery::new().paginate(1, 1))?;
    if total > 0 {
        return Ok(false);
    }

    let example = NewBanner::new(
        BannerTitle::new("Example")?,
        BannerDescription::new("")?,
        BannerUrl::new("https://example.com")?,
        DisplayName::new("*EXAMPLE*")?,
    );
    repo.create_banner(&example)?;
    log::info!("Seeded the example banner");
    Ok(true)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::Pagination;
    use crate::repository::mock::MockRepository;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            display: "Alice".to_string(),
            login: "alice".to_string(),
            role: "user".to_string(),
        }
    }

    fn banners(count: usize) -> Vec<Banner> {
        (1..=count)
            .map(|id| Banner {
                id: id as i32,
                title: format!("Banner #{id}"),
                ..Banner::default()
            })
            .collect()
    }

    fn form() -> NewBannerForm {
        NewBannerForm {
            title: " Snake ".to_string(),
            description: "Classic".to_string(),
            url: "snake.example".to_string(),
        }
    }

    #[test]
    fn list_page_uses_requested_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_banners()
            .withf(|query| {
                query.pagination
                    == Some(Pagination {
                        page: 2,
                        per_page: 9,
                    })
            })
            .times(1)
            .returning(|_| Ok((20, banners(9))));

        let slice = list_page(&repo, Some(2), 9).expect("should list");

        assert_eq!(slice.state, PageState::from_parts(2, 3));
        assert_eq!(slice.banners.len(), 9);
        assert_eq!(slice.total, 20);
    }

    #[test]
    fn list_page_clamps_past_the_end() {
        let mut repo = MockRepository::new();
        repo.expect_list_banners()
            .withf(|query| query.pagination.as_ref().is_some_and(|p| p.page == 10))
            .times(1)
            .returning(|_| Ok((20, vec![])));
        repo.expect_list_banners()
            .withf(|query| query.pagination.as_ref().is_some_and(|p| p.page == 3))
            .times(1)
            .returning(|_| Ok((20, banners(2))));

        let slice = list_page(&repo, Some(10), 9).expect("should list");

        assert_eq!(slice.state.current_page(), 3);
        assert_eq!(slice.banners.len(), 2);
    }

    #[test]
    fn create_banner_rejects_duplicate_title() {
        let mut repo = MockRepository::new();
        repo.expect_banner_title_exists()
            .withf(|title| title.as_str() == "Snake")
            .returning(|_| Ok(true));
        repo.expect_create_banner().times(0);

        let result = create_banner(&repo, &user(), form());

        assert!(
            matches!(result, Err(ServiceError::Conflict(message)) if message == "banner with this title already exists")
        );
    }

    #[test]
    fn create_banner_uses_token_display_as_author() {
        let mut repo = MockRepository::new();
        repo.expect_banner_title_exists().returning(|_| Ok(false));
        repo.expect_create_banner()
            .withf(|banner| {
                banner.author.as_str() == "Alice"
                    && banner.title.as_str() == "Snake"
                    && banner.url.as_str() == "https://snake.example"
            })
            .times(1)
            .returning(|banner| {
                Ok(Banner {
                    id: 1,
                    title: banner.title.to_string(),
                    description: banner.description.to_string(),
                    url: banner.url.to_string(),
                    author: banner.author.to_string(),
                    ..Banner::default()
                })
            });

        let banner = create_banner(&repo, &user(), form()).expect("should create");

        assert_eq!(banner.author, "Alice");
    }

    #[test]
    fn create_banner_reports_form_errors() {
        let repo = MockRepository::new();
        let form = NewBannerForm {
            title: "x".to_string(),
            ..form()
        };

        let result = create_banner(&repo, &user(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn seed_only_runs_on_empty_board() {
        let mut repo = MockRepository::new();
        repo.expect_list_banners().returning(|_| Ok((1, banners(1))));
        repo.expect_create_banner().times(0);

        assert!(!seed_example_banner(&repo).unwrap());
    }
}
