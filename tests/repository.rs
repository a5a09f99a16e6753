use banner_board::domain::banner::NewBanner;
use banner_board::domain::types::{BannerDescription, BannerTitle, BannerUrl, DisplayName, Login};
use banner_board::domain::user::NewUser;
use banner_board::repository::{
    BannerListQuery, BannerReader, BannerWriter, DieselRepository, UserReader, UserWriter,
};
use banner_board::services::banners::{list_page, seed_example_banner};

mod common;

fn new_banner(title: &str) -> NewBanner {
    NewBanner::new(
        BannerTitle::new(title).unwrap(),
        BannerDescription::new("Some text").unwrap(),
        BannerUrl::new("example.com").unwrap(),
        DisplayName::new("Alice").unwrap(),
    )
}

fn fill(repo: &DieselRepository, count: usize) {
    for i in 1..=count {
        repo.create_banner(&new_banner(&format!("Banner {i}"))).unwrap();
    }
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());
    let login = Login::new("alice").unwrap();
    let display = DisplayName::new("Alice").unwrap();

    assert!(!repo.login_exists(&login).unwrap());
    assert!(repo.get_user_by_login(&login).unwrap().is_none());

    let user = repo
        .create_user(&NewUser {
            display: display.clone(),
            login: login.clone(),
            password_hash: "hash".to_string(),
        })
        .unwrap();
    assert_eq!(user.display, "Alice");

    assert!(repo.login_exists(&login).unwrap());
    assert!(repo.display_exists(&display).unwrap());
    assert!(!repo.display_exists(&DisplayName::new("Bobby").unwrap()).unwrap());

    let stored = repo.get_user_by_login(&login).unwrap().unwrap();
    assert_eq!(stored.id, user.id);
    assert_eq!(stored.password_hash, "hash");
}

#[test]
fn test_duplicate_login_is_rejected_by_database() {
    let test_db = common::TestDb::new("test_duplicate_login_is_rejected_by_database.db");
    let repo = DieselRepository::new(test_db.pool());
    let user = NewUser {
        display: DisplayName::new("Alice").unwrap(),
        login: Login::new("alice").unwrap(),
        password_hash: "hash".to_string(),
    };
    repo.create_user(&user).unwrap();
    assert!(repo.create_user(&user).is_err());
}

#[test]
fn test_banner_repository_crud() {
    let test_db = common::TestDb::new("test_banner_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let banner = repo.create_banner(&new_banner("Snake")).unwrap();
    assert_eq!(banner.title, "Snake");
    assert_eq!(banner.url, "https://example.com");
    assert_eq!(banner.author, "Alice");

    assert!(repo.banner_title_exists(&BannerTitle::new("Snake").unwrap()).unwrap());
    assert!(!repo.banner_title_exists(&BannerTitle::new("Tetris").unwrap()).unwrap());

    repo.create_banner(&new_banner("Tetris")).unwrap();
    let (total, banners) = repo.list_banners(BannerListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(banners[0].title, "Snake");
    assert_eq!(banners[1].title, "Tetris");
}

#[test]
fn test_page_sizes_follow_total() {
    let test_db = common::TestDb::new("test_page_sizes_follow_total.db");
    let repo = DieselRepository::new(test_db.pool());
    let total = 20;
    let per_page = 9;
    fill(&repo, total);

    for page in 1..=3usize {
        let (count, banners) = repo
            .list_banners(BannerListQuery::new().paginate(page, per_page))
            .unwrap();
        assert_eq!(count, total);
        assert_eq!(banners.len(), per_page.min(total - (page - 1) * per_page));
        assert_eq!(banners[0].title, format!("Banner {}", (page - 1) * per_page + 1));
    }
}

#[test]
fn test_list_page_clamps_to_last_page() {
    let test_db = common::TestDb::new("test_list_page_clamps_to_last_page.db");
    let repo = DieselRepository::new(test_db.pool());
    fill(&repo, 10);

    let slice = list_page(&repo, Some(42), 3).unwrap();
    assert_eq!(slice.state.current_page(), 4);
    assert_eq!(slice.state.max_page(), 4);
    assert_eq!(slice.banners.len(), 1);
    assert_eq!(slice.banners[0].title, "Banner 10");

    let slice = list_page(&repo, None, 3).unwrap();
    assert_eq!(slice.state.current_page(), 1);
    assert_eq!(slice.banners.len(), 3);
}

#[test]
fn test_seed_example_banner_once() {
    let test_db = common::TestDb::new("test_seed_example_banner_once.db");
    let repo = DieselRepository::new(test_db.pool());

    assert!(seed_example_banner(&repo).unwrap());
    assert!(!seed_example_banner(&repo).unwrap());

    let (total, banners) = repo.list_banners(BannerListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(banners[0].title, "Example");
    assert_eq!(banners[0].author, "*EXAMPLE*");
}
