use banner_board::repository::{BannerListQuery, BannerReader, DieselRepository};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new("test_creates_and_removes_db_files.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_leave_an_empty_board() {
    let test_db = common::TestDb::new("test_migrations_leave_an_empty_board.db");
    let repo = DieselRepository::new(test_db.pool());
    let (total, banners) = repo.list_banners(BannerListQuery::new()).unwrap();
    assert_eq!(total, 0);
    assert!(banners.is_empty());
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    assert!(banner_board::db::run_migrations(&test_db.pool()).is_ok());
}
