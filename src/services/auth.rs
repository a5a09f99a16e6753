//! Account registration and sign-in.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::domain::types::Password;
use crate::domain::user::{NewUser, User};
use crate::forms::auth::{LoginForm, LoginPayload, RegisterForm, RegisterPayload};
use crate::models::auth::issue_token;
use crate::models::config::ServerConfig;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Signed-in account together with its fresh session token.
#[derive(Debug)]
pub struct Session {
    pub user: User,
    pub token: String,
}

fn hash_password(password: &Password) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_str().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            log::error!("Failed to hash password: {err}");
            ServiceError::Internal("failed to encrypt the password".to_string())
        })
}

fn verify_password(password: &Password, stored: &str) -> bool {
    PasswordHash::new(stored).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_str().as_bytes(), &parsed)
            .is_ok()
    })
}

/// Validates the form, rejects taken names and stores the new account.
///
/// The display name is checked before the login, so a request colliding on
/// both reports the display name.
pub fn register<R>(repo: &R, form: RegisterForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    let payload = RegisterPayload::try_from(form)?;

    if repo.display_exists(&payload.display)? {
        return Err(ServiceError::Conflict(
            "display name already exists".to_string(),
        ));
    }
    if repo.login_exists(&payload.login)? {
        return Err(ServiceError::Conflict("login already exists".to_string()));
    }

    let new_user = NewUser {
        display: payload.display,
        login: payload.login,
        password_hash: hash_password(&payload.password)?,
    };

    let user = repo.create_user(&new_user).map_err(|err| {
        log::error!("Failed to store user: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Registered user {}", user.login);
    Ok(user)
}

/// Checks the password and issues a session token.
pub fn login<R>(repo: &R, form: LoginForm, config: &ServerConfig) -> ServiceResult<Session>
where
    R: UserReader + ?Sized,
{
    let payload = LoginPayload::try_from(form)?;

    let user = repo
        .get_user_by_login(&payload.login)?
        .ok_or_else(|| ServiceError::Credentials("user not exists".to_string()))?;

    if !verify_password(&payload.password, &user.password_hash) {
        log::warn!("Failed login attempt for {}", user.login);
        return Err(ServiceError::Credentials("failed to login".to_string()));
    }

    let token = issue_token(
        &user.display,
        &user.login,
        &config.secret,
        config.token_ttl_hours,
    )
    .map_err(|err| {
        log::error!("Failed to issue token: {err}");
        ServiceError::Internal("could not create a token".to_string())
    })?;

    Ok(Session { user, token })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::models::auth::decode_token;
    use crate::repository::mock::MockRepository;

    fn config() -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 0,
            database_url: ":memory:".to_string(),
            templates_dir: "templates/**/*".to_string(),
            secret: "k".repeat(64),
            per_page: 9,
            token_ttl_hours: 1,
            cookie_secure: false,
        }
    }

    fn register_form() -> RegisterForm {
        RegisterForm {
            display: "Alice".to_string(),
            login: "alice".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn stored_user(password: &str) -> User {
        User {
            id: 1,
            display: "Alice".to_string(),
            login: "alice".to_string(),
            password_hash: hash_password(&Password::new(password).unwrap()).unwrap(),
        }
    }

    #[test]
    fn register_rejects_taken_display_name_first() {
        let mut repo = MockRepository::new();
        repo.expect_display_exists().times(1).returning(|_| Ok(true));
        repo.expect_login_exists().times(0);
        repo.expect_create_user().times(0);

        let result = register(&repo, register_form());

        assert!(
            matches!(result, Err(ServiceError::Conflict(message)) if message == "display name already exists")
        );
    }

    #[test]
    fn register_rejects_taken_login() {
        let mut repo = MockRepository::new();
        repo.expect_display_exists().returning(|_| Ok(false));
        repo.expect_login_exists().times(1).returning(|_| Ok(true));
        repo.expect_create_user().times(0);

        let result = register(&repo, register_form());

        assert!(
            matches!(result, Err(ServiceError::Conflict(message)) if message == "login already exists")
        );
    }

    #[test]
    fn register_stores_hashed_password() {
        let mut repo = MockRepository::new();
        repo.expect_display_exists().returning(|_| Ok(false));
        repo.expect_login_exists().returning(|_| Ok(false));
        repo.expect_create_user()
            .withf(|user| {
                user.display.as_str() == "Alice"
                    && user.password_hash.starts_with("$argon2")
                    && !user.password_hash.contains("secret1")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: 7,
                    display: user.display.to_string(),
                    login: user.login.to_string(),
                    password_hash: user.password_hash.clone(),
                })
            });

        let user = register(&repo, register_form()).expect("should register");

        assert_eq!(user.id, 7);
    }

    #[test]
    fn register_validates_before_touching_repository() {
        let repo = MockRepository::new();
        let form = RegisterForm {
            display: "Al".to_string(),
            ..register_form()
        };

        let result = register(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn login_issues_token_for_valid_password() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_login()
            .returning(|_| Ok(Some(stored_user("secret1"))));
        let form = LoginForm {
            login: "alice".to_string(),
            password: "secret1".to_string(),
        };

        let session = login(&repo, form, &config()).expect("should log in");

        let claims = decode_token(&session.token, &config().secret).unwrap();
        assert_eq!(claims.display, "Alice");
        assert_eq!(claims.login, "alice");
    }

    #[test]
    fn login_rejects_wrong_password() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_login()
            .returning(|_| Ok(Some(stored_user("secret1"))));
        let form = LoginForm {
            login: "alice".to_string(),
            password: "wrong-password".to_string(),
        };

        let result = login(&repo, form, &config());

        assert!(
            matches!(result, Err(ServiceError::Credentials(message)) if message == "failed to login")
        );
    }

    #[test]
    fn login_rejects_unknown_user() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_login().returning(|_| Ok(None));
        let form = LoginForm {
            login: "nobody".to_string(),
            password: "secret1".to_string(),
        };

        let result = login(&repo, form, &config());

        assert!(
            matches!(result, Err(ServiceError::Credentials(message)) if message == "user not exists")
        );
    }
}
