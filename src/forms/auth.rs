//! Registration and login forms.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::{DisplayName, Login, Password};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
/// Form data for creating an account.
pub struct RegisterForm {
    #[validate(length(min = 4, max = 32, message = "display name must be 4-32 characters long"))]
    pub display: String,
    #[validate(length(min = 2, max = 32, message = "login must be 2-32 characters long"))]
    pub login: String,
    #[validate(length(min = 6, max = 64, message = "password must be 6-64 characters long"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
/// Form data for signing in.
pub struct LoginForm {
    #[validate(length(min = 2, max = 32, message = "login must be 2-32 characters long"))]
    pub login: String,
    #[validate(length(min = 6, max = 64, message = "password must be 6-64 characters long"))]
    pub password: String,
}

/// Validated registration data.
pub struct RegisterPayload {
    pub display: DisplayName,
    pub login: Login,
    pub password: Password,
}

/// Validated login data.
pub struct LoginPayload {
    pub login: Login,
    pub password: Password,
}

impl TryFrom<RegisterForm> for RegisterPayload {
    type Error = FormError;

    fn try_from(form: RegisterForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            display: DisplayName::new(form.display)?,
            login: Login::new(form.login)?,
            password: Password::new(form.password)?,
        })
    }
}

impl TryFrom<LoginForm> for LoginPayload {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            login: Login::new(form.login)?,
            password: Password::new(form.password)?,
        })
    }
}
