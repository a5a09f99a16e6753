//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers trim their input and enforce the length and format rules of
//! the board, so that once a value reaches the domain layer it can be treated
//! as trusted.
use std::fmt::{Debug, Display, Formatter};

use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Provided string is shorter or longer than allowed.
    #[error("{field} must be {min}-{max} characters long")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
    },
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Trims `value` and checks its length in characters.
fn bounded(
    value: String,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim().to_string();
    let len = trimmed.chars().count();
    if len == 0 && min > 0 {
        return Err(TypeConstraintError::EmptyString(field));
    }
    if len < min || len > max {
        return Err(TypeConstraintError::InvalidLength { field, min, max });
    }
    Ok(trimmed)
}

/// Macro to generate trimmed, length-bounded string newtypes.
macro_rules! bounded_string {
    ($name:ident, $field:expr, $min:expr, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Smallest accepted length in characters.
            pub const MIN_LEN: usize = $min;
            /// Largest accepted length in characters.
            pub const MAX_LEN: usize = $max;

            /// Trims and validates the value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                bounded(value.into(), $field, Self::MIN_LEN, Self::MAX_LEN).map(Self)
            }

            /// Borrow the value as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the owned inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_string!(
    DisplayName,
    "display name",
    4,
    32,
    "Public name shown as the author of banners."
);
bounded_string!(Login, "login", 2, 32, "Account login used to sign in.");
bounded_string!(BannerTitle, "title", 2, 128, "Unique banner headline.");
bounded_string!(
    BannerDescription,
    "description",
    0,
    256,
    "Free-form banner text, may be empty."
);

/// Plain-text password as submitted by the user. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LEN: usize = 6;
    pub const MAX_LEN: usize = 64;

    /// Validates the length without trimming: whitespace is significant.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let len = value.chars().count();
        if len < Self::MIN_LEN || len > Self::MAX_LEN {
            return Err(TypeConstraintError::InvalidLength {
                field: "password",
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Absolute link target of a banner. Defaults to `https://` when no scheme is given.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BannerUrl(String);

impl BannerUrl {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString("url"));
        }
        let url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed
        } else {
            format!("https://{trimmed}")
        };
        if !url.validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for BannerUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for BannerUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
