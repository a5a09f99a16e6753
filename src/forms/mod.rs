//! Request bodies accepted by the HTML forms and the JSON API.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod banner;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("{}", describe(.0))]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),
}

/// Joins the messages of every failed field, ordered by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("invalid {field}"),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
