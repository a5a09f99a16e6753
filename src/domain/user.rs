use crate::domain::types::{DisplayName, Login};

/// Registered account. `password_hash` is an Argon2 PHC string.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    pub display: String,
    pub login: String,
    pub password_hash: String,
}

/// Account about to be inserted; the password is already hashed.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub display: DisplayName,
    pub login: Login,
    pub password_hash: String,
}
