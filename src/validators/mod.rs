pub mod password;
pub mod title;
pub mod username;

pub use password::validate_password;
pub use title::validate_title;
pub use username::validate_username;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    UsernameEmpty,
    UsernameTooLong,
    PasswordEmpty,
    PasswordTooShort,
    PasswordTooLong,
    TitleEmpty,
    TitleTooLong,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameEmpty => write!(f, "Username cannot be empty"),
            Self::UsernameTooLong => write!(f, "Username is too long (max 32 characters)"),
            Self::PasswordEmpty => write!(f, "Password cannot be empty"),
            Self::PasswordTooShort => write!(f, "Password must be at least 8 characters"),
            Self::PasswordTooLong => write!(f, "Password is too long (max 128 characters)"),
            Self::TitleEmpty => write!(f, "Title cannot be empty"),
            Self::TitleTooLong => write!(f, "Title is too long (max 200 characters)"),
        }
    }
}

impl std::error::Error for ValidationError {}
