use super::ValidationError;

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let trimmed = username.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::UsernameEmpty);
    }

    // Cap counts characters, not bytes, so multibyte names get the full 32
    if trimmed.chars().count() > 32 {
        return Err(ValidationError::UsernameTooLong);
    }

    Ok(())
}
