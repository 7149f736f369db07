use super::ValidationError;

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::TitleEmpty);
    }

    if trimmed.len() > 200 {
        return Err(ValidationError::TitleTooLong);
    }

    Ok(())
}
