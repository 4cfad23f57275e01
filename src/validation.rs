//! Field invariants checked when a payload value is assigned onto an entity.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub fn image(path: String) -> ValidationResult<String> {
    if !path.ends_with(".jpg") {
        return Err(ValidationError::new("image", "Image must be a .jpg file"));
    }
    Ok(path)
}

/// Required text must be present and contain something besides whitespace.
pub fn required(field: &'static str, value: String) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    Ok(value)
}

/// Nulling a required field through an update is the same failure as omitting it on create.
pub fn required_present(
    field: &'static str,
    value: Option<String>,
) -> ValidationResult<String> {
    match value {
        Some(value) => required(field, value),
        None => Err(ValidationError::new(field, format!("{field} is required"))),
    }
}
