use crate::utils::error::{BucketError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BucketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BucketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A bare file stem: non-empty, no separators, no extension dot.
pub fn validate_base_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains(['/', '\\', '.', '\0']) {
        return Err(BucketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Base name must not contain path separators or dots".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BucketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(BucketError::ValidationError {
            message: format!("{} needs at least one value", field_name),
        });
    }
    Ok(())
}

pub fn validate_same_length<A, B>(
    left_name: &str,
    left: &[A],
    right_name: &str,
    right: &[B],
) -> Result<()> {
    if left.len() != right.len() {
        return Err(BucketError::ValidationError {
            message: format!(
                "the number of {} ({}) doesn't match the number of {} ({})",
                right_name,
                right.len(),
                left_name,
                left.len()
            ),
        });
    }
    Ok(())
}
