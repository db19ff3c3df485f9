use crate::utils::error::{Result, RiderError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RiderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RiderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RiderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RiderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Coordinate must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_nonzero_step(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value == 0.0 {
        return Err(RiderError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Step must be non-zero so same-role elements can spread out".to_string(),
        });
    }
    Ok(())
}
