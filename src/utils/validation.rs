use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_single_token(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConvertError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ConvertError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("headings.name", "Name").is_ok());
        assert!(validate_non_empty_string("headings.name", "   ").is_err());
    }

    #[test]
    fn test_validate_single_token() {
        assert!(validate_single_token("layout.vlan_column_width", "3em").is_ok());
        assert!(validate_single_token("layout.vlan_column_width", "3 em").is_err());
        assert!(validate_single_token("layout.vlan_column_width", "").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("vlan id", 1u32, 1, 4094).is_ok());
        assert!(validate_range("vlan id", 4094u32, 1, 4094).is_ok());
        assert!(validate_range("vlan id", 0u32, 1, 4094).is_err());
        assert!(validate_range("vlan id", 4095u32, 1, 4094).is_err());
    }
}
