use crate::utils::error::{FilterError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifier cannot be empty".to_string(),
        });
    }

    if value.chars().any(char::is_whitespace) {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifier cannot contain whitespace".to_string(),
        });
    }

    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.to_ascii_lowercase()) {
            return Err(FilterError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate identifier".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_non_negative_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FilterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a non-negative amount".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier_rejects_empty_and_whitespace() {
        assert!(validate_identifier("checkbox", "vegan").is_ok());
        assert!(validate_identifier("checkbox", "").is_err());
        assert!(validate_identifier("checkbox", "gluten free").is_err());
    }

    #[test]
    fn test_validate_unique_ids_is_case_insensitive() {
        assert!(validate_unique_ids("checkboxes", ["vegan", "quick"]).is_ok());
        assert!(validate_unique_ids("checkboxes", ["vegan", "VEGAN"]).is_err());
    }

    #[test]
    fn test_validate_non_negative_price() {
        assert!(validate_non_negative_price("price", 0.0).is_ok());
        assert!(validate_non_negative_price("price", 5.50).is_ok());
        assert!(validate_non_negative_price("price", -1.0).is_err());
        assert!(validate_non_negative_price("price", f64::NAN).is_err());
    }
}
