use crate::utils::error::{BrewError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BrewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BrewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BrewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
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
        return Err(BrewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_input_format(field_name: &str, format: &str) -> Result<()> {
    let valid_formats = ["rows", "json"];
    if !valid_formats.contains(&format) {
        return Err(BrewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported input format. Valid formats: {}",
                valid_formats.join(", ")
            ),
        });
    }
    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    let valid_formats = ["json", "cards"];
    if !valid_formats.contains(&format) {
        return Err(BrewError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported output format. Valid formats: {}",
                valid_formats.join(", ")
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "./result.json").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("brew_delay_ms", 800u64, 0, 10_000).is_ok());
        assert!(validate_range("brew_delay_ms", 60_000u64, 0, 10_000).is_err());
    }

    #[test]
    fn test_validate_input_format() {
        assert!(validate_input_format("input_format", "rows").is_ok());
        assert!(validate_input_format("input_format", "json").is_ok());
        assert!(validate_input_format("input_format", "csv").is_err());
    }

    #[test]
    fn test_validate_output_format() {
        assert!(validate_output_format("format", "json").is_ok());
        assert!(validate_output_format("format", "cards").is_ok());
        assert!(validate_output_format("format", "yaml").is_err());
    }
}
