use crate::core::ConfigProvider;
use crate::utils::error::{BrewError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrewTomlConfig {
    pub brew: Option<BrewSection>,
    pub input: Option<InputSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrewSection {
    pub name: Option<String>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSection {
    pub format: Option<String>,
    pub rows: Option<Vec<String>>,
    pub json: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub path: Option<String>,
}

impl BrewTomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BrewError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BrewError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    pub fn blend_name(&self) -> Option<&str> {
        self.brew.as_ref().and_then(|b| b.name.as_deref())
    }
}

impl ConfigProvider for BrewTomlConfig {
    fn input_format(&self) -> &str {
        if self.json_text().is_some() {
            return "json";
        }
        self.input
            .as_ref()
            .and_then(|i| i.format.as_deref())
            .unwrap_or("rows")
    }

    fn rows(&self) -> &[String] {
        self.input
            .as_ref()
            .and_then(|i| i.rows.as_deref())
            .unwrap_or(&[])
    }

    fn json_text(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.json.as_deref())
    }

    fn input_file(&self) -> Option<&str> {
        self.input.as_ref().and_then(|i| i.file.as_deref())
    }

    fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("json")
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    fn brew_delay_ms(&self) -> u64 {
        self.brew.as_ref().and_then(|b| b.delay_ms).unwrap_or(0)
    }
}

impl Validate for BrewTomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if let Some(format) = &input.format {
                validation::validate_input_format("input.format", format)?;
            }
            if let Some(file) = &input.file {
                validation::validate_path("input.file", file)?;
            }
            if let Some(json) = &input.json {
                validation::validate_non_empty_string("input.json", json)?;
            }
        }

        if let Some(output) = &self.output {
            if let Some(format) = &output.format {
                validation::validate_output_format("output.format", format)?;
            }
            if let Some(path) = &output.path {
                validation::validate_path("output.path", path)?;
            }
        }

        if let Some(brew) = &self.brew {
            if let Some(delay) = brew.delay_ms {
                validation::validate_range("brew.delay_ms", delay, 0, 60_000)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = BrewTomlConfig::from_toml_str(
            r#"
[brew]
name = "fusion-clasica"
delay_ms = 800

[input]
format = "rows"
rows = ["97,101", "105,111"]

[output]
format = "cards"
path = "blend.json"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.blend_name(), Some("fusion-clasica"));
        assert_eq!(config.brew_delay_ms(), 800);
        assert_eq!(config.rows(), ["97,101".to_string(), "105,111".to_string()]);
        assert_eq!(config.output_format(), "cards");
        assert_eq!(config.output_path(), Some("blend.json"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = BrewTomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(ConfigProvider::input_format(&config), "rows");
        assert_eq!(config.output_format(), "json");
        assert_eq!(config.brew_delay_ms(), 0);
        assert!(config.rows().is_empty());
    }

    #[test]
    fn test_inline_json_switches_format() {
        let config = BrewTomlConfig::from_toml_str(
            r#"
[input]
json = "[[97, 101]]"
"#,
        )
        .unwrap();
        assert_eq!(ConfigProvider::input_format(&config), "json");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = BrewTomlConfig::from_toml_str("not valid toml [").unwrap_err();
        assert!(matches!(err, BrewError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_bad_delay_fails_validation() {
        let config = BrewTomlConfig::from_toml_str(
            r#"
[brew]
delay_ms = 120000
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
