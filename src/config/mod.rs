pub mod cli;
pub mod toml_config;

use crate::config::toml_config::BrewTomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "vowel-brew"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Convert matrices of ASCII codes into vowel blends")
)]
pub struct CliConfig {
    /// A comma-separated row of integer codes; repeat for each matrix row
    #[cfg_attr(feature = "cli", arg(long = "row"))]
    pub rows: Vec<String>,

    /// A JSON 2D array of codes, e.g. '[[97,101],[105,111]]'
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: Option<String>,

    /// Read the input from a file instead of the command line
    #[cfg_attr(feature = "cli", arg(long))]
    pub input_file: Option<String>,

    /// Input format when reading from a file: rows | json
    #[cfg_attr(feature = "cli", arg(long, default_value = "rows"))]
    pub input_format: String,

    /// Output rendering: json | cards (default json)
    #[cfg_attr(feature = "cli", arg(long))]
    pub format: Option<String>,

    /// Also write the converted matrix as JSON to this path
    #[cfg_attr(feature = "cli", arg(long))]
    pub output: Option<String>,

    /// Cosmetic brewing delay in milliseconds (default 0)
    #[cfg_attr(feature = "cli", arg(long))]
    pub brew_delay_ms: Option<u64>,

    /// Print the ingredient gallery and exit
    #[cfg_attr(feature = "cli", arg(long))]
    pub ingredients: bool,

    /// Load settings from a TOML configuration file instead
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(long))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_format(&self) -> &str {
        // An inline JSON document always wins over the declared format.
        if self.json.is_some() {
            "json"
        } else {
            &self.input_format
        }
    }

    fn rows(&self) -> &[String] {
        &self.rows
    }

    fn json_text(&self) -> Option<&str> {
        self.json.as_deref()
    }

    fn input_file(&self) -> Option<&str> {
        self.input_file.as_deref()
    }

    fn output_format(&self) -> &str {
        self.format.as_deref().unwrap_or("json")
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn brew_delay_ms(&self) -> u64 {
        self.brew_delay_ms.unwrap_or(0)
    }
}

impl CliConfig {
    /// Apply the explicitly given command-line values on top of a file-based
    /// configuration, so flags win over the TOML file.
    pub fn apply_overrides(&self, config: &mut BrewTomlConfig) {
        if let Some(format) = &self.format {
            config.output.get_or_insert_with(Default::default).format = Some(format.clone());
            tracing::info!("🔧 Output format overridden to: {}", format);
        }
        if let Some(path) = &self.output {
            config.output.get_or_insert_with(Default::default).path = Some(path.clone());
            tracing::info!("🔧 Output path overridden to: {}", path);
        }
        if let Some(delay) = self.brew_delay_ms {
            config.brew.get_or_insert_with(Default::default).delay_ms = Some(delay);
            tracing::info!("🔧 Brew delay overridden to: {}ms", delay);
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_input_format("input_format", &self.input_format)?;
        if let Some(format) = &self.format {
            validation::validate_output_format("format", format)?;
        }
        if let Some(delay) = self.brew_delay_ms {
            validation::validate_range("brew_delay_ms", delay, 0, 60_000)?;
        }

        if let Some(path) = &self.input_file {
            validation::validate_path("input_file", path)?;
        }
        if let Some(path) = &self.output {
            validation::validate_path("output", path)?;
        }
        if let Some(json) = &self.json {
            validation::validate_non_empty_string("json", json)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            rows: vec!["97,98".to_string()],
            json: None,
            input_file: None,
            input_format: "rows".to_string(),
            format: None,
            output: None,
            brew_delay_ms: None,
            ingredients: false,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_formats() {
        let mut config = base_config();
        config.format = Some("xml".to_string());
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.input_format = "csv".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_flags_override_toml_config() {
        let mut toml_config = BrewTomlConfig::from_toml_str(
            r#"
[brew]
delay_ms = 800

[output]
format = "json"
"#,
        )
        .unwrap();

        let mut cli = base_config();
        cli.format = Some("cards".to_string());
        cli.output = Some("blend.json".to_string());
        cli.brew_delay_ms = Some(250);

        cli.apply_overrides(&mut toml_config);

        assert_eq!(toml_config.output_format(), "cards");
        assert_eq!(toml_config.output_path(), Some("blend.json"));
        assert_eq!(toml_config.brew_delay_ms(), 250);
    }

    #[test]
    fn test_unset_cli_flags_leave_toml_config_alone() {
        let mut toml_config = BrewTomlConfig::from_toml_str(
            r#"
[brew]
delay_ms = 800

[output]
format = "cards"
path = "blend.json"
"#,
        )
        .unwrap();

        base_config().apply_overrides(&mut toml_config);

        assert_eq!(toml_config.output_format(), "cards");
        assert_eq!(toml_config.output_path(), Some("blend.json"));
        assert_eq!(toml_config.brew_delay_ms(), 800);
    }

    #[test]
    fn test_inline_json_overrides_input_format() {
        let mut config = base_config();
        config.json = Some("[[97]]".to_string());
        assert_eq!(ConfigProvider::input_format(&config), "json");
    }
}
