use crate::core::ingredients::render_cards;
use crate::core::parser::{parse_delimited_rows, parse_json_matrix};
use crate::core::vowels::convert_matrix;
use crate::core::{BrewResult, ConfigProvider, Matrix, Pipeline, Storage};
use crate::utils::error::{BrewError, Result};
use std::time::Duration;

pub struct BrewPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BrewPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn raw_input(&self) -> Result<Option<String>> {
        if let Some(path) = self.config.input_file() {
            tracing::debug!("Reading input from file: {}", path);
            let bytes = self.storage.read_file(path).await?;
            let text = String::from_utf8(bytes).map_err(|_| BrewError::ValidationError {
                message: format!("Input file '{}' is not valid UTF-8", path),
            })?;
            return Ok(Some(text));
        }
        Ok(self.config.json_text().map(str::to_string))
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BrewPipeline<S, C> {
    async fn extract(&self) -> Result<Matrix> {
        match self.config.input_format() {
            "json" => {
                let text = self
                    .raw_input()
                    .await?
                    .ok_or_else(|| BrewError::MissingConfigError {
                        field: "json".to_string(),
                    })?;
                parse_json_matrix(&text)
            }
            _ => {
                let lines: Vec<String> = match self.raw_input().await? {
                    Some(text) => text.lines().map(str::to_string).collect(),
                    None => self.config.rows().to_vec(),
                };

                if lines.is_empty() {
                    tracing::warn!("No input rows given, using the sample blends");
                    return parse_delimited_rows(&[
                        "97,98,99".to_string(),
                        "100,101,102".to_string(),
                    ]);
                }

                parse_delimited_rows(&lines)
            }
        }
    }

    async fn transform(&self, matrix: Matrix) -> Result<BrewResult> {
        let delay_ms = self.config.brew_delay_ms();
        if delay_ms > 0 {
            // Cosmetic only; has no effect on the conversion.
            tracing::debug!("Brewing for {}ms", delay_ms);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let converted = convert_matrix(&matrix);
        let json_output = serde_json::to_string_pretty(&converted)?;
        let card_output = render_cards(&converted);

        Ok(BrewResult {
            converted,
            json_output,
            card_output,
        })
    }

    async fn load(&self, result: BrewResult) -> Result<String> {
        match self.config.output_format() {
            "cards" => println!("{}", result.card_output),
            _ => println!("{}", result.json_output),
        }

        if let Some(path) = self.config.output_path() {
            self.storage
                .write_file(path, result.json_output.as_bytes())
                .await?;
            return Ok(path.to_string());
        }

        Ok("stdout".to_string())
    }
}
