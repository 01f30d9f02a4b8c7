use crate::domain::model::{BrewResult, Matrix};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// "rows" (comma-separated lines) or "json" (a 2D array document).
    fn input_format(&self) -> &str;
    fn rows(&self) -> &[String];
    fn json_text(&self) -> Option<&str>;
    fn input_file(&self) -> Option<&str>;
    /// "json" or "cards".
    fn output_format(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn brew_delay_ms(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Matrix>;
    async fn transform(&self, matrix: Matrix) -> Result<BrewResult>;
    async fn load(&self, result: BrewResult) -> Result<String>;
}
