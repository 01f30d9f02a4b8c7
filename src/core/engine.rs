use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct BrewEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BrewEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting brew process...");

        tracing::info!("Reading mystic codes...");
        let matrix = self.pipeline.extract().await?;
        tracing::info!("Read {} rows", matrix.len());

        tracing::info!("Deciphering the blend...");
        let result = self.pipeline.transform(matrix).await?;
        tracing::info!("Converted {} rows", result.converted.len());

        tracing::info!("Serving the result...");
        let destination = self.pipeline.load(result).await?;
        tracing::info!("Output served to: {}", destination);

        Ok(destination)
    }
}
