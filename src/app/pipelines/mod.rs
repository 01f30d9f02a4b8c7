pub mod brew_pipeline;
