pub mod engine;
pub mod ingredients;
pub mod parser;
pub mod vowels;

pub use crate::domain::model::{BrewResult, Matrix, Row};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
