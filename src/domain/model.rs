use serde_json::Value;

/// A single matrix row. Cells are JSON values so the JSON input variant can
/// carry non-integer entries, which the converter passes through untouched.
pub type Row = Vec<Value>;

/// Rows are independently sized; jagged matrices are permitted.
pub type Matrix = Vec<Row>;

#[derive(Debug, Clone)]
pub struct BrewResult {
    pub converted: Matrix,
    pub json_output: String,
    pub card_output: String,
}
