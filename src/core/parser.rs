use crate::domain::model::{Matrix, Row};
use crate::utils::error::{BrewError, Result};
use serde_json::Value;

/// Parse one comma-separated line of integer codes into a row.
fn parse_row(line: &str, row_index: usize) -> Result<Row> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    let mut row = Vec::new();
    for record in reader.records() {
        let record = record?;
        for token in record.iter() {
            let code: i64 = token.parse().map_err(|_| BrewError::ValidationError {
                message: format!(
                    "Row {}: '{}' is not a valid integer code",
                    row_index + 1,
                    token
                ),
            })?;
            row.push(Value::from(code));
        }
    }

    Ok(row)
}

/// Delimited input variant: each string is one comma-separated row of
/// integer codes. Fails on the first token that is not an integer; no
/// partial matrix is returned.
pub fn parse_delimited_rows(lines: &[String]) -> Result<Matrix> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_row(line, i))
        .collect()
}

/// JSON input variant: the document must be an array of arrays. Inner cells
/// are taken as-is without per-element validation, matching the permissive
/// behavior of the JSON form.
pub fn parse_json_matrix(text: &str) -> Result<Matrix> {
    let document: Value = serde_json::from_str(text)?;

    let Value::Array(rows) = document else {
        return Err(BrewError::ValidationError {
            message: "JSON input must be a 2D array, e.g. [[97,101],[105,111]]".to_string(),
        });
    };

    let mut matrix = Matrix::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let Value::Array(cells) = row else {
            return Err(BrewError::ValidationError {
                message: format!("Row {} is not an array; JSON input must be a 2D array", i + 1),
            });
        };
        matrix.push(cells);
    }

    Ok(matrix)
}
