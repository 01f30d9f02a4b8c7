use crate::domain::model::Matrix;
use serde_json::Value;

/// The fixed code table. Exactly these five keys exist; the table never
/// changes at runtime.
pub const VOWEL_CODES: [(i64, char); 5] = [
    (97, 'a'),
    (101, 'e'),
    (105, 'i'),
    (111, 'o'),
    (117, 'u'),
];

/// Look up the vowel for an ASCII code. Total over all integers.
pub fn vowel_of(code: i64) -> Option<char> {
    match code {
        97 => Some('a'),
        101 => Some('e'),
        105 => Some('i'),
        111 => Some('o'),
        117 => Some('u'),
        _ => None,
    }
}

/// Elementwise conversion: integer cells matching a vowel code become the
/// vowel as a one-character string, every other cell is kept unchanged.
/// Pure and total; row and cell order is preserved exactly.
pub fn convert_matrix(matrix: &Matrix) -> Matrix {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.as_i64().and_then(vowel_of) {
                    Some(vowel) => Value::String(vowel.to_string()),
                    None => cell.clone(),
                })
                .collect()
        })
        .collect()
}
