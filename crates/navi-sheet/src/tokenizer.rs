//! CSV tokenizer for the raw sheet export.

use crate::error::SheetError;

/// Split raw CSV text into rows of string fields.
///
/// Quoted fields may contain commas and newlines, and `""` inside a quoted
/// field is one literal quote. Rows may have differing lengths. Rows made
/// up only of blank fields are dropped. An unterminated quoted field runs
/// to the end of the input.
///
/// The first row is returned like any other; deciding which row is the
/// header is the caller's job.
///
/// # Example
///
/// ```rust
/// use navi_sheet::tokenize;
///
/// let rows = tokenize("name,tips\nCafe,\"quiet, bright\"\n").unwrap();
/// assert_eq!(rows[1], vec!["Cafe", "quiet, bright"]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Vec<String>>, SheetError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
