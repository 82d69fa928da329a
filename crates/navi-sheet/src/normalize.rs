//! Cell value normalization.
//!
//! The sheet is edited by hand in two languages, so every conversion here
//! is lenient: a missing or malformed cell degrades to a default instead
//! of rejecting the row.

use navi_types::{fold, Playground};

/// Tokens read as "yes" in boolean columns (compared after folding).
const AFFIRMATIVE: &[&str] = &[
    "yes", "y", "true", "1", "ok", "あり", "有", "はい", "○", "◯", "可", "可能",
];

const PLAYGROUND_FREE: &[&str] = &["free", "無料", "free(無料)", "no charge"];

const PLAYGROUND_PAID: &[&str] = &["paid", "有料", "charge", "有料あり"];

/// Returns true if the cell holds an affirmative token.
///
/// Anything not in the affirmative set, including an empty cell, is false.
///
/// # Example
///
/// ```rust
/// use navi_sheet::normalize::is_affirmative;
///
/// assert!(is_affirmative(" YES "));
/// assert!(is_affirmative("あり"));
/// assert!(!is_affirmative("no"));
/// ```
pub fn is_affirmative(cell: &str) -> bool {
    let token = fold(cell);
    AFFIRMATIVE.contains(&token.as_str())
}

/// Classify a playground cell. Unrecognized or blank cells are
/// [`Playground::None`].
pub fn parse_playground(cell: &str) -> Playground {
    let token = fold(cell);
    if PLAYGROUND_FREE.contains(&token.as_str()) {
        Playground::Free
    } else if PLAYGROUND_PAID.contains(&token.as_str()) {
        Playground::Paid
    } else {
        Playground::None
    }
}

/// Parse a coordinate cell.
///
/// Everything but ASCII digits, `.` and `-` is stripped before parsing, so
/// `"13.7375 N"` reads as `13.7375`. Unparsable or non-finite results are
/// `0.0`.
pub fn parse_coordinate(cell: &str) -> f64 {
    let digits: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Trimmed text, or `None` when the cell is blank.
pub fn optional_text(cell: &str) -> Option<String> {
    let trimmed = cell.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed text, or `default` when the cell is blank.
pub fn text_or(cell: &str, default: &str) -> String {
    optional_text(cell).unwrap_or_else(|| default.to_string())
}
