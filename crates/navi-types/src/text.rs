//! Text folding for loosely typed spreadsheet input.

/// Ideographic (full-width) space.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Offset between the full-width ASCII block (U+FF01..=U+FF5E) and ASCII.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Fold a cell or header for comparison.
///
/// Full-width spaces and full-width ASCII forms become their ASCII
/// counterparts, then the result is trimmed and lower-cased. Headers,
/// aliases, tokens and area names all go through this one function so
/// that they compare equal under the same rules.
///
/// # Example
///
/// ```rust
/// use navi_types::fold;
///
/// assert_eq!(fold(" Nursing　Room "), "nursing room");
/// assert_eq!(fold("ＯＫ"), "ok");
/// ```
pub fn fold(s: &str) -> String {
    let widened: String = s.chars().map(narrow).collect();
    widened.trim().to_lowercase()
}

fn narrow(c: char) -> char {
    match c {
        IDEOGRAPHIC_SPACE => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}
