//! Maps tokenized rows to venue records.

use crate::error::SheetError;
use crate::header::{Column, ColumnMap};
use crate::normalize::{is_affirmative, optional_text, parse_coordinate, parse_playground, text_or};
use crate::tokenizer::tokenize;
use navi_types::{VenueRecord, DEFAULT_AREA};
use std::collections::HashSet;

/// Slug base for names without any ASCII letters or digits.
const FALLBACK_SLUG: &str = "spot";

/// Derive the slug base for a venue name.
///
/// Lower-cases the name, collapses every run of characters outside
/// `[a-z0-9]` into one `-`, and trims leading and trailing `-`. Names with
/// no ASCII alphanumerics (e.g. written only in Japanese) produce `"spot"`.
///
/// # Example
///
/// ```rust
/// use navi_sheet::slugify;
///
/// assert_eq!(slugify("Central World (3F)"), "central-world-3f");
/// assert_eq!(slugify("アイコンサイアム"), "spot");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Hands out unique slugs within one list.
///
/// The first venue with a given base keeps it. Later ones get `-2`, `-3`
/// and so on, skipping any suffix already taken. Allocation depends only
/// on the order of calls, so a sheet parses to the same slugs every time.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    taken: HashSet<String>,
}

impl SlugAllocator {
    /// Create an empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique slug for `name`.
    pub fn allocate(&mut self, name: &str) -> String {
        let base = slugify(name);
        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.taken.insert(candidate.clone()) {
                tracing::debug!("Slug collision for {:?}, using {}", name, candidate);
                return candidate;
            }
            n += 1;
        }
    }
}

/// Convert tokenized rows into venue records.
///
/// Row 0 is the header. Data rows keep their sheet order. Rows whose name
/// is blank are dropped before a slug is assigned.
pub fn map_rows(rows: &[Vec<String>]) -> Vec<VenueRecord> {
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };

    let columns = ColumnMap::resolve(header);
    let missing = columns.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(Column::as_str).collect();
        tracing::debug!("Unresolved sheet columns: {}", names.join(", "));
    }

    let mut slugs = SlugAllocator::new();
    let mut venues = Vec::with_capacity(data.len());

    for (i, row) in data.iter().enumerate() {
        let name = columns.cell(row, Column::Name).trim();
        if name.is_empty() {
            tracing::trace!("Skipping data row {} without a name", i + 1);
            continue;
        }

        venues.push(VenueRecord {
            slug: slugs.allocate(name),
            name: name.to_string(),
            address: columns.cell(row, Column::Address).trim().to_string(),
            area: text_or(columns.cell(row, Column::Area), DEFAULT_AREA),
            lat: parse_coordinate(columns.cell(row, Column::Lat)),
            lng: parse_coordinate(columns.cell(row, Column::Lng)),
            nursing: is_affirmative(columns.cell(row, Column::Nursing)),
            diaper: is_affirmative(columns.cell(row, Column::Diaper)),
            stroller: is_affirmative(columns.cell(row, Column::Stroller)),
            playground: parse_playground(columns.cell(row, Column::Playground)),
            hours: optional_text(columns.cell(row, Column::Hours)),
            tips: optional_text(columns.cell(row, Column::Tips)),
        });
    }

    venues
}

/// Tokenize and map a sheet export in one step.
pub fn parse_venues(text: &str) -> Result<Vec<VenueRecord>, SheetError> {
    let rows = tokenize(text)?;
    let venues = map_rows(&rows);
    tracing::info!(
        "Parsed {} venues from {} data rows",
        venues.len(),
        rows.len().saturating_sub(1)
    );
    Ok(venues)
}
