//! Header resolution: maps human-entered column titles to known columns.
//!
//! Editors title columns in Japanese or English, with several spellings
//! each. Every [`Column`] carries a fixed alias list, and a header cell
//! matches when it folds (see [`navi_types::fold`]) to the same text as
//! one of the aliases.
//!
//! There is only this liberal matcher. Exact-title matching is not
//! supported.

use navi_types::fold;

const COLUMN_COUNT: usize = 11;

/// A field of the venue sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Address,
    Area,
    Lat,
    Lng,
    Nursing,
    Diaper,
    Stroller,
    Playground,
    Hours,
    Tips,
}

impl Column {
    /// Every column, in sheet-field order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Name,
        Column::Address,
        Column::Area,
        Column::Lat,
        Column::Lng,
        Column::Nursing,
        Column::Diaper,
        Column::Stroller,
        Column::Playground,
        Column::Hours,
        Column::Tips,
    ];

    /// Header spellings recognized for this column, in priority order.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Name => &["名前", "施設名", "スポット名", "名称", "name", "title"],
            Column::Address => &["住所", "所在地", "address", "location"],
            Column::Area => &["エリア", "地域", "区", "エリア名", "area"],
            Column::Lat => &["緯度", "lat", "latitude"],
            Column::Lng => &["経度", "lng", "longitude"],
            Column::Nursing => &["授乳室", "授乳", "nursing", "nursing room"],
            Column::Diaper => &[
                "おむつ替え",
                "オムツ替え",
                "オムツ交換",
                "おむつ交換",
                "diaper",
                "changing table",
            ],
            Column::Stroller => &[
                "ベビーカー貸出",
                "ベビーカー",
                "ベビーカーの貸し出し",
                "stroller",
                "stroller rental",
            ],
            Column::Playground => &["遊び場", "キッズスペース", "プレイエリア", "playground", "kids area"],
            Column::Hours => &["営業時間", "時間", "hours", "opening hours"],
            Column::Tips => &["メモ", "備考", "ポイント", "tips", "note"],
        }
    }

    /// Canonical English field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Address => "address",
            Column::Area => "area",
            Column::Lat => "lat",
            Column::Lng => "lng",
            Column::Nursing => "nursing",
            Column::Diaper => "diaper",
            Column::Stroller => "stroller",
            Column::Playground => "playground",
            Column::Hours => "hours",
            Column::Tips => "tips",
        }
    }

    fn slot(&self) -> usize {
        *self as usize
    }
}

/// Resolved position of every [`Column`] within a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; COLUMN_COUNT],
}

impl ColumnMap {
    /// Resolve column positions from a header row.
    ///
    /// Aliases are tried in priority order; for each alias the first
    /// matching header cell wins. Columns with no matching cell resolve to
    /// `None`. Never fails.
    pub fn resolve(header: &[String]) -> Self {
        let folded: Vec<String> = header.iter().map(|h| fold(h)).collect();
        let mut map = Self::default();

        for column in Column::ALL {
            map.indices[column.slot()] = column.aliases().iter().find_map(|alias| {
                let alias = fold(alias);
                folded.iter().position(|h| *h == alias)
            });
        }

        map
    }

    /// Position of `column` in the header, if resolved.
    #[inline]
    pub fn index(&self, column: Column) -> Option<usize> {
        self.indices[column.slot()]
    }

    /// The raw cell for `column` in `row`.
    ///
    /// Returns `""` when the column is unresolved or the row is too short.
    pub fn cell<'r>(&self, row: &'r [String], column: Column) -> &'r str {
        self.index(column)
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Columns that no header cell matched.
    pub fn missing(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.index(*c).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_english() {
        let map = ColumnMap::resolve(&header(&["Name", "Address", "Area", "Latitude", "Longitude"]));
        assert_eq!(map.index(Column::Name), Some(0));
        assert_eq!(map.index(Column::Address), Some(1));
        assert_eq!(map.index(Column::Area), Some(2));
        assert_eq!(map.index(Column::Lat), Some(3));
        assert_eq!(map.index(Column::Lng), Some(4));
        assert_eq!(map.index(Column::Tips), None);
    }

    #[test]
    fn test_resolve_japanese_with_fullwidth_space() {
        let map = ColumnMap::resolve(&header(&["　施設名　", "授乳室", "おむつ交換", "遊び場"]));
        assert_eq!(map.index(Column::Name), Some(0));
        assert_eq!(map.index(Column::Nursing), Some(1));
        assert_eq!(map.index(Column::Diaper), Some(2));
        assert_eq!(map.index(Column::Playground), Some(3));
    }

    #[test]
    fn test_multiword_alias() {
        let map = ColumnMap::resolve(&header(&["Stroller Rental", "Opening Hours", "Kids Area"]));
        assert_eq!(map.index(Column::Stroller), Some(0));
        assert_eq!(map.index(Column::Hours), Some(1));
        assert_eq!(map.index(Column::Playground), Some(2));
    }

    #[test]
    fn test_duplicate_header_first_wins() {
        let map = ColumnMap::resolve(&header(&["name", "area", "name"]));
        assert_eq!(map.index(Column::Name), Some(0));
    }

    #[test]
    fn test_alias_priority_beats_position() {
        // "名前" is listed before "title", so it wins even though it comes later.
        let map = ColumnMap::resolve(&header(&["title", "名前"]));
        assert_eq!(map.index(Column::Name), Some(1));
    }

    #[test]
    fn test_cell_out_of_range() {
        let map = ColumnMap::resolve(&header(&["name", "area", "tips"]));
        let row = header(&["Mall"]);
        assert_eq!(map.cell(&row, Column::Name), "Mall");
        assert_eq!(map.cell(&row, Column::Tips), "");
        assert_eq!(map.cell(&row, Column::Hours), "");
    }

    #[test]
    fn test_missing() {
        let map = ColumnMap::resolve(&header(&["name"]));
        let missing = map.missing();
        assert_eq!(missing.len(), Column::ALL.len() - 1);
        assert!(!missing.contains(&Column::Name));
    }

    #[test]
    fn test_empty_header() {
        let map = ColumnMap::resolve(&[]);
        assert_eq!(map.missing().len(), Column::ALL.len());
    }
}
