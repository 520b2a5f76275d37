//! Hex code to human color-name lookup.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use tone_match::HexColor;

use crate::error::CatalogError;

const NAME_COLUMN: &str = "Name";
const HEX_COLUMN: &str = "Hex (24 bit)";

/// Human-readable names keyed by canonical hex color.
///
/// One hex code may carry several names ("Navy", "Navy Blue").
#[derive(Debug, Clone, Default)]
pub struct ColorNameTable {
    names: HashMap<HexColor, Vec<String>>,
}

impl ColorNameTable {
    /// Load from CSV with `Name` and `Hex (24 bit)` columns.
    ///
    /// Rows with an empty name or an unparsable hex code are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(CatalogError::MissingColumn(name))
        };
        let name_idx = column(NAME_COLUMN)?;
        let hex_idx = column(HEX_COLUMN)?;

        let mut table = Self::default();
        let mut skipped = 0usize;
        for (row_no, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(row = row_no + 1, %e, "Skipping unreadable color-name row");
                    skipped += 1;
                    continue;
                }
            };
            let name = record.get(name_idx).unwrap_or("").trim();
            let hex = record.get(hex_idx).unwrap_or("");

            if name.is_empty() {
                tracing::warn!(row = row_no + 1, "Skipping color-name row without a name");
                skipped += 1;
                continue;
            }
            match hex.parse::<HexColor>() {
                Ok(hex) => table.insert(hex, name),
                Err(e) => {
                    tracing::warn!(row = row_no + 1, hex, %e, "Skipping color-name row");
                    skipped += 1;
                }
            }
        }

        tracing::debug!(colors = table.len(), skipped, "Loaded color-name table");
        Ok(table)
    }

    pub fn from_csv_bytes(data: &[u8]) -> Result<Self, CatalogError> {
        Self::from_reader(data)
    }

    /// Add a name for a hex code.
    pub fn insert(&mut self, hex: HexColor, name: impl Into<String>) {
        let name = name.into();
        if name.trim().is_empty() {
            return;
        }
        let names = self.names.entry(hex).or_default();
        if !names.contains(&name) {
            names.push(name);
        }
    }

    /// Names for one hex code, in file order.
    pub fn names_for(&self, hex: &HexColor) -> &[String] {
        self.names.get(hex).map(Vec::as_slice).unwrap_or_default()
    }

    /// Resolve a palette to the union of its names.
    ///
    /// Order follows the palette, then file order; duplicates are dropped.
    /// Hex codes with no names contribute nothing.
    pub fn resolve(&self, palette: &[HexColor]) -> Vec<&str> {
        let mut seen = HashSet::new();
        palette
            .iter()
            .flat_map(|hex| self.names_for(hex))
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Number of distinct hex codes with at least one name
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(HexColor, N)> for ColorNameTable {
    fn from_iter<I: IntoIterator<Item = (HexColor, N)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (hex, name) in iter {
            table.insert(hex, name);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    const CSV: &str = "\
Name,Hex (24 bit),Red (8 bit),Green (8 bit),Blue (8 bit)
Navy,#000080,0,0,128
Navy Blue,#000080,0,0,128
Gold,#ffd700,255,215,0
,#FF0000,255,0,0
Broken,#12345,0,0,0
Crimson,#DC143C,220,20,60
";

    #[test]
    fn test_load_skips_bad_rows() {
        let table = ColorNameTable::from_csv_bytes(CSV.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.names_for(&hex("#000080")), ["Navy", "Navy Blue"]);
        assert_eq!(table.names_for(&hex("#FFD700")), ["Gold"]);
        assert!(table.names_for(&hex("#FF0000")).is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = ColorNameTable::from_csv_bytes(b"Name,Hex\nNavy,#000080\n").unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn("Hex (24 bit)")));
    }

    #[test]
    fn test_resolve_keeps_first_seen_order() {
        let table = ColorNameTable::from_csv_bytes(CSV.as_bytes()).unwrap();
        let palette = [hex("#DC143C"), hex("#000080"), hex("#ABCDEF"), hex("#DC143C")];

        assert_eq!(table.resolve(&palette), vec!["Crimson", "Navy", "Navy Blue"]);
    }

    #[test]
    fn test_resolve_dedups_names_across_codes() {
        let table: ColorNameTable = [
            (hex("#000080"), "Navy"),
            (hex("#000081"), "Navy"),
            (hex("#000081"), ""),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.resolve(&[hex("#000080"), hex("#000081")]), vec!["Navy"]);
    }

    #[test]
    fn test_resolve_empty() {
        let table = ColorNameTable::default();
        assert!(table.is_empty());
        assert!(table.resolve(&[hex("#000080")]).is_empty());
    }
}
