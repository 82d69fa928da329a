//! Configuration for the sheet source.
//!
//! # Environment Variables
//!
//! - `NAVI_SHEET_URL`: CSV export URL of the venue sheet
//!   (default: the published Bangkok sheet)
//! - `NAVI_REVALIDATE_SECS`: how long a fetched sheet stays fresh, in
//!   seconds (default: 1800)

use crate::error::SheetError;
use std::env;
use std::time::Duration;
use url::Url;

/// Published CSV export of the Bangkok venue sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1l4lIE1otptR5jsYUR3h8iciGVUBmbnliob_eUHX3N5Y/export?format=csv&gid=2088371623";

/// Default revalidation window (30 minutes).
pub const DEFAULT_REVALIDATE_SECS: u64 = 1800;

const SHEET_URL_VAR: &str = "NAVI_SHEET_URL";
const REVALIDATE_VAR: &str = "NAVI_REVALIDATE_SECS";

/// Where to fetch the sheet from and how long to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// CSV export URL.
    pub source_url: Url,
    /// Revalidation window for the fetched sheet.
    pub revalidate: Duration,
}

impl SheetConfig {
    /// Config for `source_url` with the default revalidation window.
    pub fn new(source_url: Url) -> Self {
        Self {
            source_url,
            revalidate: Duration::from_secs(DEFAULT_REVALIDATE_SECS),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Config`] if `NAVI_SHEET_URL` is set but is
    /// not an http(s) URL.
    pub fn from_env() -> Result<Self, SheetError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables take their defaults. An unparsable revalidation
    /// value is logged and replaced by the default rather than rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SheetError> {
        let source_url = match lookup(SHEET_URL_VAR).filter(|s| !s.trim().is_empty()) {
            Some(raw) => parse_source_url(raw.trim())?,
            None => parse_source_url(DEFAULT_SHEET_URL)?,
        };
        let mut config = Self::new(source_url);

        if let Some(raw) = lookup(REVALIDATE_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.revalidate = Duration::from_secs(secs),
                Err(_) => tracing::warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    REVALIDATE_VAR,
                    raw,
                    DEFAULT_REVALIDATE_SECS
                ),
            }
        }

        Ok(config)
    }
}

fn parse_source_url(raw: &str) -> Result<Url, SheetError> {
    let url = Url::parse(raw).map_err(|e| SheetError::Config(format!("{SHEET_URL_VAR}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SheetError::Config(format!(
            "{SHEET_URL_VAR}: unsupported scheme {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_sheet_url_is_valid() {
        let url = parse_source_url(DEFAULT_SHEET_URL).unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_unset_uses_defaults() {
        let config = SheetConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.source_url.as_str(), DEFAULT_SHEET_URL);
        assert_eq!(config.revalidate, Duration::from_secs(1800));

        let blank = SheetConfig::from_lookup(lookup(&[("NAVI_SHEET_URL", "  ")])).unwrap();
        assert_eq!(blank, config);
    }

    #[test]
    fn test_overrides() {
        let config = SheetConfig::from_lookup(lookup(&[
            ("NAVI_SHEET_URL", "https://example.com/venues.csv"),
            ("NAVI_REVALIDATE_SECS", "60"),
        ]))
        .unwrap();
        assert_eq!(config.source_url.as_str(), "https://example.com/venues.csv");
        assert_eq!(config.revalidate, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_revalidate_falls_back() {
        let config =
            SheetConfig::from_lookup(lookup(&[("NAVI_REVALIDATE_SECS", "half an hour")])).unwrap();
        assert_eq!(config.revalidate, Duration::from_secs(DEFAULT_REVALIDATE_SECS));
    }

    #[test]
    fn test_invalid_url() {
        let err = SheetConfig::from_lookup(lookup(&[("NAVI_SHEET_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, SheetError::Config(_)));

        let err =
            SheetConfig::from_lookup(lookup(&[("NAVI_SHEET_URL", "file:///tmp/x.csv")])).unwrap_err();
        assert!(matches!(err, SheetError::Config(_)));
    }
}
