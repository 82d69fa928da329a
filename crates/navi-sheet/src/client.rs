//! HTTP source for the published sheet.

use crate::error::SheetError;
use crate::SheetSource;
use url::Url;

/// Fetches the sheet's CSV export over HTTP.
///
/// One GET per call; caching is the caller's concern.
///
/// # Example
///
/// ```rust,no_run
/// use navi_sheet::{HttpSheetSource, SheetConfig, SheetSource};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let source = HttpSheetSource::new(SheetConfig::from_env()?.source_url);
///     let csv = source.fetch_csv().await?;
///     println!("Got {} bytes", csv.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpSheetSource {
    http_client: reqwest::Client,
    url: Url,
}

impl HttpSheetSource {
    /// Create a source for the given export URL.
    pub fn new(url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a source that reuses an existing HTTP client.
    pub fn with_client(http_client: reqwest::Client, url: Url) -> Self {
        Self { http_client, url }
    }

    /// The export URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self) -> Result<String, SheetError> {
        tracing::debug!("Fetching venue sheet from: {}", self.url);

        let response = self.http_client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Downloaded {} bytes of CSV", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let url = Url::parse("https://example.com/export?format=csv").unwrap();
        let source = HttpSheetSource::new(url.clone());
        assert_eq!(source.url(), &url);
    }
}
