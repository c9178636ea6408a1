//! RAWG catalog client
//!
//! Fetches popular games page by page (`ordering=-added`) within a release
//! date window. Requests are sequential and spaced by a minimum interval.
//!
//! Records are returned as raw `serde_json::Value` payloads; all field
//! interpretation happens in the assembler.

use chrono::NaiveDate;
use gtg_common::config::FetchConfig;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub const RAWG_BASE_URL: &str = "https://api.rawg.io/api/games";
const USER_AGENT: &str = concat!("gtg-dataset/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// RAWG client errors
#[derive(Debug, Error)]
pub enum RawgError {
    #[error("RAWG API key is empty")]
    MissingApiKey,

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Rate limiter enforcing a minimum interval between requests
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    /// Wait if necessary to comply with rate limit
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// `dates` query value: "<start>-01-01,<end>-12-31"
pub fn dates_param(start_year: i32, end_year: i32) -> Result<String, RawgError> {
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1)
        .ok_or_else(|| RawgError::InvalidDateRange(format!("start year {}", start_year)))?;
    let end = NaiveDate::from_ymd_opt(end_year, 12, 31)
        .ok_or_else(|| RawgError::InvalidDateRange(format!("end year {}", end_year)))?;

    if start > end {
        return Err(RawgError::InvalidDateRange(format!(
            "{} is after {}",
            start_year, end_year
        )));
    }

    Ok(format!("{},{}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")))
}

/// `results` array of a page body; `None` when missing or not an array
pub fn page_results(body: Value) -> Option<Vec<Value>> {
    match body {
        Value::Object(mut page) => match page.remove("results") {
            Some(Value::Array(results)) => Some(results),
            _ => None,
        },
        _ => None,
    }
}

/// Outcome of one page request
#[derive(Debug)]
pub enum PageOutcome {
    /// Page with at least one record
    Records(Vec<Value>),
    /// Pagination should stop (empty page or missing results)
    Exhausted,
}

/// RAWG API client
pub struct RawgClient {
    http_client: reqwest::Client,
    rate_limiter: Arc<RateLimiter>,
    api_key: String,
    base_url: String,
    config: FetchConfig,
}

impl RawgClient {
    pub fn new(api_key: impl Into<String>, config: FetchConfig) -> Result<Self, RawgError> {
        Self::with_base_url(api_key, config, RAWG_BASE_URL)
    }

    /// Client against an alternative endpoint (mirrors, test servers)
    pub fn with_base_url(
        api_key: impl Into<String>,
        config: FetchConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, RawgError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(RawgError::MissingApiKey);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RawgError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            rate_limiter: Arc::new(RateLimiter::new(config.request_interval_ms)),
            api_key,
            base_url: base_url.into(),
            config,
        })
    }

    /// Request a single page
    ///
    /// Non-success statuses surface as [`RawgError::ApiError`] with the
    /// first 200 characters of the body.
    pub async fn fetch_page(&self, page: u32) -> Result<PageOutcome, RawgError> {
        self.rate_limiter.wait().await;

        let dates = dates_param(self.config.start_year, self.config.end_year)?;
        let page_size = self.config.page_size.to_string();
        let page_number = page.to_string();

        debug!(page, url = %self.base_url, "Querying RAWG API");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("dates", dates.as_str()),
                ("ordering", "-added"),
                ("page_size", page_size.as_str()),
                ("page", page_number.as_str()),
            ])
            .send()
            .await
            .map_err(|e| RawgError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let snippet: String = error_text.chars().take(200).collect();
            return Err(RawgError::ApiError(status.as_u16(), snippet));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RawgError::ParseError(e.to_string()))?;

        match page_results(body) {
            Some(results) if !results.is_empty() => Ok(PageOutcome::Records(results)),
            Some(_) => {
                info!("No more results, stopping pagination");
                Ok(PageOutcome::Exhausted)
            }
            None => {
                warn!("RAWG page {} has no results array, stopping pagination", page);
                Ok(PageOutcome::Exhausted)
            }
        }
    }

    /// Fetch up to `max_pages` pages, stopping early when the catalog runs dry
    ///
    /// An HTTP failure status ends pagination with a warning and keeps what
    /// was already collected. Transport and decode failures are errors.
    pub async fn fetch_all(&self) -> Result<Vec<Value>, RawgError> {
        let max_pages = self.config.max_pages;
        let mut raw_games = Vec::new();

        for page in 1..=max_pages {
            info!("Fetching RAWG page {}/{}...", page, max_pages);

            match self.fetch_page(page).await {
                Ok(PageOutcome::Records(results)) => raw_games.extend(results),
                Ok(PageOutcome::Exhausted) => break,
                Err(RawgError::ApiError(status, body)) => {
                    warn!("RAWG request failed with status {}: {}", status, body);
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Total raw games fetched from RAWG: {}", raw_games.len());
        Ok(raw_games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex as StdMutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Local catalog stand-in answering each page with a canned
    /// `(status, body)`; returns the endpoint URL and the request lines seen
    async fn serve_pages<F>(respond: F) -> (String, Arc<StdMutex<Vec<String>>>)
    where
        F: Fn(u32) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(StdMutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let request_line = request.lines().next().unwrap_or_default().to_string();
                let page = requested_page(&request_line);
                seen.lock().unwrap().push(request_line);

                let (status, body) = respond(page);
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status < 400 { "OK" } else { "Error" },
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}/api/games", addr), requests)
    }

    fn requested_page(request_line: &str) -> u32 {
        request_line
            .split(|c: char| c == '?' || c == '&' || c == ' ')
            .find_map(|param| param.strip_prefix("page="))
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    fn full_page(page: u32) -> String {
        json!({
            "count": 1000,
            "results": [
                {"name": format!("Game {}a", page)},
                {"name": format!("Game {}b", page)}
            ]
        })
        .to_string()
    }

    fn fetch_config(max_pages: u32) -> FetchConfig {
        FetchConfig {
            page_size: 2,
            max_pages,
            request_interval_ms: 0,
            ..FetchConfig::default()
        }
    }

    fn client(base_url: String, max_pages: u32) -> RawgClient {
        let mut client =
            RawgClient::with_base_url("test-key", fetch_config(max_pages), base_url).unwrap();
        // Loopback server must not be routed through an ambient HTTP proxy
        client.http_client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        client
    }

    #[test]
    fn test_rate_limiter_creation() {
        let limiter = RateLimiter::new(200);
        assert_eq!(limiter.min_interval, Duration::from_millis(200));
    }

    #[test]
    fn test_client_creation() {
        let client = RawgClient::new("test-key", FetchConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_blank_key_rejected() {
        let client = RawgClient::new("   ", FetchConfig::default());
        assert!(matches!(client, Err(RawgError::MissingApiKey)));
    }

    #[test]
    fn test_dates_param() {
        assert_eq!(dates_param(2010, 2024).unwrap(), "2010-01-01,2024-12-31");
        assert!(matches!(
            dates_param(2024, 2010),
            Err(RawgError::InvalidDateRange(_))
        ));
    }

    #[test]
    fn test_page_results() {
        let body = json!({"count": 2, "results": [{"name": "A"}, {"name": "B"}]});
        assert_eq!(page_results(body).map(|r| r.len()), Some(2));

        assert!(page_results(json!({"detail": "Invalid key"})).is_none());
        assert!(page_results(json!({"results": null})).is_none());
        assert!(page_results(json!([])).is_none());
    }

    #[tokio::test]
    async fn test_rate_limiter_timing() {
        let limiter = RateLimiter::new(200);

        let start = Instant::now();

        // First request - no wait
        limiter.wait().await;
        let first_elapsed = start.elapsed();

        // Second request - should wait ~200ms
        limiter.wait().await;
        let second_elapsed = start.elapsed();

        assert!(first_elapsed < Duration::from_millis(100));
        assert!(second_elapsed >= Duration::from_millis(180));
    }

    #[tokio::test]
    async fn test_fetch_all_sends_catalog_query() {
        let (url, requests) = serve_pages(|_| (200, json!({"results": []}).to_string())).await;

        let records = client(url, 3).fetch_all().await.unwrap();
        assert!(records.is_empty());

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let line = &requests[0];
        assert!(line.starts_with("GET /api/games?"), "{}", line);
        assert!(line.contains("key=test-key"), "{}", line);
        assert!(line.contains("dates=2010-01-01%2C2024-12-31"), "{}", line);
        assert!(line.contains("ordering=-added"), "{}", line);
        assert!(line.contains("page_size=2"), "{}", line);
        assert!(line.contains("&page=1"), "{}", line);
    }

    #[tokio::test]
    async fn test_fetch_all_stops_at_max_pages() {
        let (url, requests) = serve_pages(|page| (200, full_page(page))).await;

        let records = client(url, 3).fetch_all().await.unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0]["name"], "Game 1a");
        assert_eq!(records[5]["name"], "Game 3b");
        assert_eq!(requests.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_pages_before_server_error() {
        let (url, requests) = serve_pages(|page| match page {
            1 => (200, full_page(1)),
            _ => (500, "internal server error".to_string()),
        })
        .await;

        let records = client(url, 5).fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_page_reports_status() {
        let (url, _) = serve_pages(|_| (401, r#"{"error": "bad key"}"#.to_string())).await;

        match client(url, 1).fetch_page(1).await {
            Err(RawgError::ApiError(status, body)) => {
                assert_eq!(status, 401);
                assert!(body.contains("bad key"));
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_stops_on_missing_results() {
        let (url, requests) = serve_pages(|page| match page {
            1 => (200, full_page(1)),
            2 => (200, json!({"detail": "Not found."}).to_string()),
            _ => (200, full_page(page)),
        })
        .await;

        let records = client(url, 5).fetch_all().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_all_stops_on_empty_results() {
        let (url, requests) = serve_pages(|page| match page {
            1 | 2 => (200, full_page(page)),
            3 => (200, json!({"results": []}).to_string()),
            _ => (200, full_page(page)),
        })
        .await;

        let records = client(url, 10).fetch_all().await.unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(requests.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_all_fails_on_undecodable_body() {
        let (url, _) = serve_pages(|_| (200, "<html>maintenance</html>".to_string())).await;

        let result = client(url, 2).fetch_all().await;
        assert!(matches!(result, Err(RawgError::ParseError(_))));
    }
}
