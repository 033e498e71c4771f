//! HTTP client for the ExerciseDB REST API.
//!
//! `ApiClient` sends GET requests carrying the RapidAPI headers and turns
//! responses into typed values or an [`ExerciseDbError`]. It holds no state
//! beyond the connection pool; caching lives in [`crate::cache`].

use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ExerciseConfig;
use crate::error::{ExerciseDbError, Result};
use crate::models::{Exercise, Page};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 30;

const API_KEY_HEADER: &str = "x-rapidapi-key";

const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Validate and percent-encode a search value for use as a path segment.
///
/// Nothing is left unescaped except `A-Z a-z 0-9 - . _ ~`, so `"push up"`
/// becomes `"push%20up"` and `/` cannot introduce extra path segments.
pub fn encode_search_value(value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(ExerciseDbError::Validation(format!(
            "Invalid search value: {:?}",
            value
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Encode a path segment that isn't user search input (ids, list types, filter names)
fn path_segment(what: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ExerciseDbError::Validation(format!(
            "{} must not be empty",
            what
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// API client for ExerciseDB.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    headers: header::HeaderMap,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keeps the API key out of debug output
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client from a validated config
    pub fn new(config: &ExerciseConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            headers: Self::rapidapi_headers(config)?,
        })
    }

    fn rapidapi_headers(config: &ExerciseConfig) -> Result<header::HeaderMap> {
        let mut key = header::HeaderValue::from_str(&config.api_key).map_err(|_| {
            ExerciseDbError::Configuration("API key contains invalid header characters".into())
        })?;
        key.set_sensitive(true);

        let host = header::HeaderValue::from_str(&config.host).map_err(|_| {
            ExerciseDbError::Configuration(format!(
                "API host contains invalid header characters: {}",
                config.host
            ))
        })?;

        let mut headers = header::HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(API_HOST_HEADER, host);
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "API request failed");
            Err(ExerciseDbError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, page: Option<Page>) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, ?page, "Sending GET request");

        let mut request = self.client.get(&url).headers(self.headers.clone());
        if let Some(page) = page {
            request = request.query(&page);
        }

        let response = request.send().await?;
        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        debug!(url = %url, bytes = text.len(), "Response received");

        serde_json::from_str(&text).map_err(|e| {
            ExerciseDbError::InvalidResponse(format!(
                "Failed to parse JSON response from {}: {}",
                path, e
            ))
        })
    }

    // ===== Gateway =====

    /// Verify the API gateway is operational
    pub async fn check_status(&self) -> Result<serde_json::Value> {
        self.get("/status", None).await
    }

    // ===== Images =====

    /// Fetch image metadata for an exercise
    pub async fn get_exercise_image(&self, exercise_id: &str) -> Result<serde_json::Value> {
        let id = path_segment("Exercise id", exercise_id)?;
        self.get(&format!("/image/{}", id), None).await
    }

    // ===== Reference lists =====

    /// Fetch one reference vocabulary, e.g. `targetList`
    pub async fn fetch_reference_list(&self, list_type: &str) -> Result<Vec<String>> {
        let segment = path_segment("List type", list_type)?;
        self.get(&format!("/exercises/{}", segment), None).await
    }

    // ===== Exercises =====

    /// Search exercises where `filter_type` (e.g. "target", "name") matches `value`
    pub async fn search_exercises(
        &self,
        filter_type: &str,
        value: &str,
        page: Page,
    ) -> Result<Vec<Exercise>> {
        let encoded = encode_search_value(value)?;
        let filter = path_segment("Filter type", filter_type)?;
        self.get(&format!("/exercises/{}/{}", filter, encoded), Some(page))
            .await
    }

    /// Fetch a single exercise by id
    pub async fn get_exercise_by_id(&self, exercise_id: &str) -> Result<Exercise> {
        let id = path_segment("Exercise id", exercise_id)?;
        self.get(&format!("/exercises/exercise/{}", id), None).await
    }

    /// List the catalog one page at a time
    pub async fn list_all_exercises(&self, page: Page) -> Result<Vec<Exercise>> {
        self.get("/exercises", Some(page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_search_value("abs").unwrap(), "abs");
    }

    #[test]
    fn test_encode_spaces() {
        assert_eq!(encode_search_value("upper chest").unwrap(), "upper%20chest");
    }

    #[test]
    fn test_encode_special_chars() {
        let result = encode_search_value("press (incline)").unwrap();
        assert!(result.contains("%28"));
        assert!(result.contains("%29"));

        let result = encode_search_value("a/b").unwrap();
        assert_eq!(result, "a%2Fb");
    }

    #[test]
    fn test_encode_empty_is_validation_error() {
        let err = encode_search_value("").unwrap_err();
        assert!(matches!(err, ExerciseDbError::Validation(_)));
    }

    #[test]
    fn test_path_segment_rejects_blank() {
        assert!(matches!(
            path_segment("Exercise id", " "),
            Err(ExerciseDbError::Validation(_))
        ));
        assert_eq!(path_segment("Exercise id", "0001").unwrap(), "0001");
    }

    #[test]
    fn test_new_uses_base_url_override() {
        let config = ExerciseConfig::new("k").with_base_url("http://127.0.0.1:9/");
        let client = ApiClient::new(&config).expect("client should build");
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let err = ApiClient::new(&ExerciseConfig::new("")).unwrap_err();
        assert!(matches!(err, ExerciseDbError::Configuration(_)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = ApiClient::new(&ExerciseConfig::new("secret-key")).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-key"));
    }
}
