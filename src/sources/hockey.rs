use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::errors::GoalieError;
use crate::models::CrashGroupRecord;
use crate::utils::truncation::truncate_error;
use super::provider::CrashSource;
use super::types::{CrashPage, PageRequest};
use tracing::debug;

pub const DEFAULT_HOCKEY_URL: &str = "https://rink.hockeyapp.net";

/// HockeyApp crash-reason API client.
pub struct HockeyClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HockeyClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl CrashSource for HockeyClient {
    async fn fetch_page(&self, request: &PageRequest<'_>) -> Result<CrashPage, GoalieError> {
        let url = format!("{}/api/2/apps/{}/crash_reasons", self.base_url, request.app_id);
        let symbolicated = if request.symbolicated { "1" } else { "0" };
        let query = [
            ("symbolicated", symbolicated.to_string()),
            ("page", request.page.to_string()),
            ("per_page", request.per_page.to_string()),
            ("sort", request.sort.as_str().to_string()),
            ("order", request.order.as_str().to_string()),
        ];

        let resp = self.client
            .get(&url)
            .header("X-HockeyAppToken", &self.token)
            .query(&query)
            .send()
            .await
            .map_err(|e| GoalieError::Network(format!("Crash source request failed: {}", e)))?;

        let status = resp.status();
        let body = resp.text().await
            .map_err(|e| GoalieError::Network(format!("Failed to read crash source response: {}", e)))?;

        debug!(page = request.page, status = status.as_u16(), bytes = body.len(), "Crash source page received");

        let data: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(_) if !status.is_success() => {
                return Ok(CrashPage::failed(format!("HTTP {}: {}", status, truncate_error(&body))));
            }
            Err(e) => {
                return Err(GoalieError::SourceUnavailable(format!(
                    "Invalid crash source response: {}", e
                )));
            }
        };

        if let Some(error) = error_indicator(&data) {
            return Ok(CrashPage::failed(error));
        }
        if !status.is_success() {
            return Ok(CrashPage::failed(format!("HTTP {}", status)));
        }

        parse_page(data)
    }

    fn source_name(&self) -> &str { "hockeyapp" }
}

fn error_indicator(data: &Value) -> Option<String> {
    let error = data
        .get("Error")
        .or_else(|| data.get("error"))
        .filter(|v| !v.is_null())?;
    Some(match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// A page without a `crash_reasons` array or an integer `total_pages` is a
/// service failure, never an empty page.
fn parse_page(mut data: Value) -> Result<CrashPage, GoalieError> {
    let total_pages = match data.get("total_pages").and_then(Value::as_u64) {
        Some(n) => match u32::try_from(n) {
            Ok(n) => n,
            Err(_) => return Ok(CrashPage::failed(format!("total_pages out of range: {}", n))),
        },
        None => return Ok(CrashPage::failed("response has no integer total_pages")),
    };

    let records: Vec<CrashGroupRecord> = match data.get_mut("crash_reasons").map(Value::take) {
        Some(v @ Value::Array(_)) => serde_json::from_value(v)
            .map_err(|e| GoalieError::SourceUnavailable(format!("Malformed crash_reasons: {}", e)))?,
        _ => return Ok(CrashPage::failed("response has no crash_reasons array")),
    };

    Ok(CrashPage::ok(records, total_pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_fetch_page_parses_records() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/2/apps/app-1/crash_reasons")
            .match_header("X-HockeyAppToken", "sdk-token")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("symbolicated".into(), "1".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
                Matcher::UrlEncoded("sort".into(), "number_of_crashes".into()),
                Matcher::UrlEncoded("order".into(), "desc".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{
                "crash_reasons": [
                    {"id": 101, "number_of_crashes": 64, "status": 0, "app_id": 7,
                     "bundle_short_version": "2.1", "bundle_version": "210", "class": "Foo", "method": "bar"},
                    {"id": 102, "number_of_crashes": 3, "status": 1}
                ],
                "total_pages": 3,
                "status": "success"
            }"#)
            .create_async()
            .await;

        let client = HockeyClient::new(&server.url(), "sdk-token");
        let page = client.fetch_page(&PageRequest::new("app-1", 2, 100)).await.unwrap();

        assert!(page.error.is_none());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].id, "101");
        assert_eq!(page.records[0].app_id.as_deref(), Some("7"));
        assert!(page.records[1].is_resolved());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_key_reported_as_page_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/2/apps/app-1/crash_reasons")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"Error": "app not found"}"#)
            .create_async()
            .await;

        let client = HockeyClient::new(&server.url(), "sdk-token");
        let page = client.fetch_page(&PageRequest::new("app-1", 1, 100)).await.unwrap();
        assert_eq!(page.error.as_deref(), Some("app not found"));
        assert!(page.records.is_empty());
    }

    #[tokio::test]
    async fn test_http_failure_reported_as_page_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/2/apps/app-1/crash_reasons")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let client = HockeyClient::new(&server.url(), "sdk-token");
        let page = client.fetch_page(&PageRequest::new("app-1", 1, 100)).await.unwrap();
        assert!(page.error.unwrap().contains("503"));
    }

    async fn page_for_body(body: &str) -> CrashPage {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/2/apps/app-1/crash_reasons")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let client = HockeyClient::new(&server.url(), "sdk-token");
        client.fetch_page(&PageRequest::new("app-1", 1, 100)).await.unwrap()
    }

    #[tokio::test]
    async fn test_body_without_crash_reasons_is_page_error() {
        let page = page_for_body(r#"{"status": "failure", "message": "throttled"}"#).await;
        assert!(page.error.is_some());
        assert!(page.records.is_empty());

        let page = page_for_body(r#"{"crash_reasons": null, "total_pages": 1}"#).await;
        assert!(page.error.unwrap().contains("crash_reasons"));

        let page = page_for_body(r#"{"crash_reasons": {"id": 1}, "total_pages": 1}"#).await;
        assert!(page.error.is_some());
    }

    #[tokio::test]
    async fn test_missing_or_non_integer_total_pages_is_page_error() {
        let page = page_for_body(r#"{"crash_reasons": []}"#).await;
        assert!(page.error.unwrap().contains("total_pages"));

        let page = page_for_body(r#"{"crash_reasons": [], "total_pages": "3"}"#).await;
        assert!(page.error.is_some());
    }

    #[tokio::test]
    async fn test_non_object_body_is_page_error() {
        let page = page_for_body("[]").await;
        assert!(page.error.is_some());

        let page = page_for_body("42").await;
        assert!(page.error.is_some());
    }

    #[tokio::test]
    async fn test_empty_page_with_total_pages_is_valid() {
        let page = page_for_body(r#"{"crash_reasons": [], "total_pages": 1}"#).await;
        assert!(page.error.is_none());
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_unparseable_success_body_is_source_unavailable() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/2/apps/app-1/crash_reasons")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = HockeyClient::new(&server.url(), "sdk-token");
        let err = client.fetch_page(&PageRequest::new("app-1", 1, 100)).await.unwrap_err();
        assert!(matches!(err, GoalieError::SourceUnavailable(_)));
    }
}
