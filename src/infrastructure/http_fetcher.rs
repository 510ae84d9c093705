// HTTP summary fetcher implementation
use crate::application::errors::DashboardError;
use crate::application::summary_fetcher::SummaryFetcher;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpSummaryFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpSummaryFetcher {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SummaryFetcher for HttpSummaryFetcher {
    async fn fetch(&self) -> Result<String, DashboardError> {
        tracing::debug!("Requesting dashboard summary from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::HttpStatus {
                code: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/dashboard/resumo")
                    .header("accept", "application/json");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"cards": {"custo_mensal": 1.0}}"#);
            })
            .await;

        let fetcher = HttpSummaryFetcher::new(server.url("/api/dashboard/resumo"));
        let body = fetcher.fetch().await.expect("fetch succeeds");

        assert_eq!(body, r#"{"cards": {"custo_mensal": 1.0}}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/dashboard/resumo");
                then.status(503).body("unavailable");
            })
            .await;

        let fetcher = HttpSummaryFetcher::new(server.url("/api/dashboard/resumo"));
        let err = fetcher.fetch().await.expect_err("503 must fail");

        assert!(matches!(err, DashboardError::HttpStatus { code: 503 }));
        mock.assert_calls_async(1).await;
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Nothing listens on port 1
        let fetcher = HttpSummaryFetcher::new("http://127.0.0.1:1/api/dashboard/resumo".to_string());
        let err = fetcher.fetch().await.expect_err("connection must fail");

        assert!(matches!(err, DashboardError::Network(_)));
    }
}
