use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

use backend_domain::ports::CatalogueClient;
use backend_domain::Item;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("error fetching catalogue data: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalogue service returned status: {0}")]
    Status(StatusCode),
    #[error("unexpected content type from catalogue service: {0}")]
    ContentType(String),
    #[error("error decoding catalogue response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no products received from catalogue service")]
    Empty,
}

/// Fetches the full catalogue with one GET per call. No retries, no caching.
pub struct HttpCatalogueClient {
    client: Client,
    url: String,
}

impl HttpCatalogueClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn try_fetch(&self) -> Result<Vec<Item>, CatalogueError> {
        info!(url = %self.url, "fetching data from catalogue service");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogueError::Status(status));
        }

        if let Some(value) = response.headers().get(CONTENT_TYPE) {
            let content_type = String::from_utf8_lossy(value.as_bytes()).to_string();
            if !content_type.is_empty() && !content_type.contains("application/json") {
                return Err(CatalogueError::ContentType(content_type));
            }
        }

        let body = response.bytes().await?;
        let items: Vec<Item> = serde_json::from_slice(&body)?;
        if items.is_empty() {
            return Err(CatalogueError::Empty);
        }
        Ok(items)
    }
}

#[async_trait]
impl CatalogueClient for HttpCatalogueClient {
    async fn fetch_catalogue(&self) -> Vec<Item> {
        match self.try_fetch().await {
            Ok(items) => {
                info!(count = items.len(), "fetched products from catalogue service");
                items
            }
            Err(err) => {
                warn!(url = %self.url, "{}", err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header;
    use axum::response::{Html, IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn catalogue_json() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "name": "Crane",
                "category": "Animals",
                "difficulty": "Beginner",
                "tags": ["bird"],
                "short_description": "Classic crane",
                "description": "The traditional paper crane.",
                "image_url": "/static/images/crane.jpg",
                "created_at": "2024-01-01T00:00:00"
            },
            {
                "id": 2,
                "name": "Frog",
                "category": "Animals",
                "difficulty": "Intermediate",
                "tags": ["jumping"],
                "short_description": "Jumping frog",
                "description": "A frog that really jumps.",
                "image_url": "/static/images/frog.jpg",
                "created_at": "2024-01-02T00:00:00"
            }
        ])
    }

    async fn serve_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
        let addr = listener.local_addr().expect("upstream addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{}/api/products", addr)
    }

    async fn client_for(router: Router) -> HttpCatalogueClient {
        let url = serve_upstream(router).await;
        HttpCatalogueClient::new(url, TIMEOUT).expect("client")
    }

    #[tokio::test]
    async fn fetches_and_decodes_catalogue() {
        let client = client_for(Router::new().route(
            "/api/products",
            get(|| async { Json(catalogue_json()) }),
        ))
        .await;

        let items = client.fetch_catalogue().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Crane");
        assert_eq!(items[1].tags, vec!["jumping".to_string()]);
    }

    #[tokio::test]
    async fn accepts_missing_content_type() {
        let client = client_for(Router::new().route(
            "/api/products",
            get(|| async { Response::new(Body::from(catalogue_json().to_string())) }),
        ))
        .await;

        assert_eq!(client.fetch_catalogue().await.len(), 2);
    }

    #[tokio::test]
    async fn empty_array_is_reported_as_empty() {
        let client = client_for(Router::new().route(
            "/api/products",
            get(|| async { Json(json!([])) }),
        ))
        .await;

        assert!(matches!(client.try_fetch().await, Err(CatalogueError::Empty)));
        assert!(client.fetch_catalogue().await.is_empty());
    }

    #[tokio::test]
    async fn non_ok_status_yields_no_items() {
        let client = client_for(Router::new().route(
            "/api/products",
            get(|| async {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(catalogue_json())).into_response()
            }),
        ))
        .await;

        match client.try_fetch().await {
            Err(CatalogueError::Status(status)) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(client.fetch_catalogue().await.is_empty());
    }

    #[tokio::test]
    async fn non_json_content_type_yields_no_items() {
        let client = client_for(Router::new().route(
            "/api/products",
            get(|| async { Html("<html><body>maintenance</body></html>") }),
        ))
        .await;

        assert!(matches!(
            client.try_fetch().await,
            Err(CatalogueError::ContentType(_))
        ));
        assert!(client.fetch_catalogue().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_json_yields_no_items() {
        let client = client_for(Router::new().route(
            "/api/products",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], "{\"id\": 1") }),
        ))
        .await;

        assert!(matches!(client.try_fetch().await, Err(CatalogueError::Decode(_))));
        assert!(client.fetch_catalogue().await.is_empty());
    }

    #[tokio::test]
    async fn connection_error_yields_no_items() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let client =
            HttpCatalogueClient::new(format!("http://{}/api/products", addr), TIMEOUT)
                .expect("client");
        assert!(matches!(client.try_fetch().await, Err(CatalogueError::Request(_))));
        assert!(client.fetch_catalogue().await.is_empty());
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let url = serve_upstream(Router::new().route(
            "/api/products",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(catalogue_json())
            }),
        ))
        .await;

        let client = HttpCatalogueClient::new(url, Duration::from_millis(200)).expect("client");
        match client.try_fetch().await {
            Err(CatalogueError::Request(err)) => assert!(err.is_timeout()),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
