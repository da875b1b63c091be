use crate::catalog::{CatalogError, CategorySource};
use crate::config::SourceConfig;
use crate::model::Category;
use async_trait::async_trait;
use std::time::Duration;

pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("script-browser/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.categories_url(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }
}

#[async_trait]
impl CategorySource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Category>, CatalogError> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let mut read = 0;
            loop {
                let n = socket.read(&mut buf[read..]).await.unwrap();
                read += n;
                if n == 0 || read == buf.len() || buf[..read].windows(4).any(|w| w == b"\r\n\r\n")
                {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/api/categories", addr)
    }

    #[tokio::test]
    async fn test_fetch_decodes_categories() {
        let url = serve_once(
            "200 OK",
            r#"[{"name":"Network","description":"Routers and DNS","scripts":[{"name":"AdGuard","slug":"adguard"}]}]"#,
        )
        .await;

        let source = HttpSource::new(url, None).unwrap();
        let categories = source.fetch().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].description.as_deref(), Some("Routers and DNS"));
        assert_eq!(categories[0].scripts[0].slug, "adguard");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let url = serve_once("500 Internal Server Error", "[]").await;

        let source = HttpSource::new(url, None).unwrap();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, CatalogError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_invalid_body_is_decode_error() {
        let url = serve_once("200 OK", r#"{"categories":[]}"#).await;

        let source = HttpSource::new(url, None).unwrap();
        let err = source.fetch().await.unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_from_config_uses_environment_prefix() {
        let mut config = SourceConfig {
            base_url: "https://example.org/".into(),
            ..SourceConfig::default()
        };
        config.environment = Environment::Production;
        assert_eq!(
            HttpSource::from_config(&config).unwrap().describe(),
            "https://example.org/ProxmoxVE/api/categories"
        );

        config.environment = Environment::Development;
        assert_eq!(
            HttpSource::from_config(&config).unwrap().describe(),
            "https://example.org/api/categories"
        );
    }
}
