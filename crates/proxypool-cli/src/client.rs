use proxypool_core::{OneProxyRequest, Proxy, ProxyListResponse, ProxyPoolConfig, ProxyPoolError, Result};
use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct ProxyPoolClient {
    host: String,
    list_path: String,
    one_path: String,
    client: reqwest::Client,
}

impl ProxyPoolClient {
    pub fn new(host: &str, config: &ProxyPoolConfig) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            list_path: config.api.list_path.clone(),
            one_path: config.api.one_path.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub fn list_url(&self) -> String {
        format!("{}{}", self.host, self.list_path)
    }

    pub fn one_url(&self, request: &OneProxyRequest) -> String {
        request.url_with_path(&self.host, &self.one_path)
    }

    pub async fn list_proxies(&self) -> Result<Vec<Proxy>> {
        let url = self.list_url();
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProxyPoolError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ProxyPoolError::Status(resp.status().as_u16()));
        }

        let body: ProxyListResponse = resp
            .json()
            .await
            .map_err(|e| ProxyPoolError::Http(e.to_string()))?;
        Ok(body.proxies)
    }

    /// `Ok(None)` when the pool has no proxy matching the request
    pub async fn one_proxy(&self, request: &OneProxyRequest) -> Result<Option<Proxy>> {
        let url = self.one_url(request);
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProxyPoolError::Http(e.to_string()))?;

        match resp.status() {
            StatusCode::NO_CONTENT => Ok(None),
            s if s.is_success() => {
                let text = resp.text().await.map_err(|e| ProxyPoolError::Http(e.to_string()))?;
                if text.trim().is_empty() {
                    return Ok(None);
                }
                Ok(Some(serde_json::from_str(&text)?))
            }
            s => Err(ProxyPoolError::Status(s.as_u16())),
        }
    }
}
