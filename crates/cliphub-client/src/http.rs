use cliphub_types::{Clip, ClipId, Envelope};
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{Error, Result};

/// Shown when the backend reports an error without a message of its own.
const GENERIC_API_ERROR: &str = "Unknown API error.";

/// Client for the hub's clip collection.
///
/// Four operations, one request helper. Every call is a single round trip:
/// no retries, no timeout, no caching. Failures carry a human-readable
/// message and nothing else.
pub struct HubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HubClient {
    /// `base_url` addresses the clip collection itself,
    /// e.g. `http://127.0.0.1:5000/api/clips`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| Error::BaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::BaseUrl(format!("'{}' cannot carry a path", base_url)));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // AJAX marker the backend uses to reject plain cross-site form posts.
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Fetch all clips, in whatever order the backend returns them.
    pub async fn fetch_clips(&self) -> Result<Vec<Clip>> {
        let data: Option<Vec<Clip>> = self.request(Method::GET, None, None).await?;
        Ok(data.unwrap_or_default())
    }

    /// Create a new clip and return the record the backend stored.
    pub async fn create_clip(&self, content: &str) -> Result<Clip> {
        let body = json!({ "content": content });
        let data = self.request(Method::POST, None, Some(&body)).await?;
        data.ok_or(Error::InvalidResponse)
    }

    /// Replace a clip's content and return the updated record.
    pub async fn update_clip(&self, id: &ClipId, content: &str) -> Result<Clip> {
        let body = json!({ "content": content });
        let data = self.request(Method::PUT, Some(id), Some(&body)).await?;
        data.ok_or(Error::InvalidResponse)
    }

    /// Delete a clip. Success is "did not fail"; any `data` is ignored.
    pub async fn delete_clip(&self, id: &ClipId) -> Result<()> {
        let _: Option<serde_json::Value> = self.request(Method::DELETE, Some(id), None).await?;
        Ok(())
    }

    fn endpoint(&self, id: Option<&ClipId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| Error::BaseUrl("base URL has no path segments".to_string()))?
                .pop_if_empty()
                .push(id.as_str());
        }
        Ok(url)
    }

    /// Issue one request and unwrap the JSON envelope.
    ///
    /// The HTTP status code is deliberately not consulted: the backend puts
    /// its verdict in the envelope's `status` field, including on 4xx
    /// responses.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        id: Option<&ClipId>,
        body: Option<&serde_json::Value>,
    ) -> Result<Option<T>> {
        let url = self.endpoint(id)?;
        debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let bytes = response.bytes().await?;

        let envelope: Envelope<T> =
            serde_json::from_slice(&bytes).map_err(|_| Error::InvalidResponse)?;

        match envelope {
            Envelope::Success { data } => Ok(data),
            Envelope::Error { message } => Err(Error::Api(
                message.unwrap_or_else(|| GENERIC_API_ERROR.to_string()),
            )),
        }
    }
}
