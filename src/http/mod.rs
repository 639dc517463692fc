use crate::error::{Result, SonarrError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{redirect, Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, instrument};
use url::Url;

pub const MAX_REDIRECTS: usize = 15;

#[derive(Clone)]
pub struct Auth {
    pub api_key: String,
    pub basic: Option<(String, String)>,
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    auth: Auth,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("basic_auth", &self.auth.basic.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    pub fn new(base_url: &str, auth: Auth) -> Result<Self> {
        // A trailing slash makes `Url::join` append to the path instead of
        // replacing its last segment.
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| SonarrError::InvalidConfiguration(format!("invalid base URL: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("sonarr-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `path` is relative to the base URL; a leading `/` is ignored.
    #[instrument(skip(self, query, body))]
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SonarrError::InvalidConfiguration(format!("invalid path {path}: {e}")))?;

        let mut request = self
            .client
            .request(method, url)
            .query(&[("apikey", self.auth.api_key.as_str())])
            .query(query);

        if let Some((username, password)) = &self.auth.basic {
            request = request.basic_auth(username, Some(password));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!("Making request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("HTTP request failed with status: {}", status);
            return Err(SonarrError::Status { status, body });
        }

        let text = response.text().await?;
        let json = serde_json::from_str(&text)?;
        Ok(json)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, query, None).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }
}
