//! mite REST API client implementation.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use url::Url;

use crate::auth::{ACCOUNT_HEADER, API_KEY_HEADER, CredentialsProvider, StaticCredentials};
use crate::error::MiteError;
use crate::rest::endpoints::MITE_BASE_URL;
use crate::rest::envelope::{self, Resource};

/// The mite REST API client.
///
/// Every request carries the `X-MiteAccount` and `X-MiteApiKey` headers.
/// Responses with an unexpected status code, a missing envelope key or an
/// undecodable body come back as `Ok(None)` or an empty `Vec`; only
/// transport failures are returned as errors.
///
/// The client is cheap to clone and safe to share between tasks.
///
/// # Example
///
/// ```rust,no_run
/// use mite_api_client::rest::MiteClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MiteClient::new("my-app/1.0", "acme", "api_key")?;
///
///     if let Some(me) = client.get_myself().await? {
///         println!("Logged in as {} <{}>", me.name, me.email);
///     }
///
///     Ok(())
/// }
/// ```
///
/// Credentials can also come from the environment:
///
/// ```rust,no_run
/// use mite_api_client::auth::EnvCredentials;
/// use mite_api_client::rest::MiteClient;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let Some(credentials) = EnvCredentials::try_from_env() else {
///         eprintln!("MITE_ACCOUNT and MITE_API_KEY must be set");
///         return Ok(());
///     };
///     let client = MiteClient::builder()
///         .credentials(Arc::new(credentials))
///         .build()?;
///
///     let entries = client.get_time_entries_for_today().await?;
///     println!("{} entries today", entries.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct MiteClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    account_name: String,
    auth_headers: HeaderMap,
}

impl MiteClient {
    /// Create a client for the given account against the public mite API.
    ///
    /// No request is made; bad credentials only show up on the first call.
    pub fn new(
        user_agent: impl Into<String>,
        account_name: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, MiteError> {
        Self::builder()
            .user_agent(user_agent)
            .credentials(Arc::new(StaticCredentials::new(account_name, api_key)))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> MiteClientBuilder {
        MiteClientBuilder::new()
    }

    /// The base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The account this client authenticates against.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Start a request with the authentication headers applied.
    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder, MiteError> {
        let url = self.base_url.join(endpoint)?;
        tracing::debug!(method = method.as_str(), endpoint, "sending mite request");
        Ok(self
            .http_client
            .request(method, url)
            .headers(self.auth_headers.clone()))
    }

    /// Send a request and return the body if the status matches `expected`.
    async fn execute(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        expected: StatusCode,
    ) -> Result<Option<String>, MiteError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "received mite response");

        if status != expected {
            tracing::debug!(
                endpoint,
                status = status.as_u16(),
                expected = expected.as_u16(),
                "unexpected status from mite, returning empty result"
            );
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }

    /// Issue a request whose response is a single enveloped entity.
    pub(crate) async fn send_one<T: Resource>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        expected: StatusCode,
    ) -> Result<Option<T>, MiteError> {
        let mut request = self.request(method, endpoint)?;
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let Some(text) = self.execute(request, endpoint, expected).await? else {
            return Ok(None);
        };

        match envelope::unwrap_one(&text) {
            Ok(entity) => Ok(entity),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "failed to decode mite response");
                Ok(None)
            }
        }
    }

    /// GET a single enveloped entity.
    pub(crate) async fn get_one<T: Resource>(
        &self,
        endpoint: &str,
    ) -> Result<Option<T>, MiteError> {
        self.send_one(Method::GET, endpoint, None, StatusCode::OK)
            .await
    }

    /// GET a list of enveloped entities.
    pub(crate) async fn get_list<T: Resource>(&self, endpoint: &str) -> Result<Vec<T>, MiteError> {
        let request = self.request(Method::GET, endpoint)?;
        let Some(text) = self.execute(request, endpoint, StatusCode::OK).await? else {
            return Ok(Vec::new());
        };

        match envelope::unwrap_list(&text) {
            Ok(entities) => Ok(entities),
            Err(e) => {
                tracing::warn!(endpoint, error = %e, "failed to decode mite list response");
                Ok(Vec::new())
            }
        }
    }

    /// GET a list of enveloped entities with query parameters.
    pub(crate) async fn get_list_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<Vec<T>, MiteError>
    where
        T: Resource,
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)?;
        if query_string.is_empty() {
            self.get_list(endpoint).await
        } else {
            self.get_list(&format!("{}?{}", endpoint, query_string))
                .await
        }
    }
}

impl std::fmt::Debug for MiteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiteClient")
            .field("base_url", &self.base_url.as_str())
            .field("account_name", &self.account_name)
            .finish()
    }
}

/// Builder for [`MiteClient`].
pub struct MiteClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
}

impl MiteClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: MITE_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// Fails if no credentials were given, the base URL does not parse, or a
    /// credential is not a valid header value.
    pub fn build(self) -> Result<MiteClient, MiteError> {
        let credentials = self.credentials.ok_or(MiteError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let mut auth_headers = HeaderMap::new();
        let account = HeaderValue::from_str(&creds.account_name)
            .map_err(|_| MiteError::InvalidHeader("X-MiteAccount"))?;
        let mut api_key = HeaderValue::from_str(creds.expose_api_key())
            .map_err(|_| MiteError::InvalidHeader("X-MiteApiKey"))?;
        api_key.set_sensitive(true);
        auth_headers.insert(ACCOUNT_HEADER, account);
        auth_headers.insert(API_KEY_HEADER, api_key);

        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("mite-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .map_err(|_| MiteError::InvalidHeader("User-Agent"))?;
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(MiteClient {
            http_client,
            base_url,
            account_name: creds.account_name.clone(),
            auth_headers,
        })
    }
}

impl Default for MiteClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
