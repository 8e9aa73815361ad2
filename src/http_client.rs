// Authenticated request pipeline
//
// Every domain request goes through `ApiClient`: the stored access token is
// attached as a bearer header, responses are date-normalized and decoded, and
// a 401 on a token-bearing request triggers the refresh protocol. Concurrent
// 401s share a single refresh exchange: the first failing request becomes the
// leader and performs the exchange, everyone else waits on a watch channel
// for the new token (or the failure) and then retries once.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::{watch, Mutex};

use crate::auth::{AuthClient, TokenStore};
use crate::dates;
use crate::error::{ApiError, Result};

/// Outcome of a refresh exchange, broadcast to waiting requests.
/// `None` is the initial "no outcome yet" value of the channel.
type RefreshSignal = Option<std::result::Result<String, String>>;

/// Refresh protocol state. `inflight` is `Some` exactly while an exchange is
/// running; its receiver hands the outcome to requests that 401 in the
/// meantime.
#[derive(Default)]
struct RefreshState {
    inflight: Option<watch::Receiver<RefreshSignal>>,
}

enum FlightRole {
    Leader(watch::Sender<RefreshSignal>),
    Waiter(watch::Receiver<RefreshSignal>),
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<TokenStore>,
    auth: Arc<AuthClient>,
    refresh: Mutex<RefreshState>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<TokenStore>,
        auth: Arc<AuthClient>,
        request_timeout: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            store,
            auth,
            refresh: Mutex::new(RefreshState::default()),
        })
    }

    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }

    pub fn auth(&self) -> &Arc<AuthClient> {
        &self.auth
    }

    // ----------------------------------------------------------------------
    // Typed request surface used by the domain services
    // ----------------------------------------------------------------------

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.build_request(Method::GET, path, None)?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.build_request(Method::POST, path, Some(serde_json::to_value(body)?))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.build_request(Method::PUT, path, Some(serde_json::to_value(body)?))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute(request).await?;
        Ok(())
    }

    /// DELETE carrying a JSON body (bulk operations)
    pub async fn delete_with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request =
            self.build_request(Method::DELETE, path, Some(serde_json::to_value(body)?))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    // ----------------------------------------------------------------------
    // Pipeline internals
    // ----------------------------------------------------------------------

    fn build_request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Request> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let mut request = builder.build()?;
        self.attach(&mut request);
        Ok(request)
    }

    /// Attach the bearer header if a token is stored. Headers are left
    /// untouched otherwise. Returns whether a token was attached.
    fn attach(&self, request: &mut Request) -> bool {
        match self.store.token() {
            Some(token) => match bearer(&token) {
                Ok(value) => {
                    request.headers_mut().insert(AUTHORIZATION, value);
                    true
                }
                Err(_) => {
                    tracing::warn!("Stored access token is not a valid header value");
                    false
                }
            },
            None => false,
        }
    }

    /// Send a request; resolve a 401 on a token-bearing request via the
    /// refresh protocol and retry once. Every other response, success or
    /// error, passes through unchanged.
    async fn execute(&self, request: Request) -> Result<Response> {
        let had_token = request.headers().contains_key(AUTHORIZATION);
        let method = request.method().clone();
        let url = request.url().clone();

        // Clone up front: the body is consumed by the first send
        let retry_request = request.try_clone();

        tracing::debug!(method = %method, url = %url, "Sending request");
        let response = self.client.execute(request).await?;

        if response.status().as_u16() != 401 || !had_token {
            return self.check_status(response).await;
        }

        tracing::debug!(method = %method, url = %url, "Got 401, entering refresh protocol");
        let token = self.refresh_access_token().await?;

        let mut retry = retry_request
            .ok_or_else(|| ApiError::Internal(anyhow!("request body is not cloneable")))?;
        retry.headers_mut().insert(
            AUTHORIZATION,
            bearer(&token).map_err(|e| ApiError::Internal(e.into()))?,
        );

        let response = self.client.execute(retry).await?;
        if response.status().as_u16() == 401 {
            // The freshly issued token was rejected; do not loop
            return Err(ApiError::AuthExpired);
        }
        self.check_status(response).await
    }

    async fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %body, "Request failed");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    /// Single-flight refresh. The first caller performs the exchange and
    /// broadcasts the outcome; concurrent callers wait for that broadcast.
    /// At most one exchange is in flight at any time.
    async fn refresh_access_token(&self) -> Result<String> {
        let role = {
            let mut state = self.refresh.lock().await;
            match state.inflight {
                Some(ref rx) => FlightRole::Waiter(rx.clone()),
                None => {
                    let (tx, rx) = watch::channel(None);
                    state.inflight = Some(rx);
                    FlightRole::Leader(tx)
                }
            }
        };

        match role {
            FlightRole::Leader(tx) => {
                let result = self.run_refresh().await;

                let signal = match &result {
                    Ok(token) => Some(Ok(token.clone())),
                    Err(e) => Some(Err(e.to_string())),
                };
                // Broadcast before releasing the slot so late waiters on the
                // old channel still see the outcome
                let _ = tx.send(signal);

                let mut state = self.refresh.lock().await;
                state.inflight = None;
                result
            }
            FlightRole::Waiter(mut rx) => {
                if rx.changed().await.is_err() {
                    return Err(ApiError::AuthInvalid("refresh aborted".into()));
                }
                let outcome = rx.borrow_and_update().clone();
                match outcome {
                    Some(Ok(token)) => Ok(token),
                    Some(Err(message)) => Err(ApiError::AuthInvalid(message)),
                    None => Err(ApiError::AuthInvalid("refresh produced no outcome".into())),
                }
            }
        }
    }

    /// Perform the actual exchange. Failure here is terminal: the session is
    /// cleared so the caller must authenticate again.
    async fn run_refresh(&self) -> Result<String> {
        let Some(refresh_token) = self.store.refresh_token() else {
            self.store.sign_out();
            return Err(ApiError::AuthInvalid("no refresh token stored".into()));
        };

        match self.auth.refresh(&refresh_token).await {
            Ok(auth) => {
                self.store.save_session(&auth);
                tracing::debug!("Access token refreshed");
                Ok(auth.access_token)
            }
            Err(e) => {
                tracing::warn!("Refresh failed, signing out: {}", e);
                self.store.sign_out();
                Err(match e {
                    ApiError::AuthInvalid(msg) => ApiError::AuthInvalid(msg),
                    other => ApiError::AuthInvalid(other.to_string()),
                })
            }
        }
    }

    /// Read the body as JSON, normalize date tuples, then deserialize.
    /// An empty body decodes only into types that accept `null`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text().await?;
        let value: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        let value = dates::normalized(value);
        Ok(serde_json::from_value(value)?)
    }
}

fn bearer(token: &str) -> std::result::Result<HeaderValue, reqwest::header::InvalidHeaderValue> {
    HeaderValue::from_str(&format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(store: Arc<TokenStore>) -> ApiClient {
        let auth = Arc::new(AuthClient::new("http://localhost:1", store.clone()).unwrap());
        ApiClient::new("http://localhost:1", store, auth, 30).unwrap()
    }

    #[test]
    fn test_attach_with_empty_store_leaves_headers_unchanged() {
        let store = Arc::new(TokenStore::in_memory());
        let api = test_client(store);

        let request = api.build_request(Method::GET, "/students", None).unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_attach_sets_bearer_header() {
        let store = Arc::new(TokenStore::in_memory());
        store.save_token("tok-123");
        let api = test_client(store);

        let request = api.build_request(Method::GET, "/students", None).unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer tok-123"
        );
    }

    #[test]
    fn test_json_body_request_is_cloneable() {
        let store = Arc::new(TokenStore::in_memory());
        store.save_token("tok-123");
        let api = test_client(store);

        let body = serde_json::json!({"name": "Algebra"});
        let request = api
            .build_request(Method::POST, "/courses", Some(body))
            .unwrap();
        // The retry path depends on cloning the buffered body
        assert!(request.try_clone().is_some());
    }
}
