//! Shared HTTP client for the CareLink backend.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::session::Session;

/// HTTP client bound to one [`Session`].
///
/// All service facades share a reference to one `ApiClient`; the bearer
/// token is attached per request when the session carries one.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.session.base_url().trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            warn!(code = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!(%path, "GET");
        let response = self.authorize(self.http.get(self.url(path))).send().await?;
        Self::decode(Self::check(response)?).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        debug!(%path, "POST");
        let response = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(Self::check(response)?).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        debug!(%path, "POST");
        let response = self.authorize(self.http.post(self.url(path))).send().await?;
        Self::check(response)?;
        Ok(())
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        debug!(%path, "PUT");
        let response = self
            .authorize(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(Self::check(response)?).await
    }

    pub(crate) async fn put_body<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        debug!(%path, "PUT");
        let response = self
            .authorize(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }

    pub(crate) async fn put_empty(&self, path: &str) -> ApiResult<()> {
        debug!(%path, "PUT");
        let response = self.authorize(self.http.put(self.url(path))).send().await?;
        Self::check(response)?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        debug!(%path, "DELETE");
        let response = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;
        Self::check(response)?;
        Ok(())
    }
}
