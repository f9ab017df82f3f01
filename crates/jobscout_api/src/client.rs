use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{ApiError, ChatReply, FacetCounts, FeedBundle, FilterOptions, JobPage};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub jobs_base_url: String,
    pub assistant_base_url: String,
    pub connect_timeout: Duration,
    /// Applied to the assistant endpoint only. The jobs endpoints carry no
    /// request timeout and resolve at their own pace.
    pub chat_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            jobs_base_url: "http://92.49.5.242:5000".to_string(),
            assistant_base_url: "http://92.49.5.242:5001".to_string(),
            connect_timeout: Duration::from_secs(10),
            chat_timeout: Duration::from_secs(10),
        }
    }
}

/// Read-only client seam for the jobs service.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    async fn job_page(&self, params: &[(String, String)]) -> Result<JobPage, ApiError>;
    async fn facet_counts(&self, params: &[(String, String)]) -> Result<FacetCounts, ApiError>;
    async fn filter_options(&self) -> Result<FilterOptions, ApiError>;
    async fn feed(&self, params: &[(String, String)]) -> Result<FeedBundle, ApiError>;
}

/// Client seam for the chat/assistant service.
#[async_trait::async_trait]
pub trait AssistantApi: Send + Sync {
    async fn send_message(&self, message: &str) -> Result<ChatReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestJobsClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.jobs_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(response).await
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsClient {
    async fn job_page(&self, params: &[(String, String)]) -> Result<JobPage, ApiError> {
        self.get_json("/all-jobs", params).await
    }

    async fn facet_counts(&self, params: &[(String, String)]) -> Result<FacetCounts, ApiError> {
        self.get_json("/filter-counts", params).await
    }

    async fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        self.get_json("/filter-options", &[]).await
    }

    async fn feed(&self, params: &[(String, String)]) -> Result<FeedBundle, ApiError> {
        let mut bundle: FeedBundle = self.get_json("/jobs", params).await?;
        if let Some(message) = bundle.error.take() {
            return Err(ApiError::Application(message));
        }
        Ok(bundle)
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestAssistantClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestAssistantClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.chat_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.assistant_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl AssistantApi for ReqwestAssistantClient {
    async fn send_message(&self, message: &str) -> Result<ChatReply, ApiError> {
        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_json(response).await
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::HttpStatus(status.as_u16()));
    }
    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
