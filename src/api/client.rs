use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::models::{
    Answer, ErrorBody, LoadFileRequest, LoadFileResponse, QuestionRequest, UploadResponse,
};
use crate::error::ApiError;

/// Async client for the three DocChat backend endpoints.
pub struct DocChatClient {
    client: Client,
    base_url: String,
}

impl DocChatClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Helper for testing to override base URL
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Load a named example document from the backend's examples directory
    /// into the given session.
    pub async fn load_file(
        &self,
        file_name: &str,
        session_id: &str,
    ) -> Result<LoadFileResponse, ApiError> {
        let url = format!("{}/load-file", self.base_url);
        debug!(file_name, session_id, "loading example file");

        let request_body = LoadFileRequest {
            file_name: file_name.to_string(),
            session_id: session_id.to_string(),
        };

        let response = self.client.post(&url).json(&request_body).send().await?;
        parse_response(response).await
    }

    /// Upload a local document as a multipart form into the given session.
    pub async fn upload_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        session_id: &str,
    ) -> Result<UploadResponse, ApiError> {
        let url = format!("{}/upload-file", self.base_url);
        debug!(filename, size = bytes.len(), session_id, "uploading file");

        let form = Form::new()
            .text("session_id", session_id.to_string())
            .part("file", Part::bytes(bytes).file_name(filename.to_string()));

        let response = self.client.post(&url).multipart(form).send().await?;
        parse_response(response).await
    }

    /// Submit a question about the documents loaded in the given session.
    pub async fn process_question(
        &self,
        question: &str,
        session_id: &str,
    ) -> Result<Answer, ApiError> {
        let url = format!("{}/process-question", self.base_url);
        debug!(session_id, "submitting question");

        let request_body = QuestionRequest {
            question: question.to_string(),
            session_id: session_id.to_string(),
        };

        let response = self.client.post(&url).json(&request_body).send().await?;
        parse_response(response).await
    }
}

/// Check the status and decode the typed body, mapping non-2xx responses to
/// the backend's `{"error"}` body when one is present.
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return match response.json::<ErrorBody>().await {
            Ok(body) => Err(ApiError::Backend {
                status: status.as_u16(),
                message: body.error,
            }),
            Err(_) => Err(ApiError::Status {
                status: status.as_u16(),
            }),
        };
    }

    Ok(response.json::<T>().await?)
}
