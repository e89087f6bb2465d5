use serde::{Deserialize, Serialize};

/// Request body for loading a named example document into a session
#[derive(Debug, Serialize)]
pub struct LoadFileRequest {
    pub file_name: String,
    pub session_id: String,
}

/// Response from the load-file endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct LoadFileResponse {
    pub message: String,
    pub chunks_count: u32,
    pub filename: String,
}

/// Response from the upload-file endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct UploadResponse {
    pub message: String,
    pub chunks_count: u32,
}

/// Request body for submitting a question
#[derive(Debug, Serialize)]
pub struct QuestionRequest {
    pub question: String,
    pub session_id: String,
}

/// Answer fields returned by the process-question endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct Answer {
    pub draft_answer: String,
    pub verification_report: String,
}

/// Uniform error body the backend emits on 4xx/5xx
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
