use serde::{ Deserialize, Serialize };

use crate::agent::Category;
use crate::models::chat::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeCodeRequest {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SolveMathRequest {
    #[serde(default)]
    pub problem: Option<String>,
}

/// Result of one chat turn. Serializes to either the success or the failure payload.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ChatOutcome {
    Success(ChatSuccess),
    Failure(ChatFailure),
}

impl ChatOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ChatOutcome::Success(_))
    }
}

#[derive(Debug, Serialize)]
pub struct ChatSuccess {
    pub success: bool,
    pub response: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub model: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCodeResponse {
    pub success: bool,
    pub analysis: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct SolveMathResponse {
    pub success: bool,
    pub solution: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub model: String,
    pub version: &'static str,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}
