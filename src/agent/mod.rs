pub mod classifier;
pub mod responder;

pub use classifier::{ classify, Category, KeywordRule, RULES };
pub use responder::{ detect_language, CategoryHandler, Responder };

use log::{ debug, error, info };

use crate::config::prompt::PROCESSING_APOLOGY;
use crate::config::{ chronex, ChronexConfig };
use crate::error::ChatError;
use crate::history::Conversation;
use crate::models::api::{ ChatFailure, ChatOutcome, ChatSuccess };
use crate::models::chat::{ ChatMessage, Role };

/// Classifies a message, builds the reply and extends the caller's history.
///
/// The agent holds no per-conversation state. History comes in with each call
/// and goes back out with the result, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct ChatAgent {
    config: &'static ChronexConfig,
    responder: Responder,
}

impl Default for ChatAgent {
    fn default() -> Self {
        Self::new(chronex(), Responder::default())
    }
}

impl ChatAgent {
    pub fn new(config: &'static ChronexConfig, responder: Responder) -> Self {
        Self { config, responder }
    }

    pub fn config(&self) -> &'static ChronexConfig {
        self.config
    }

    /// Runs one chat turn. Handler faults are logged and returned as a failure payload.
    ///
    /// Empty messages must be rejected by the caller before this point.
    pub fn process_message(&self, message: &str, history: Vec<ChatMessage>) -> ChatOutcome {
        match self.try_process(message, history) {
            Ok(success) => ChatOutcome::Success(success),
            Err(e) => {
                error!("Error processing message: {}", e);
                ChatOutcome::Failure(ChatFailure {
                    success: false,
                    error: e.to_string(),
                    response: PROCESSING_APOLOGY.to_string(),
                })
            }
        }
    }

    fn try_process(
        &self,
        message: &str,
        history: Vec<ChatMessage>
    ) -> Result<ChatSuccess, ChatError> {
        let category = classify(message);
        info!("Message classified as '{}' ({} prior messages)", category, history.len());

        let mut conversation = Conversation::from(history);
        conversation.add_message(Role::User, message);

        let response = self.responder.respond(self.config, category, message)?;
        debug!("Generated {} reply of {} bytes", category, response.len());

        conversation.add_message(Role::Assistant, &response);

        Ok(ChatSuccess {
            success: true,
            response,
            category,
            model: self.config.model_name().to_string(),
            history: conversation.into_messages(),
        })
    }

    /// Code analysis report for a language label, as served by the analyze-code endpoint.
    pub fn analyze_code(&self, language: &str) -> Result<String, ChatError> {
        let descriptor = format!("Analyze this {} code", language);
        self.responder.respond(self.config, Category::Code, &descriptor)
    }

    pub fn solve_math(&self, problem: &str) -> Result<String, ChatError> {
        self.responder.respond(self.config, Category::Math, problem)
    }
}
