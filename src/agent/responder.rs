use rand::seq::SliceRandom;

use super::classifier::Category;
use crate::config::prompt;
use crate::config::ChronexConfig;
use crate::error::ChatError;

/// Builds the reply text for one category from the user message.
pub type CategoryHandler = fn(&ChronexConfig, &str) -> Result<String, ChatError>;

/// Dispatch table from category to handler.
#[derive(Clone)]
pub struct Responder {
    handlers: [CategoryHandler; 5],
}

impl Default for Responder {
    fn default() -> Self {
        let mut handlers: [CategoryHandler; 5] = [general_response as CategoryHandler; 5];
        handlers[Category::Code.index()] = analyze_code;
        handlers[Category::Math.index()] = solve_math;
        handlers[Category::Question.index()] = answer_question;
        handlers[Category::Greeting.index()] = handle_greeting;
        handlers[Category::General.index()] = general_response;
        Self { handlers }
    }
}

impl Responder {
    /// Replaces the handler for one category.
    pub fn with_handler(mut self, category: Category, handler: CategoryHandler) -> Self {
        self.handlers[category.index()] = handler;
        self
    }

    pub fn respond(
        &self,
        config: &ChronexConfig,
        category: Category,
        text: &str
    ) -> Result<String, ChatError> {
        (self.handlers[category.index()])(config, text)
    }
}

/// First configured language named as a whole word in `text`, ignoring case.
/// Words are runs of letters, `+` and `#`, so `C++` and `C#` stay intact,
/// `python3` reads as `python`, and `C` or `Go` do not match inside "code" or "good".
pub fn detect_language<'a>(languages: &'a [String], text: &str) -> Option<&'a str> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !(c.is_alphabetic() || c == '+' || c == '#'))
        .filter(|word| !word.is_empty())
        .collect();

    languages
        .iter()
        .find(|language| {
            let wanted = language.to_lowercase();
            words.iter().any(|word| *word == wanted)
        })
        .map(|language| language.as_str())
}

pub fn analyze_code(config: &ChronexConfig, text: &str) -> Result<String, ChatError> {
    let detected = detect_language(config.languages(), text);
    Ok(prompt::render_code_analysis(detected))
}

pub fn solve_math(_config: &ChronexConfig, _text: &str) -> Result<String, ChatError> {
    Ok(prompt::MATH_SOLUTION.to_string())
}

pub fn answer_question(_config: &ChronexConfig, _text: &str) -> Result<String, ChatError> {
    Ok(prompt::DETAILED_ANSWER.to_string())
}

pub fn handle_greeting(_config: &ChronexConfig, _text: &str) -> Result<String, ChatError> {
    prompt::GREETINGS.choose(&mut rand::thread_rng())
        .map(|greeting| greeting.to_string())
        .ok_or_else(|| ChatError::Render {
            category: Category::Greeting,
            reason: "no greetings configured".to_string(),
        })
}

pub fn general_response(_config: &ChronexConfig, _text: &str) -> Result<String, ChatError> {
    Ok(prompt::GENERAL_RESPONSE.to_string())
}
