use once_cell::sync::Lazy;
use serde::Serialize;

pub const CREATOR: &str = "DEMON ALEX";
pub const VERSION: &str = "1.0";
pub const SYSTEM_NAME: &str = "Chronex AI Rust Backend";

#[derive(Debug, Clone, Serialize)]
pub struct ModelParameters {
    pub model_size: u64,
    pub max_processing_limit: u64,
    pub hidden_layers: u32,
    pub attention_heads: u32,
    pub ffn_hidden_size: u32,
    pub vocab_size: u32,
    pub context_length: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: String,
    pub parameters: u64,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
    pub chat: bool,
    pub code_analysis: bool,
    pub language_support: Vec<String>,
    pub math_solving: bool,
    pub data_analysis: bool,
}

impl Capabilities {
    /// Keys in declaration order, as reported by the status endpoint.
    pub const NAMES: [&'static str; 5] = [
        "chat",
        "code_analysis",
        "language_support",
        "math_solving",
        "data_analysis",
    ];
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetySettings {
    pub content_moderation: bool,
    pub auto_filter: bool,
}

/// Static model metadata and capability flags. Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ChronexConfig {
    pub creator: String,
    pub parameters: ModelParameters,
    pub model: ModelInfo,
    pub capabilities: Capabilities,
    pub safety: SafetySettings,
}

impl ChronexConfig {
    pub fn model_name(&self) -> &str {
        &self.model.name
    }

    pub fn languages(&self) -> &[String] {
        &self.capabilities.language_support
    }

    pub fn capability_names(&self) -> Vec<String> {
        Capabilities::NAMES.iter().map(|name| name.to_string()).collect()
    }
}

impl Default for ChronexConfig {
    fn default() -> Self {
        Self {
            creator: CREATOR.to_string(),
            parameters: ModelParameters {
                model_size: 4_000_000_000,
                max_processing_limit: 4_000_000_000,
                hidden_layers: 96,
                attention_heads: 64,
                ffn_hidden_size: 16000,
                vocab_size: 128256,
                context_length: 32768,
                description: "4B parameter model".to_string(),
            },
            model: ModelInfo {
                name: "Chronex AI v1.0 (Rust 4B)".to_string(),
                model_type: "advanced-neural-network".to_string(),
                parameters: 4_000_000_000,
                temperature: 0.7,
                max_tokens: 2000,
                top_p: 0.9,
            },
            capabilities: Capabilities {
                chat: true,
                code_analysis: true,
                language_support: ["JavaScript", "Python", "C++", "C", "Java", "Go", "Rust"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                math_solving: true,
                data_analysis: true,
            },
            safety: SafetySettings {
                content_moderation: true,
                auto_filter: true,
            },
        }
    }
}

static CHRONEX_CONFIG: Lazy<ChronexConfig> = Lazy::new(ChronexConfig::default);

pub fn chronex() -> &'static ChronexConfig {
    &CHRONEX_CONFIG
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatorInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub system: &'static str,
    pub version: &'static str,
}

pub fn creator() -> CreatorInfo {
    CreatorInfo {
        name: CREATOR,
        role: "Developer",
        system: SYSTEM_NAME,
        version: VERSION,
    }
}
