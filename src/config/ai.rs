//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// Chat and completion model
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How itineraries and checklists are generated
    #[serde(default)]
    pub strategy: GenerationStrategy,

    /// Assistant used for itineraries under the assistant strategy
    pub itinerary_assistant_id: Option<String>,

    /// Assistant used for checklists under the assistant strategy
    pub checklist_assistant_id: Option<String>,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Delay between run status checks, in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Longest wait for one assistant run, in seconds
    #[serde(default = "default_max_poll_wait")]
    pub max_poll_wait_secs: u64,

    /// Output cap for chat replies
    #[serde(default = "default_chat_max_tokens")]
    pub chat_max_tokens: u32,

    /// Sampling temperature for chat and completion generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// Structured generation strategy
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStrategy {
    /// One JSON-mode chat completion per request
    #[default]
    Completion,
    /// Assistant thread/run protocol with polling
    Assistant,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn max_poll_wait(&self) -> Duration {
        Duration::from_secs(self.max_poll_wait_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }

        if self.strategy == GenerationStrategy::Assistant {
            if is_blank(&self.itinerary_assistant_id) {
                return Err(ValidationError::MissingRequired("ITINERARY_ASSISTANT_ID"));
            }
            if is_blank(&self.checklist_assistant_id) {
                return Err(ValidationError::MissingRequired("CHECKLIST_ASSISTANT_ID"));
            }
        }

        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.poll_interval_ms == 0 {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.max_poll_wait() < self.poll_interval() {
            return Err(ValidationError::PollWaitTooShort);
        }
        if self.chat_max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }

        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            strategy: GenerationStrategy::default(),
            itinerary_assistant_id: None,
            checklist_assistant_id: None,
            timeout_secs: default_timeout(),
            poll_interval_ms: default_poll_interval(),
            max_poll_wait_secs: default_max_poll_wait(),
            chat_max_tokens: default_chat_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_poll_interval() -> u64 {
    1000
}

fn default_max_poll_wait() -> u64 {
    180
}

fn default_chat_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key() -> AiConfig {
        AiConfig {
            openai_api_key: Some(Secret::new("sk-test".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.strategy, GenerationStrategy::Completion);
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.max_poll_wait(), Duration::from_secs(180));
        assert_eq!(config.chat_max_tokens, 500);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_validation_requires_key() {
        assert_eq!(
            AiConfig::default().validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );

        let blank = AiConfig {
            openai_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!blank.has_openai());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(with_key().validate().is_ok());
    }

    #[test]
    fn test_assistant_strategy_needs_both_ids() {
        let config = AiConfig {
            strategy: GenerationStrategy::Assistant,
            itinerary_assistant_id: Some("asst_itinerary".to_string()),
            ..with_key()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("CHECKLIST_ASSISTANT_ID"))
        );

        let config = AiConfig {
            checklist_assistant_id: Some("asst_checklist".to_string()),
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_poll_bounds_are_checked() {
        let config = AiConfig {
            poll_interval_ms: 0,
            ..with_key()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPollInterval));

        let config = AiConfig {
            poll_interval_ms: 5000,
            max_poll_wait_secs: 2,
            ..with_key()
        };
        assert_eq!(config.validate(), Err(ValidationError::PollWaitTooShort));
    }

    #[test]
    fn test_temperature_range() {
        let config = AiConfig {
            temperature: 2.5,
            ..with_key()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));
    }

    #[test]
    fn test_strategy_deserializes_lowercase() {
        let strategy: GenerationStrategy = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(strategy, GenerationStrategy::Assistant);
    }
}
