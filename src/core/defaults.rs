//! Built-in chat defaults and the store that serves the current ones.

use crate::core::chat::ChatConfig;
use crate::core::config::Config;
use crate::core::models::DEFAULT_MODEL;

/// System message used when `DEFAULT_SYSTEM_MESSAGE` is not set.
pub const BUILTIN_SYSTEM_MESSAGE: &str = "You are ChatGPT, a large language model trained by OpenAI.\n\
Carefully heed the user's instructions. \n\
Respond using Markdown.";

/// Default max output tokens for a new chat.
pub const DEFAULT_USER_MAX_TOKEN: u64 = 4000;

/// Baseline generation parameters.
pub fn default_chat_config() -> ChatConfig {
    ChatConfig {
        model: DEFAULT_MODEL,
        max_tokens: DEFAULT_USER_MAX_TOKEN,
        temperature: 1.0,
        presence_penalty: 0.0,
        top_p: 1.0,
        frequency_penalty: 0.0,
    }
}

/// Read access to the defaults a new chat is built from.
///
/// Implemented by whatever holds user-adjusted settings; the factory reads it at call time.
pub trait DefaultsSource {
    fn default_system_message(&self) -> &str;
    fn default_chat_config(&self) -> &ChatConfig;
}

/// In-memory defaults, seeded from the resolved startup config.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsStore {
    system_message: String,
    chat_config: ChatConfig,
}

impl DefaultsStore {
    pub fn seeded(config: &Config) -> Self {
        Self {
            system_message: config.default_system_message.clone(),
            chat_config: default_chat_config(),
        }
    }

    pub fn set_default_system_message(&mut self, message: impl Into<String>) {
        self.system_message = message.into();
    }

    pub fn default_chat_config_mut(&mut self) -> &mut ChatConfig {
        &mut self.chat_config
    }
}

impl DefaultsSource for DefaultsStore {
    fn default_system_message(&self) -> &str {
        &self.system_message
    }

    fn default_chat_config(&self) -> &ChatConfig {
        &self.chat_config
    }
}
