//! Chat session records and the factory that creates new ones from the current defaults.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::defaults::DefaultsSource;
use crate::core::models::ModelId;

/// Title given to a chat the user has not named.
pub const DEFAULT_TITLE: &str = "New Chat";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Generation parameters for one chat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub model: ModelId,
    pub max_tokens: u64,
    pub temperature: f32,
    pub presence_penalty: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
}

/// One conversation: identity, messages, and a private copy of its config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub config: ChatConfig,
    /// False while the title is a placeholder the user has not confirmed.
    pub title_set: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Create a chat from the defaults currently held by `store`.
///
/// An empty or missing title becomes [`DEFAULT_TITLE`]. A non-empty default system message
/// seeds the chat with a single system message.
pub fn generate_default_chat(
    store: &impl DefaultsSource,
    title: Option<&str>,
    folder: Option<&str>,
) -> ChatSession {
    let title = title.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TITLE);

    let system_message = store.default_system_message();
    let messages = if system_message.is_empty() {
        vec![]
    } else {
        vec![Message {
            role: Role::System,
            content: system_message.to_string(),
        }]
    };

    let id = Uuid::new_v4().to_string();
    log::debug!("Created chat {} ({})", id, title);

    ChatSession {
        id,
        title: title.to_string(),
        messages,
        config: store.default_chat_config().clone(),
        title_set: false,
        folder: folder.map(String::from),
    }
}

#[cfg(test)]
mod tests;
