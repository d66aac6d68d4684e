//! Chat factory tests.

use super::*;
use crate::core::defaults::default_chat_config;

struct StubStore {
    system_message: String,
    config: ChatConfig,
}

impl StubStore {
    fn with_message(message: &str) -> Self {
        Self {
            system_message: message.to_string(),
            config: default_chat_config(),
        }
    }
}

impl DefaultsSource for StubStore {
    fn default_system_message(&self) -> &str {
        &self.system_message
    }

    fn default_chat_config(&self) -> &ChatConfig {
        &self.config
    }
}

#[test]
fn title_defaults_to_new_chat() {
    let store = StubStore::with_message("");
    assert_eq!(generate_default_chat(&store, None, None).title, "New Chat");
    assert_eq!(generate_default_chat(&store, Some(""), None).title, "New Chat");
}

#[test]
fn title_is_kept_when_given() {
    let store = StubStore::with_message("");
    assert_eq!(generate_default_chat(&store, Some("Foo"), None).title, "Foo");
    assert_eq!(generate_default_chat(&store, Some("  "), None).title, "  ");
}

#[test]
fn system_message_seeds_messages() {
    let store = StubStore::with_message("Be concise.");
    let chat = generate_default_chat(&store, None, None);
    assert_eq!(
        chat.messages,
        vec![Message {
            role: Role::System,
            content: "Be concise.".to_string(),
        }]
    );
}

#[test]
fn empty_system_message_leaves_messages_empty() {
    let store = StubStore::with_message("");
    assert!(generate_default_chat(&store, None, None).messages.is_empty());
}

#[test]
fn factory_reads_current_store_values() {
    let mut store = StubStore::with_message("first");
    store.config.model = ModelId::Claude35Haiku;
    let first = generate_default_chat(&store, None, None);
    store.system_message = "second".to_string();
    let second = generate_default_chat(&store, None, None);

    assert_eq!(first.messages[0].content, "first");
    assert_eq!(second.messages[0].content, "second");
    assert_eq!(first.config.model, ModelId::Claude35Haiku);
}

#[test]
fn config_is_copied_not_shared() {
    let mut store = StubStore::with_message("");
    let mut chat = generate_default_chat(&store, None, None);

    chat.config.temperature = 0.3;
    chat.config.model = ModelId::Gemini25Pro;
    assert_eq!(store.config, default_chat_config());

    store.config.max_tokens = 123;
    store.config.top_p = 0.5;
    assert_eq!(chat.config.max_tokens, 4000);
    assert_eq!(chat.config.top_p, 1.0);
}

#[test]
fn ids_are_unique() {
    let store = StubStore::with_message("");
    let a = generate_default_chat(&store, None, None);
    let b = generate_default_chat(&store, None, None);
    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
}

#[test]
fn title_set_is_always_false() {
    let store = StubStore::with_message("");
    assert!(!generate_default_chat(&store, None, None).title_set);
    assert!(!generate_default_chat(&store, Some("Named"), Some("work")).title_set);
}

#[test]
fn folder_passthrough() {
    let store = StubStore::with_message("");
    let chat = generate_default_chat(&store, Some("X"), Some("work"));
    assert_eq!(chat.folder.as_deref(), Some("work"));
    assert_eq!(generate_default_chat(&store, Some("X"), None).folder, None);
}

#[test]
fn session_serializes_with_camel_case_keys() {
    let store = StubStore::with_message("hi");
    let chat = generate_default_chat(&store, None, None);
    let value = serde_json::to_value(&chat).expect("serialize");

    assert_eq!(value["titleSet"], false);
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["config"]["model"], "gpt-5");
    assert_eq!(value["config"]["max_tokens"], 4000);
    assert!(value.get("folder").is_none());
}
