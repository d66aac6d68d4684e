//! Supported model identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error parsing a model tag that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelIdError {
    #[error("Unknown model '{0}'")]
    UnknownModel(String),
}

/// One supported model. The string tag is the identity used in configs and on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "llama-70b")]
    Llama70b,
    #[serde(rename = "llama-405b")]
    Llama405b,
    #[serde(rename = "llama-maverick")]
    LlamaMaverick,
    #[serde(rename = "llama-8b")]
    Llama8b,
    #[serde(rename = "llama-scout")]
    LlamaScout,
    #[serde(rename = "gpt-41")]
    Gpt41,
    #[serde(rename = "gpt-5-mini")]
    Gpt5Mini,
    #[serde(rename = "gpt-5-nano")]
    Gpt5Nano,
    #[serde(rename = "gpt-5")]
    Gpt5,
    #[serde(rename = "gpt-4.1-mini")]
    Gpt41Mini,
    #[serde(rename = "gpt-4.1-nano")]
    Gpt41Nano,
    #[serde(rename = "claude-4-opus")]
    Claude4Opus,
    #[serde(rename = "claude-3.5-sonnet")]
    Claude35Sonnet,
    #[serde(rename = "claude-4-sonnet")]
    Claude4Sonnet,
    #[serde(rename = "claude-3.7-sonnet")]
    Claude37Sonnet,
    #[serde(rename = "claude-4.1-opus")]
    Claude41Opus,
    #[serde(rename = "claude-3.5-haiku")]
    Claude35Haiku,
    #[serde(rename = "claude-4.5-sonnet")]
    Claude45Sonnet,
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
}

impl ModelId {
    /// Every supported model, in display order.
    pub const ALL: [ModelId; 21] = [
        ModelId::Llama70b,
        ModelId::Llama405b,
        ModelId::LlamaMaverick,
        ModelId::Llama8b,
        ModelId::LlamaScout,
        ModelId::Gpt41,
        ModelId::Gpt5Mini,
        ModelId::Gpt5Nano,
        ModelId::Gpt5,
        ModelId::Gpt41Mini,
        ModelId::Gpt41Nano,
        ModelId::Claude4Opus,
        ModelId::Claude35Sonnet,
        ModelId::Claude4Sonnet,
        ModelId::Claude37Sonnet,
        ModelId::Claude41Opus,
        ModelId::Claude35Haiku,
        ModelId::Claude45Sonnet,
        ModelId::Gemini25Flash,
        ModelId::Gemini25Pro,
        ModelId::Gemini15Flash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::Llama70b => "llama-70b",
            ModelId::Llama405b => "llama-405b",
            ModelId::LlamaMaverick => "llama-maverick",
            ModelId::Llama8b => "llama-8b",
            ModelId::LlamaScout => "llama-scout",
            ModelId::Gpt41 => "gpt-41",
            ModelId::Gpt5Mini => "gpt-5-mini",
            ModelId::Gpt5Nano => "gpt-5-nano",
            ModelId::Gpt5 => "gpt-5",
            ModelId::Gpt41Mini => "gpt-4.1-mini",
            ModelId::Gpt41Nano => "gpt-4.1-nano",
            ModelId::Claude4Opus => "claude-4-opus",
            ModelId::Claude35Sonnet => "claude-3.5-sonnet",
            ModelId::Claude4Sonnet => "claude-4-sonnet",
            ModelId::Claude37Sonnet => "claude-3.7-sonnet",
            ModelId::Claude41Opus => "claude-4.1-opus",
            ModelId::Claude35Haiku => "claude-3.5-haiku",
            ModelId::Claude45Sonnet => "claude-4.5-sonnet",
            ModelId::Gemini25Flash => "gemini-2.5-flash",
            ModelId::Gemini25Pro => "gemini-2.5-pro",
            ModelId::Gemini15Flash => "gemini-1.5-flash",
        }
    }

    /// Model family, taken from the tag prefix (e.g. "claude" for "claude-3.5-haiku").
    pub fn vendor(self) -> &'static str {
        let tag = self.as_str();
        tag.split_once('-').map(|(family, _)| family).unwrap_or(tag)
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = ModelIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ModelIdError::UnknownModel(s.to_string()))
    }
}
