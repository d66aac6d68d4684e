use std::env;

use crate::core::defaults::BUILTIN_SYSTEM_MESSAGE;

/// Environment variable that replaces the built-in system message.
pub const SYSTEM_MESSAGE_ENV: &str = "DEFAULT_SYSTEM_MESSAGE";

/// Where the default system message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMessageSource {
    Builtin,
    Environment,
}

/// Startup configuration, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub default_system_message: String,
    pub system_message_source: SystemMessageSource,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DEFAULT_SYSTEM_MESSAGE is not valid Unicode")]
    NotUnicode,
}

/// Load configuration from environment.
pub fn load() -> Result<Config, ConfigError> {
    resolve(env::var(SYSTEM_MESSAGE_ENV))
}

/// A set variable replaces the built-in message entirely, even when empty.
fn resolve(var: Result<String, env::VarError>) -> Result<Config, ConfigError> {
    match var {
        Ok(message) => {
            log::debug!("Using system message from {}", SYSTEM_MESSAGE_ENV);
            Ok(Config {
                default_system_message: message,
                system_message_source: SystemMessageSource::Environment,
            })
        }
        Err(env::VarError::NotPresent) => Ok(Config {
            default_system_message: BUILTIN_SYSTEM_MESSAGE.to_string(),
            system_message_source: SystemMessageSource::Builtin,
        }),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_variable_uses_builtin() {
        let config = resolve(Err(env::VarError::NotPresent)).expect("config");
        assert_eq!(config.default_system_message, BUILTIN_SYSTEM_MESSAGE);
        assert_eq!(config.system_message_source, SystemMessageSource::Builtin);
    }

    #[test]
    fn present_variable_replaces_builtin() {
        let config = resolve(Ok("Answer in French.".to_string())).expect("config");
        assert_eq!(config.default_system_message, "Answer in French.");
        assert_eq!(
            config.system_message_source,
            SystemMessageSource::Environment
        );
    }

    #[test]
    fn empty_variable_still_replaces_builtin() {
        let config = resolve(Ok(String::new())).expect("config");
        assert!(config.default_system_message.is_empty());
    }

    #[test]
    fn non_unicode_variable_is_an_error() {
        let err = resolve(Err(env::VarError::NotUnicode("\u{fffd}".into()))).unwrap_err();
        assert!(err.to_string().contains(SYSTEM_MESSAGE_ENV));
    }
}
