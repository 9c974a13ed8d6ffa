#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use clap::ArgMatches;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    Backend,
    BackendHealthCheckTimeout,
    HistoryLimit,
    Host,
    Model,
    Models,
    OllamaURL,
    OpenAiToken,
    OpenAiURL,
    Port,
    SystemPrompt,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::Backend => "ollama",
            ConfigKey::BackendHealthCheckTimeout => "1000",
            ConfigKey::HistoryLimit => "10",
            ConfigKey::Host => "127.0.0.1",
            ConfigKey::Model => "llama3",
            ConfigKey::Models => "llama3,mistral",
            ConfigKey::OllamaURL => "http://localhost:11434",
            ConfigKey::OpenAiToken => "",
            ConfigKey::OpenAiURL => "https://api.openai.com",
            ConfigKey::Port => "3000",
            ConfigKey::SystemPrompt => {
                "You are a helpful assistant. Keep your responses concise."
            }
        };

        return res.to_string();
    }

    /// Loads every config key from the provided matches, with later matches
    /// taking priority over earlier ones, and defaults filling the gaps.
    pub fn load(matches: Vec<&ArgMatches>) {
        for key in ConfigKey::iter() {
            let mut value = Config::default(key);

            for matches_instance in &matches {
                if let Ok(Some(val)) =
                    matches_instance.try_get_one::<String>(&key.to_string())
                {
                    value = val.to_string();
                }
            }

            Config::set(key, &value);
        }
    }
}
