#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use strum::EnumVariantNames;

use super::Message;

pub type BackendBox = Box<dyn Backend + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendName {
    Ollama,
    OpenAI,
}

impl BackendName {
    pub fn parse(text: &str) -> Result<BackendName> {
        if text == "ollama" {
            return Ok(BackendName::Ollama);
        }

        if text == "openai" {
            return Ok(BackendName::OpenAI);
        }

        bail!(format!("There is no backend named {text}"))
    }
}

#[async_trait]
pub trait Backend {
    fn name(&self) -> BackendName;

    /// Used at startup to verify all configurations are available to work
    /// with the backend.
    async fn health_check(&self) -> Result<()>;

    /// Requests a completion for the given conversation history. The first
    /// entry of `messages` is the system message, the rest alternate between
    /// user and assistant turns in chronological order.
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String>;
}
