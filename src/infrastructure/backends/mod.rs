pub mod ollama;
pub mod openai;

use anyhow::Result;

use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;

pub struct BackendManager {}

impl BackendManager {
    pub fn get(name: &str) -> Result<BackendBox> {
        let backend = BackendName::parse(name)?;
        if backend == BackendName::OpenAI {
            return Ok(Box::<openai::OpenAI>::default());
        }

        return Ok(Box::<ollama::Ollama>::default());
    }
}
