use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::io::BufReader;
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::TcpStream;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::ResponseEnvelope;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /clear - Clears the server side conversation history and restores the default model.
- /models - Shows the available models and the currently selected one.
- /model MODEL_NAME - Switches the session to the given model.
- /help - Provides this help menu.
- exit - Exits the client.

Anything else is sent to the server as a chat message.
        "#;

    return text.trim().to_string();
}

/// Scans an `available_models` block for each individually wrapped entry.
fn list_models(available: &str) -> Vec<String> {
    let mut models: Vec<String> = Vec::new();
    let mut rest = available;

    while let Some(model) = ResponseEnvelope::decode(rest, "model") {
        models.push(model);
        let close = "</model>";
        let end = match rest.find(close) {
            Some(idx) => idx + close.len(),
            None => break,
        };
        rest = &rest[end..];
    }

    return models;
}

fn render_command(envelope: &str) {
    let command = ResponseEnvelope::decode(envelope, "command").unwrap_or_default();

    if command == "clear" || command == "model_change" {
        if let Some(message) = ResponseEnvelope::decode(envelope, "message") {
            println!("{message}");
            return;
        }
    }

    if command == "models" {
        if let Some(current_model) = ResponseEnvelope::decode(envelope, "current_model") {
            println!("Current model: {current_model}");
        }

        if let Some(available) = ResponseEnvelope::decode(envelope, "available_models") {
            println!("Available models:");
            for model in list_models(&available) {
                println!("  - {model}");
            }
        }

        if let Some(message) = ResponseEnvelope::decode(envelope, "message") {
            println!("{message}");
        }
        return;
    }

    println!("{envelope}");
}

fn render(envelope: &str) {
    if ResponseEnvelope::decode(envelope, "type").as_deref() == Some("command") {
        println!("\n{}", Paint::cyan("=== Command Result ==="));
        render_command(envelope);
        return;
    }

    let model = ResponseEnvelope::decode(envelope, "model");
    let content = ResponseEnvelope::decode(envelope, "content");

    if let (Some(model), Some(content)) = (model, content) {
        println!("\n{}", Paint::cyan(format!("=== {model} ===")));
        println!("{content}");
        return;
    }

    // Expected fields are missing, show the raw envelope instead.
    println!("\n{envelope}");
}

pub struct Client {}

impl Client {
    pub async fn start() -> Result<()> {
        let host = Config::get(ConfigKey::Host);
        let port = Config::get(ConfigKey::Port);

        let stream = TcpStream::connect(format!("{host}:{port}")).await?;
        let (mut reader, mut writer) = stream.into_split();

        println!("Connected to {host}:{port}");
        println!("Enter a message, type '/help' for commands, or 'exit' to quit.");

        let mut stdin_lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let line = match stdin_lines.next_line().await? {
                Some(line) => line,
                None => break,
            };
            let input = line.trim();

            if input.is_empty() {
                continue;
            }
            if input == "exit" {
                println!("Terminating connection.");
                break;
            }
            if input.eq_ignore_ascii_case("/help") {
                println!("\n{}\n", help_text());
                continue;
            }

            writer.write_all(format!("{input}\n").as_bytes()).await?;

            let envelope = Client::read_envelope(&mut reader).await?;
            render(&envelope);
        }

        return Ok(());
    }

    /// Accumulates chunks until the envelope's closing tag arrives. Replies
    /// may span several reads when the content is long or multi-line.
    async fn read_envelope(reader: &mut OwnedReadHalf) -> Result<String> {
        let mut res = String::new();
        let mut chunk = [0u8; 4096];

        loop {
            let bytes_read = reader.read(&mut chunk).await?;
            if bytes_read == 0 {
                bail!("The server closed the connection");
            }

            res.push_str(&String::from_utf8_lossy(&chunk[..bytes_read]));
            if res.contains("</response>") {
                return Ok(res.trim_end().to_string());
            }
        }
    }
}
