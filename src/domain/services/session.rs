#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::ResponseEnvelope;
use super::Session;
use super::Sessions;
use crate::domain::models::BackendBox;
use crate::domain::models::Command;
use crate::domain::models::ModelCatalog;
use crate::domain::models::Role;

const CHUNK_SIZE: usize = 4096;

pub struct SessionService {}

impl SessionService {
    /// Drives one connection from accept to teardown. The session entry is
    /// registered up front and released when the peer disconnects or the
    /// transport errors, whichever comes first.
    pub async fn run<S>(
        stream: S,
        id: &str,
        sessions: Arc<Sessions>,
        backend: Arc<BackendBox>,
    ) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let session = sessions.open(id);
        tracing::info!(session_id = %id, active = sessions.count(), "Session opened");

        let res = SessionService::serve(stream, &session, sessions.catalog(), &backend).await;

        sessions.close(id);
        if let Err(err) = &res {
            tracing::warn!(session_id = %id, error = %err, "Session ended with a transport error");
        } else {
            tracing::info!(session_id = %id, "Session closed");
        }

        return res;
    }

    /// Reads chunks, frames them into lines, and answers each line in
    /// arrival order. A batch of lines from a single chunk is processed
    /// strictly sequentially, so outgoing envelopes mirror incoming lines;
    /// bytes arriving during a backend call queue in the transport and are
    /// framed on the next read.
    async fn serve<S>(
        stream: S,
        session: &Arc<Mutex<Session>>,
        catalog: &ModelCatalog,
        backend: &BackendBox,
    ) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let (mut reader, mut writer) = tokio::io::split(stream);
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            let bytes_read = reader.read(&mut chunk).await?;
            if bytes_read == 0 {
                return Ok(());
            }

            let (lines, buffered) = {
                let mut session = session.lock().await;
                let lines = session.framer.feed(&chunk[..bytes_read]);
                (lines, session.framer.buffered().len())
            };
            tracing::trace!(bytes = bytes_read, lines = lines.len(), buffered, "Chunk framed");

            for line in lines {
                if let Some(command) = Command::parse(&line) {
                    let envelope =
                        SessionService::dispatch(session, catalog, backend, command).await;
                    writer.write_all(envelope.as_bytes()).await?;
                }
            }
        }
    }

    async fn dispatch(
        session: &Arc<Mutex<Session>>,
        catalog: &ModelCatalog,
        backend: &BackendBox,
        command: Command,
    ) -> String {
        match command {
            Command::Reset => {
                let mut session = session.lock().await;
                session.conversation.reset(catalog);
                tracing::debug!(session_id = %session.id, "Conversation reset");
                return ResponseEnvelope::clear();
            }
            Command::ListModels => {
                let session = session.lock().await;
                return ResponseEnvelope::models(session.conversation.model(), catalog.models());
            }
            Command::SetModel(name) => {
                let mut session = session.lock().await;
                let success = session.conversation.set_model(catalog, &name);
                let message = if success {
                    format!("Model changed to {name}.")
                } else {
                    format!("Model {name} is not available.")
                };

                tracing::debug!(session_id = %session.id, model = %name, success, "Model change requested");
                return ResponseEnvelope::model_change(success, &name, &message);
            }
            Command::Chat(text) => {
                return SessionService::chat(session, backend, &text).await;
            }
        }
    }

    async fn chat(session: &Arc<Mutex<Session>>, backend: &BackendBox, text: &str) -> String {
        let (model, messages) = {
            let mut session = session.lock().await;
            session.conversation.append(Role::User, text);
            (
                session.conversation.model().to_string(),
                session.conversation.messages().to_vec(),
            )
        };

        let content = match backend.complete(&model, &messages).await {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(error = %err, model = %model, "Backend completion failed");
                format!("The backend failed with the following error: {err}")
            }
        };

        // The reply is recorded even when it carries an error description, so
        // the context stays consistent for the next turn.
        session.lock().await.conversation.append(Role::Assistant, &content);

        return ResponseEnvelope::chat(&model, &content);
    }
}
