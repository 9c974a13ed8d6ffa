use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use tokio::net::TcpListener;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendBox;
use crate::domain::models::ModelCatalog;
use crate::domain::services::session::SessionService;
use crate::domain::services::Sessions;
use crate::infrastructure::backends::BackendManager;

pub struct Server {}

impl Server {
    pub async fn start() -> Result<()> {
        let host = Config::get(ConfigKey::Host);
        let port = Config::get(ConfigKey::Port)
            .parse::<u16>()
            .context("The port must be a number between 1 and 65535")?;
        let history_limit = Config::get(ConfigKey::HistoryLimit)
            .parse::<usize>()
            .context("The history limit must be a positive number")?;

        let catalog = Arc::new(ModelCatalog::from_config()?);
        let backend: Arc<BackendBox> = Arc::new(BackendManager::get(&Config::get(ConfigKey::Backend))?);

        if let Err(err) = backend.health_check().await {
            tracing::warn!(backend = %backend.name(), error = %err, "Backend health check failed, continuing anyway");
        }

        let sessions = Arc::new(Sessions::new(
            catalog,
            &Config::get(ConfigKey::SystemPrompt),
            history_limit,
        ));

        let listener = TcpListener::bind(format!("{host}:{port}"))
            .await
            .with_context(|| return format!("Failed to bind {host}:{port}"))?;

        tracing::info!(host = %host, port, backend = %backend.name(), "Listening for connections");

        loop {
            tokio::select!(
                res = listener.accept() => {
                    let (stream, addr) = res?;
                    let id = addr.to_string();
                    let task_sessions = sessions.clone();
                    let task_backend = backend.clone();

                    tokio::spawn(async move {
                        // Session errors are transport-level and already
                        // logged inside the session service.
                        let _ = SessionService::run(stream, &id, task_sessions, task_backend).await;
                    });
                },
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received interrupt, shutting down");
                    return Ok(());
                },
            );
        }
    }
}
