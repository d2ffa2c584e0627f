use crate::clients::EngineClient;
use crate::config::EngineConfig;
use crate::engine;
use entity_actor::ActorClient;
use tokio::task::JoinHandle;
use tracing::info;

/// A running forum: the engine actor and the client to reach it.
pub struct ForumSystem {
    pub engine: EngineClient,
    handle: JoinHandle<()>,
}

impl ForumSystem {
    /// Starts a forum with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        let (actor, engine) = engine::new(config);
        let handle = tokio::spawn(actor.run());
        info!(node = %config.node, "Forum system started");

        Self { engine, handle }
    }

    /// Stops the engine (and with it the whole tree) and waits for its loop to exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down forum system");
        self.engine.stop().map_err(|e| e.to_string())?;
        self.handle.await.map_err(|e| e.to_string())?;
        info!("Forum system stopped");
        Ok(())
    }
}

impl Default for ForumSystem {
    fn default() -> Self {
        Self::new()
    }
}
