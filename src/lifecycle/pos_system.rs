use crate::clients::{CustomerClient, ItemClient, OrderClient};
use crate::config::ActorConfig;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] JoinError),
}

/// Owns the three actors of the point-of-sale backend.
///
/// - **Customer actor**: customer records, `AttachOrder`
/// - **Item actor**: catalogue and stock, `CheckStock` / `ReserveStock` / `ReleaseStock`
/// - **Order actor**: placed orders; its context is `(CustomerClient, ItemClient)`
///
/// ```ignore
/// let system = PosSystem::new(&config.actors);
/// let app = api::router(system.clients(), config.server.max_upload_bytes);
/// // ... serve ...
/// drop(app);
/// system.shutdown().await?;
/// ```
pub struct PosSystem {
    pub customer_client: CustomerClient,
    pub item_client: ItemClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown).
    /// The order actor comes first: it holds clones of the other two clients.
    handles: Vec<JoinHandle<()>>,
}

/// Cloneable bundle of the three clients, used as the router state.
#[derive(Clone)]
pub struct PosClients {
    pub customers: CustomerClient,
    pub items: ItemClient,
    pub orders: OrderClient,
}

impl PosSystem {
    /// Creates all actors and spawns them on the current Tokio runtime.
    pub fn new(config: &ActorConfig) -> Self {
        // 1. Create actors (no dependencies)
        let (customer_actor, customer_client) = crate::customer_actor::new(config.buffer_size);
        let (item_actor, item_client) = crate::item_actor::new(config.buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);

        // 2. Start actors with injected context
        let order_handle =
            tokio::spawn(order_actor.run((customer_client.clone(), item_client.clone())));
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let item_handle = tokio::spawn(item_actor.run(()));

        info!(buffer_size = config.buffer_size, "POS system started");

        Self {
            customer_client,
            item_client,
            order_client,
            handles: vec![order_handle, customer_handle, item_handle],
        }
    }

    pub fn clients(&self) -> PosClients {
        PosClients {
            customers: self.customer_client.clone(),
            items: self.item_client.clone(),
            orders: self.order_client.clone(),
        }
    }

    /// Drops the system's clients and waits for every actor to drain.
    ///
    /// Clones handed out through [`PosSystem::clients`] must be dropped
    /// first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down POS system...");

        drop(self.order_client);
        drop(self.customer_client);
        drop(self.item_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("POS system shutdown complete.");
        Ok(())
    }
}
