use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::clients::{SessionClient, StockClient};
use crate::config::ShopConfig;
use crate::domain::{ProductCreate, StockItem};
use crate::error::StockError;
use crate::session::{CustomerSession, SessionService};
use crate::stock_actor::product_number_generator;

/// Starts the stock service and customer sessions, and shuts them down.
///
/// Each session gets its own service task and a clone of the stock client,
/// so sessions never share a basket but do share the catalogue.
pub struct ShopSystem {
    pub stock_client: StockClient,
    config: ShopConfig,
    sessions: Vec<SessionClient>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    #[instrument(name = "shop_system", skip(config))]
    pub fn new(config: ShopConfig) -> Self {
        info!("Starting shop system");

        let (stock_actor, stock_resource_client) =
            ResourceActor::<StockItem>::new(config.channel_buffer, product_number_generator());
        let stock_handle = tokio::spawn(stock_actor.run());

        info!("Stock service started");

        Self {
            stock_client: StockClient::new(stock_resource_client),
            config,
            sessions: Vec::new(),
            handles: vec![stock_handle],
        }
    }

    /// Adds every product to the catalogue, returning the issued product numbers in order.
    #[instrument(skip(self, catalogue), fields(products = catalogue.len()))]
    pub async fn seed(&self, catalogue: Vec<ProductCreate>) -> Result<Vec<String>, StockError> {
        let mut numbers = Vec::with_capacity(catalogue.len());
        for product in catalogue {
            numbers.push(self.stock_client.create_product(product).await?);
        }
        info!(count = numbers.len(), "Catalogue seeded");
        Ok(numbers)
    }

    /// Opens a fresh customer session with an empty basket.
    #[instrument(skip(self))]
    pub fn open_session(&mut self) -> SessionClient {
        let session = CustomerSession::new(self.stock_client.clone(), &self.config);
        let (service, client) = SessionService::new(self.config.channel_buffer, session);
        self.handles.push(tokio::spawn(service.run()));
        self.sessions.push(client.clone());
        info!(sessions = self.sessions.len(), "Session opened");
        client
    }

    /// Stops sessions first, then the stock service once its last client is gone.
    ///
    /// Clones of `stock_client` held elsewhere keep the stock service alive; drop them first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system");

        for session in &self.sessions {
            let _ = session.shutdown().await;
        }
        drop(self.sessions);
        drop(self.stock_client);

        // Session handles come after the stock handle; join them first.
        let mut failed = None;
        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                failed = Some(format!("Service task failed: {:?}", e));
            }
        }

        info!("Shop system shutdown complete");
        failed.map_or(Ok(()), Err)
    }
}
