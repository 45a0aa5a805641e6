use tracing::{error, info, warn, Instrument};

use stock_basket::app_system::{demo_catalogue, load_catalogue, setup_tracing, ShopSystem};
use stock_basket::config::ShopConfig;
use stock_basket::display;
use stock_basket::error::SessionError;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ShopConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!("Starting customer client");

    let catalogue = match std::env::args().nth(1) {
        Some(path) => load_catalogue(&path).map_err(|e| e.to_string())?,
        None => demo_catalogue(),
    };

    let mut system = ShopSystem::new(config);
    let numbers = system.seed(catalogue).await.map_err(|e| e.to_string())?;
    info!(products = numbers.len(), "Catalogue ready");

    let session = system.open_session();
    session
        .subscribe(display::log_display())
        .await
        .map_err(|e| e.to_string())?;
    session.request_update().await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("browsing");
    async {
        for product_num in ["0001", "ZZZZZ", "0005"] {
            match session.check(product_num.to_string()).await {
                Ok(status) => info!(%status, "Checked product"),
                Err(e) => error!(error = %e, "Check failed"),
            }
        }
        session.clear().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("ordering");
    let order = async {
        session.add_to_basket("0002".to_string(), 2).await?;
        session.add_to_basket("0002".to_string(), 3).await?;
        session.add_to_basket("0006".to_string(), 1).await?;
        session.remove_from_basket("0006".to_string()).await?;
        session.finalize_order().await
    }
    .instrument(span)
    .await;

    match order {
        Ok(confirmation) => info!("Order sent\n{}", confirmation.details()),
        Err(e) => error!(error = %e, "Order failed"),
    }

    match session.finalize_order().await {
        Err(SessionError::EmptyBasket) => warn!("Nothing left to send"),
        Err(e) => error!(error = %e, "Unexpected finalize failure"),
        Ok(_) => error!("Basket should have been empty"),
    }

    drop(session);
    system.shutdown().await?;

    info!("Customer client finished");
    Ok(())
}
