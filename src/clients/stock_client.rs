use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{ImageHandle, ProductCreate, ProductRecord, StockItem};
use crate::error::StockError;
use crate::stock_actor::{StockAction, StockActionResult, StockSource};

/// Client for the stock catalogue actor.
///
/// Sessions see it only through [`StockSource`]; the remaining methods are for
/// whoever maintains the catalogue.
#[derive(Clone)]
pub struct StockClient {
    inner: ResourceClient<StockItem>,
}

fn stock_error(err: FrameworkError) -> StockError {
    match err {
        FrameworkError::NotFound(id) => StockError::NotFound(id),
        other => StockError::Lookup(other.to_string()),
    }
}

impl StockClient {
    pub fn new(inner: ResourceClient<StockItem>) -> Self {
        Self { inner }
    }

    /// Adds a product and returns the product number it was given.
    #[instrument(skip(self, payload), fields(description = %payload.description))]
    pub async fn create_product(&self, payload: ProductCreate) -> Result<String, StockError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(stock_error)
    }

    /// Adds `amount` to the available stock and returns the new level.
    #[instrument(skip(self))]
    pub async fn restock(&self, product_num: String, amount: u32) -> Result<u32, StockError> {
        debug!("Sending request");
        match self.inner.perform_action(product_num, StockAction::Restock(amount)).await {
            Ok(StockActionResult::StockLevel(level)) => Ok(level),
            Ok(other) => Err(StockError::Lookup(format!("Unexpected result: {:?}", other))),
            Err(e) => Err(stock_error(e)),
        }
    }

    async fn item(&self, product_num: &str) -> Result<Option<StockItem>, StockError> {
        self.inner.get(product_num.to_string()).await.map_err(stock_error)
    }
}

#[async_trait]
impl StockSource for StockClient {
    #[instrument(skip(self))]
    async fn exists(&self, product_num: &str) -> Result<bool, StockError> {
        debug!("Sending request");
        Ok(self.item(product_num).await?.is_some())
    }

    #[instrument(skip(self))]
    async fn get_details(&self, product_num: &str) -> Result<ProductRecord, StockError> {
        debug!("Sending request");
        self.item(product_num)
            .await?
            .map(|item| item.record)
            .ok_or_else(|| StockError::NotFound(product_num.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_image(&self, product_num: &str) -> Result<Option<ImageHandle>, StockError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(product_num.to_string(), StockAction::FetchImage)
            .await
        {
            Ok(StockActionResult::Image(image)) => Ok(image),
            Ok(other) => Err(StockError::Lookup(format!("Unexpected result: {:?}", other))),
            Err(e) => Err(stock_error(e)),
        }
    }

    #[instrument(skip(self))]
    async fn list_product_numbers(&self) -> Result<Vec<String>, StockError> {
        debug!("Sending request");
        self.inner.list().await.map_err(stock_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_client, expect_action, expect_get, expect_list};
    use rust_decimal::Decimal;

    fn watch() -> StockItem {
        StockItem {
            record: ProductRecord::new("0004", "Watch", Decimal::new(4999, 2), 3),
            image: Some(ImageHandle::new("pic0004.jpg")),
        }
    }

    #[tokio::test]
    async fn test_get_details_flow() {
        let (inner, mut rx) = create_mock_client::<StockItem>(10);
        let client = StockClient::new(inner);

        let task = tokio::spawn(async move { client.get_details("0004").await });

        let (id, responder) = expect_get(&mut rx).await.expect("Expected Get");
        assert_eq!(id, "0004");
        responder.send(Ok(Some(watch()))).unwrap();

        let record = task.await.unwrap().unwrap();
        assert_eq!(record.description, "Watch");
        assert_eq!(record.quantity, 3);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let (inner, mut rx) = create_mock_client::<StockItem>(10);
        let client = StockClient::new(inner);

        let task = tokio::spawn(async move {
            let exists = client.exists("0099").await;
            let details = client.get_details("0099").await;
            (exists, details)
        });

        let (_, responder) = expect_get(&mut rx).await.expect("Expected Get");
        responder.send(Ok(None)).unwrap();
        let (_, responder) = expect_get(&mut rx).await.expect("Expected Get");
        responder.send(Ok(None)).unwrap();

        let (exists, details) = task.await.unwrap();
        assert_eq!(exists, Ok(false));
        assert_eq!(details, Err(StockError::NotFound("0099".to_string())));
    }

    #[tokio::test]
    async fn test_get_image_uses_fetch_action() {
        let (inner, mut rx) = create_mock_client::<StockItem>(10);
        let client = StockClient::new(inner);

        let task = tokio::spawn(async move { client.get_image("0004").await });

        let (id, action, responder) = expect_action(&mut rx).await.expect("Expected Action");
        assert_eq!(id, "0004");
        assert!(matches!(action, StockAction::FetchImage));
        responder
            .send(Ok(StockActionResult::Image(Some(ImageHandle::new("pic0004.jpg")))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(Some(ImageHandle::new("pic0004.jpg"))));
    }

    #[tokio::test]
    async fn test_list_and_dropped_actor() {
        let (inner, mut rx) = create_mock_client::<StockItem>(10);
        let client = StockClient::new(inner);

        let task = tokio::spawn(async move { client.list_product_numbers().await });
        let responder = expect_list(&mut rx).await.expect("Expected List");
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(StockError::Lookup(_))));
    }
}
