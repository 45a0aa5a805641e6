//! # Mock Framework
//!
//! Utilities for testing clients and sessions in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then helpers like
//! [`expect_get`] or [`expect_action`] to assert what the client sent and to
//! answer it. [`FakeStock`] is an in-memory [`StockSource`] with failure
//! injection for session tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::domain::{ImageHandle, ProductRecord};
use crate::error::StockError;
use crate::stock_actor::StockSource;

/// Creates a mock client and the receiver its requests land on.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T::Id>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[derive(Default)]
struct FakeStockInner {
    items: BTreeMap<String, (ProductRecord, Option<ImageHandle>)>,
    failing: bool,
    failing_images: bool,
}

/// Scriptable stock source. Clones share the same catalogue.
#[derive(Clone, Default)]
pub struct FakeStock {
    inner: Arc<Mutex<FakeStockInner>>,
}

impl FakeStock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: ProductRecord, image: Option<ImageHandle>) {
        let mut inner = self.inner.lock().unwrap();
        inner.items.insert(record.product_num.clone(), (record, image));
    }

    /// While set, every call fails with a lookup error.
    pub fn fail_lookups(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    /// While set, only `get_image` fails; the other lookups still answer.
    pub fn fail_images(&self, failing: bool) {
        self.inner.lock().unwrap().failing_images = failing;
    }

    fn with_items<R>(&self, f: impl FnOnce(&BTreeMap<String, (ProductRecord, Option<ImageHandle>)>) -> R) -> Result<R, StockError> {
        let inner = self.inner.lock().unwrap();
        if inner.failing {
            return Err(StockError::Lookup("stock source unreachable".to_string()));
        }
        Ok(f(&inner.items))
    }
}

#[async_trait]
impl StockSource for FakeStock {
    async fn exists(&self, product_num: &str) -> Result<bool, StockError> {
        self.with_items(|items| items.contains_key(product_num))
    }

    async fn get_details(&self, product_num: &str) -> Result<ProductRecord, StockError> {
        self.with_items(|items| items.get(product_num).map(|(record, _)| record.clone()))?
            .ok_or_else(|| StockError::NotFound(product_num.to_string()))
    }

    async fn get_image(&self, product_num: &str) -> Result<Option<ImageHandle>, StockError> {
        if self.inner.lock().unwrap().failing_images {
            return Err(StockError::Lookup("image store unreachable".to_string()));
        }
        self.with_items(|items| items.get(product_num).map(|(_, image)| image.clone()))?
            .ok_or_else(|| StockError::NotFound(product_num.to_string()))
    }

    async fn list_product_numbers(&self) -> Result<Vec<String>, StockError> {
        self.with_items(|items| items.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StockItem;
    use crate::stock_actor::{StockAction, StockActionResult};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<StockItem>(10);

        let action_task = tokio::spawn(async move {
            client.perform_action("0001".to_string(), StockAction::FetchImage).await
        });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "0001");
        assert!(matches!(action, StockAction::FetchImage));
        responder.send(Ok(StockActionResult::Image(None))).unwrap();

        let result = action_task.await.unwrap();
        assert_eq!(result, Ok(StockActionResult::Image(None)));
    }

    #[tokio::test]
    async fn test_fake_stock_failure_injection() {
        let stock = FakeStock::new();
        stock.insert(ProductRecord::new("0001", "Watch", Decimal::ONE, 1), None);
        assert_eq!(stock.exists("0001").await, Ok(true));

        stock.fail_images(true);
        assert_eq!(stock.exists("0001").await, Ok(true));
        assert!(matches!(stock.get_image("0001").await, Err(StockError::Lookup(_))));

        stock.fail_lookups(true);
        assert!(matches!(stock.exists("0001").await, Err(StockError::Lookup(_))));
    }
}
