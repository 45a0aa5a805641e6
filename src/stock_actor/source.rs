use async_trait::async_trait;

use crate::domain::{ImageHandle, ProductRecord};
use crate::error::StockError;

/// Read-only view of the inventory that a customer session consults.
///
/// Implementations must be safe to share between sessions.
#[async_trait]
pub trait StockSource: Send + Sync {
    async fn exists(&self, product_num: &str) -> Result<bool, StockError>;

    /// Current details; `quantity` is the available stock.
    async fn get_details(&self, product_num: &str) -> Result<ProductRecord, StockError>;

    async fn get_image(&self, product_num: &str) -> Result<Option<ImageHandle>, StockError>;

    async fn list_product_numbers(&self) -> Result<Vec<String>, StockError>;
}
