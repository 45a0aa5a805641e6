use crate::domain::ImageHandle;

/// Custom actions for catalogue entries beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum StockAction {
    /// Returns the product's picture, if one is registered.
    FetchImage,
    /// Adds the given amount to the available stock.
    Restock(u32),
}

/// Results from [`StockAction`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum StockActionResult {
    Image(Option<ImageHandle>),
    /// Stock level after the action was applied.
    StockLevel(u32),
}
