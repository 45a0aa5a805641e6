use crate::domain::{Basket, ImageHandle, ProductRecord};

/// Where a session is in its check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing focused; the basket may still hold lines.
    Idle,
    /// A stock query is in flight.
    Checking,
    /// A product has been checked and the status describes the outcome.
    Focused,
}

/// Everything a display may read after a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    /// Product number of the last check.
    pub focused: Option<String>,
    /// Record returned by the last successful lookup, stock level included.
    pub product: Option<ProductRecord>,
    pub picture: Option<ImageHandle>,
    pub status: String,
    pub basket: Basket,
}

impl SessionState {
    pub fn new(basket: Basket, prompt: impl Into<String>) -> Self {
        Self {
            phase: SessionPhase::Idle,
            focused: None,
            product: None,
            picture: None,
            status: prompt.into(),
            basket,
        }
    }
}
