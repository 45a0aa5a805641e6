use thiserror::Error;

/// Errors raised by [`Basket`](crate::domain::Basket) mutations.
///
/// These are contract violations by the caller and are never swallowed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BasketError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors reported by a [`StockSource`](crate::stock_actor::StockSource).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StockError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Stock lookup failed: {0}")]
    Lookup(String),
}

/// Errors surfaced by a customer session to its caller.
///
/// Stock lookups never appear here: the session turns them into status messages.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Your basket is empty")]
    EmptyBasket,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<BasketError> for SessionError {
    fn from(err: BasketError) -> Self {
        match err {
            BasketError::InvalidArgument(msg) => SessionError::InvalidArgument(msg),
        }
    }
}

/// Errors raised while reading [`ShopConfig`](crate::config::ShopConfig) from the environment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors raised while loading a catalogue seed file.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("Could not read catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed catalogue: {0}")]
    Json(#[from] serde_json::Error),
}
