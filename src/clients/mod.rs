mod macros;
mod session_client;
mod stock_client;

pub use session_client::SessionClient;
pub use stock_client::StockClient;
