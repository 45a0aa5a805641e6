//! # stock-basket
//!
//! A customer's shopping basket backed by a stock catalogue service.
//!
//! - [`domain`]: product records, the [`Basket`](domain::Basket) with
//!   merge-by-product-number semantics and its text summary
//! - [`stock_actor`]: catalogue entity rules and the [`StockSource`](stock_actor::StockSource) seam
//! - [`session`]: the per-customer use cases (check, add, remove, clear, send)
//!   and the notification contract observers subscribe to
//! - [`clients`]: handles to the stock and session services
//! - [`app_system`]: startup, seeding, tracing and shutdown
//!
//! ```rust,ignore
//! let mut system = ShopSystem::new(ShopConfig::from_env()?);
//! system.seed(demo_catalogue()).await?;
//!
//! let session = system.open_session();
//! session.subscribe(display::log_display()).await?;
//! session.add_to_basket("0002".into(), 2).await?;
//! let confirmation = session.finalize_order().await?;
//!
//! system.shutdown().await?;
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod session;
pub mod stock_actor;

#[cfg(test)]
mod mock_framework;
