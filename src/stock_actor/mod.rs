//! The stock catalogue: entity rules, custom actions and the [`StockSource`] seam.

mod actions;
pub mod entity;
mod source;

pub use actions::*;
pub use entity::product_number_generator;
pub use source::StockSource;
