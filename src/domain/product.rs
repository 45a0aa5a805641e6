use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalogue entry at a point in time.
///
/// `quantity` is the available stock when read from a stock source and the
/// amount held when the record sits inside a basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_num: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl ProductRecord {
    pub fn new(
        product_num: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            product_num: product_num.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Returns a copy of this record holding `quantity` instead of the stock level.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// Reference to a product picture held by the stock source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle(pub String);

impl ImageHandle {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn location(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product as stored by the stock service, with its picture.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub record: ProductRecord,
    pub image: Option<ImageHandle>,
}

/// Payload for adding a product to the catalogue.
///
/// The product number is issued by the stock service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub description: String,
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<ImageHandle>,
}

/// Payload for updating an existing catalogue entry.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}
