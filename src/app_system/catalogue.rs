use rust_decimal::Decimal;
use std::path::Path;

use crate::domain::{ImageHandle, ProductCreate};
use crate::error::CatalogueError;

/// Reads a JSON array of products to seed the stock service with.
///
/// ```json
/// [{ "description": "Toaster", "price": "19.99", "quantity": 5, "image": "pic0003.jpg" }]
/// ```
pub fn load_catalogue(path: impl AsRef<Path>) -> Result<Vec<ProductCreate>, CatalogueError> {
    let raw = std::fs::read_to_string(path)?;
    parse_catalogue(&raw)
}

pub fn parse_catalogue(raw: &str) -> Result<Vec<ProductCreate>, CatalogueError> {
    Ok(serde_json::from_str(raw)?)
}

/// The built-in demonstration catalogue.
pub fn demo_catalogue() -> Vec<ProductCreate> {
    let product = |description: &str, cents: i64, quantity: u32, image: &str| ProductCreate {
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        quantity,
        image: Some(ImageHandle::new(image)),
    };
    vec![
        product("40 inch LED HD TV", 26900, 90, "pic0001.jpg"),
        product("DAB Radio", 2999, 20, "pic0002.jpg"),
        product("Toaster", 1999, 33, "pic0003.jpg"),
        product("Watch", 2999, 10, "pic0004.jpg"),
        product("Digital Camera", 8999, 0, "pic0005.jpg"),
        product("MP3 player", 799, 15, "pic0006.jpg"),
        product("USB Memory Stick", 699, 1, "pic0007.jpg"),
    ]
}
