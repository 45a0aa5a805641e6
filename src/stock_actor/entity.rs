use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::actions::{StockAction, StockActionResult};
use crate::actor_framework::Entity;
use crate::domain::{ProductCreate, ProductPatch, ProductRecord, StockItem};

impl Entity for StockItem {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = StockAction;
    type ActionResult = StockActionResult;

    fn id(&self) -> &String {
        &self.record.product_num
    }

    /// Creates a catalogue entry under the issued product number.
    ///
    /// # Errors
    /// Rejects a negative price or an empty description.
    fn from_create(id: String, payload: ProductCreate) -> Result<Self, String> {
        if payload.price < Decimal::ZERO {
            return Err(format!("Negative price {} for product {}", payload.price, id));
        }
        if payload.description.trim().is_empty() {
            return Err(format!("Product {} needs a description", id));
        }
        Ok(Self {
            record: ProductRecord::new(id, payload.description, payload.price, payload.quantity),
            image: payload.image,
        })
    }

    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(price) = patch.price {
            if price < Decimal::ZERO {
                return Err(format!("Negative price {}", price));
            }
            self.record.price = price;
        }
        if let Some(description) = patch.description {
            self.record.description = description;
        }
        if let Some(quantity) = patch.quantity {
            self.record.quantity = quantity;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: StockAction) -> Result<StockActionResult, String> {
        match action {
            StockAction::FetchImage => Ok(StockActionResult::Image(self.image.clone())),
            StockAction::Restock(amount) => {
                self.record.quantity = self
                    .record
                    .quantity
                    .checked_add(amount)
                    .ok_or_else(|| format!("Restocking {} by {} overflows", self.record.product_num, amount))?;
                Ok(StockActionResult::StockLevel(self.record.quantity))
            }
        }
    }
}

/// Issues catalogue product numbers `0001`, `0002`, ...
pub fn product_number_generator() -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{:04}", id)
    }
}
