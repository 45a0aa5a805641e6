use std::fmt::Write;

use super::{Basket, BasketLine};

/// What a customer committed when their basket was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Order number carried by the basket, `0` while unassigned.
    pub order_num: u32,
    pub lines: Vec<BasketLine>,
    /// The basket summary as it was rendered before clearing.
    pub summary: String,
}

impl OrderConfirmation {
    pub fn from_basket(basket: &Basket) -> Self {
        Self {
            order_num: basket.order_num(),
            lines: basket.lines().to_vec(),
            summary: basket.render_summary(),
        }
    }

    /// Short listing of what was ordered, one `<number> - <description> x <quantity>` per line.
    pub fn details(&self) -> String {
        let mut details = String::from("Order Details:\n\n");
        for line in &self.lines {
            let _ = writeln!(
                details,
                "{} - {} x {}",
                line.product_num, line.description, line.quantity
            );
        }
        details
    }
}
