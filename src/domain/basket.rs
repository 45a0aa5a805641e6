//! The customer's basket: products merged by product number.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

use super::ProductRecord;
use crate::error::BasketError;

pub const DEFAULT_CURRENCY: &str = "£";

/// One product number's aggregated requested quantity within a [`Basket`].
pub type BasketLine = ProductRecord;

/// What [`Basket::add`] did with the incoming product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Merged,
}

/// An ordered collection of products holding at most one line per product number.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    lines: Vec<BasketLine>,
    order_num: u32,
    currency: String,
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}

impl Basket {
    pub fn new() -> Self {
        Self::with_currency(DEFAULT_CURRENCY)
    }

    /// Creates an empty basket that renders amounts with `currency` as prefix.
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            order_num: 0,
            currency: currency.into(),
        }
    }

    /// Adds `quantity` of `product` to the basket.
    ///
    /// If a line with the same product number exists its quantity grows by
    /// `quantity`, otherwise a new line is appended. A quantity of zero is
    /// taken as one.
    ///
    /// # Errors
    /// `InvalidArgument` when the product number is blank, the price is
    /// negative, or the merged quantity or basket total would overflow. The
    /// basket is left unchanged.
    pub fn add(&mut self, product: ProductRecord, quantity: u32) -> Result<AddOutcome, BasketError> {
        if product.product_num.trim().is_empty() {
            return Err(BasketError::InvalidArgument(
                "cannot add a product without a product number".to_string(),
            ));
        }
        if product.price < Decimal::ZERO {
            return Err(BasketError::InvalidArgument(format!(
                "product {} has a negative price",
                product.product_num
            )));
        }
        let quantity = quantity.max(1);
        let existing = self
            .lines
            .iter()
            .position(|line| line.product_num == product.product_num);

        let (held, price) = existing.map_or((0, product.price), |i| (self.lines[i].quantity, self.lines[i].price));
        let merged = held.checked_add(quantity).ok_or_else(|| {
            BasketError::InvalidArgument(format!(
                "quantity of product {} would exceed {}",
                product.product_num,
                u32::MAX
            ))
        })?;
        // Every line total and their sum must stay representable.
        let basket_total = price.checked_mul(Decimal::from(merged)).and_then(|new_total| {
            self.lines
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != existing)
                .try_fold(new_total, |acc, (_, line)| acc.checked_add(line_total(line)))
        });
        if basket_total.is_none() {
            return Err(BasketError::InvalidArgument(format!(
                "basket total overflows when adding product {}",
                product.product_num
            )));
        }

        match existing {
            Some(i) => {
                self.lines[i].quantity = merged;
                Ok(AddOutcome::Merged)
            }
            None => {
                self.lines.push(ProductRecord {
                    quantity: merged,
                    ..product
                });
                Ok(AddOutcome::Inserted)
            }
        }
    }

    /// Removes the line for `product_num`. Returns whether a line was removed.
    pub fn remove(&mut self, product_num: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_num != product_num);
        self.lines.len() != before
    }

    /// Removes every line. The order number is left alone.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn set_order_num(&mut self, order_num: u32) {
        self.order_num = order_num;
    }

    /// The order number, `0` while unassigned.
    pub fn order_num(&self) -> u32 {
        self.order_num
    }

    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn get(&self, product_num: &str) -> Option<&BasketLine> {
        self.lines.iter().find(|line| line.product_num == product_num)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines, unrounded.
    ///
    /// [`Basket::add`] refuses any line that would make this overflow.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(line_total).sum()
    }

    /// Renders the basket for display.
    ///
    /// ```text
    /// Widget - £2.50 x 4 = £10.00
    ///
    /// Total Price: £10.00
    /// ```
    pub fn render_summary(&self) -> String {
        let mut summary = String::new();
        for line in &self.lines {
            // Writing to a String cannot fail.
            let _ = writeln!(
                summary,
                "{} - {}{} x {} = {}{}",
                line.description,
                self.currency,
                money(line.price),
                line.quantity,
                self.currency,
                money(line_total(line)),
            );
        }
        let _ = write!(summary, "\nTotal Price: {}{}", self.currency, money(self.total()));
        summary
    }
}

fn line_total(line: &BasketLine) -> Decimal {
    line.price * Decimal::from(line.quantity)
}

/// Formats an amount with exactly two decimal places, rounding half up.
pub fn money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(num: &str, description: &str, price: Decimal) -> ProductRecord {
        ProductRecord::new(num, description, price, 0)
    }

    #[test]
    fn test_add_merges_by_product_number() {
        let mut basket = Basket::new();
        let p1 = record("0001", "Toaster", Decimal::new(1999, 2));

        assert_eq!(basket.add(p1.clone(), 2), Ok(AddOutcome::Inserted));
        assert_eq!(basket.add(p1, 3), Ok(AddOutcome::Merged));

        assert_eq!(basket.len(), 1);
        assert_eq!(basket.get("0001").map(|line| line.quantity), Some(5));
    }

    #[test]
    fn test_merge_invariant_over_mixed_sequence() {
        let mut basket = Basket::new();
        let adds = [("0001", 2), ("0002", 1), ("0001", 4), ("0003", 7), ("0002", 2), ("0001", 1)];
        for (num, qty) in adds {
            basket.add(record(num, num, Decimal::ONE), qty).unwrap();
        }

        assert_eq!(basket.len(), 3);
        for num in ["0001", "0002", "0003"] {
            let expected: u32 = adds.iter().filter(|(n, _)| *n == num).map(|(_, q)| q).sum();
            assert_eq!(basket.get(num).unwrap().quantity, expected);
        }
        let order: Vec<&str> = basket.lines().iter().map(|l| l.product_num.as_str()).collect();
        assert_eq!(order, vec!["0001", "0002", "0003"]);
    }

    #[test]
    fn test_zero_quantity_counts_as_one() {
        let mut basket = Basket::new();
        basket.add(record("0001", "Toaster", Decimal::ONE), 0).unwrap();
        assert_eq!(basket.get("0001").unwrap().quantity, 1);
    }

    #[test]
    fn test_add_rejects_blank_product_number() {
        let mut basket = Basket::new();
        let result = basket.add(record("  ", "Nothing", Decimal::ONE), 1);
        assert!(matches!(result, Err(BasketError::InvalidArgument(_))));
        assert!(basket.is_empty());
    }

    #[test]
    fn test_add_rejects_negative_price() {
        let mut basket = Basket::new();
        let result = basket.add(record("0001", "Refund", Decimal::new(-100, 2)), 1);
        assert!(matches!(result, Err(BasketError::InvalidArgument(_))));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut basket = Basket::new();
        basket.add(record("0001", "Toaster", Decimal::ONE), 1).unwrap();

        assert!(!basket.remove("9999"));
        assert!(basket.remove("0001"));
        assert!(!basket.remove("0001"));
        assert!(basket.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent_and_keeps_order_number() {
        let mut basket = Basket::new();
        basket.set_order_num(7);
        basket.add(record("0001", "Toaster", Decimal::ONE), 1).unwrap();

        basket.clear();
        assert!(basket.is_empty());
        basket.clear();
        assert!(basket.is_empty());
        assert_eq!(basket.order_num(), 7);
    }

    #[test]
    fn test_render_summary_single_line() {
        let mut basket = Basket::new();
        basket.add(record("0001", "Widget", Decimal::new(250, 2)), 4).unwrap();

        assert_eq!(
            basket.render_summary(),
            "Widget - £2.50 x 4 = £10.00\n\nTotal Price: £10.00"
        );
    }

    #[test]
    fn test_render_summary_totals_and_is_stable() {
        let mut basket = Basket::with_currency("$");
        basket.add(record("0001", "Widget", Decimal::new(250, 2)), 4).unwrap();
        basket.add(record("0002", "Gadget", Decimal::new(1, 0)), 3).unwrap();

        let first = basket.render_summary();
        assert_eq!(
            first,
            "Widget - $2.50 x 4 = $10.00\nGadget - $1.00 x 3 = $3.00\n\nTotal Price: $13.00"
        );
        assert_eq!(basket.render_summary(), first);
    }

    #[test]
    fn test_empty_summary_has_zero_total() {
        assert_eq!(Basket::new().render_summary(), "\nTotal Price: £0.00");
    }

    #[test]
    fn test_add_rejects_quantity_overflow() {
        let mut basket = Basket::new();
        basket.add(record("0001", "Pin", Decimal::ONE), u32::MAX).unwrap();

        let result = basket.add(record("0001", "Pin", Decimal::ONE), u32::MAX);
        assert!(matches!(result, Err(BasketError::InvalidArgument(_))));
        assert_eq!(basket.get("0001").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_add_rejects_total_overflow() {
        let mut basket = Basket::new();
        let yacht = record("0001", "Yacht", Decimal::from_str_exact("100000000000000000000").unwrap());

        let result = basket.add(yacht.clone(), 1_000_000_000);
        assert!(matches!(result, Err(BasketError::InvalidArgument(_))));
        assert!(basket.is_empty());

        basket.add(yacht, 1).unwrap();
        let huge = record("0002", "Fleet", Decimal::MAX);
        assert!(basket.add(huge, 1).is_err());
        assert_eq!(basket.len(), 1);
        assert!(basket.render_summary().ends_with("Total Price: £100000000000000000000.00"));
    }

    #[test]
    fn test_money_rounds_half_up() {
        assert_eq!(money(Decimal::new(1005, 3)), "1.01");
        assert_eq!(money(Decimal::new(1004, 3)), "1.00");
        assert_eq!(money(Decimal::new(7, 0)), "7.00");
    }
}
