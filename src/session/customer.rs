//! Customer-facing use cases: check a product, build a basket, send it.

use tracing::{debug, error, info, instrument, warn};

use super::{Notification, Observer, SessionPhase, SessionState};
use crate::config::ShopConfig;
use crate::domain::{money, Basket, ImageHandle, OrderConfirmation, ProductRecord};
use crate::error::{SessionError, StockError};
use crate::stock_actor::StockSource;

/// Result of looking a product up for a check.
#[derive(Debug)]
enum CheckOutcome {
    Unknown,
    OutOfStock(ProductRecord),
    Available {
        record: ProductRecord,
        picture: Option<ImageHandle>,
    },
}

/// One customer's interaction with the shop.
///
/// Every operation runs to completion against the session's own basket, then
/// notifies the registered observers. Stock failures become status text or
/// log entries; only caller mistakes and an empty send are returned as errors.
pub struct CustomerSession<S: StockSource> {
    stock: S,
    state: SessionState,
    observers: Vec<Observer>,
    prompt: String,
}

impl<S: StockSource> CustomerSession<S> {
    pub fn new(stock: S, config: &ShopConfig) -> Self {
        Self {
            stock,
            state: SessionState::new(Basket::with_currency(&config.currency_symbol), &config.prompt),
            observers: Vec::new(),
            prompt: config.prompt.clone(),
        }
    }

    /// Registers a handler called synchronously after each state change.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn basket(&self) -> &Basket {
        &self.state.basket
    }

    pub fn status(&self) -> &str {
        &self.state.status
    }

    /// Picture of the product from the last successful check.
    pub fn picture(&self) -> Option<&ImageHandle> {
        self.state.picture.as_ref()
    }

    /// Checks a single product, replacing whatever the basket held.
    ///
    /// An in-stock product is placed in the basket with quantity one and its
    /// picture is cached. Returns the status shown to the customer.
    ///
    /// A failed lookup, including a failed picture fetch for an in-stock
    /// product, keeps the previous status and leaves the session idle with an
    /// empty basket and no focused product or picture.
    ///
    /// # Errors
    /// `InvalidArgument` if the stock source hands back a record the basket
    /// refuses. The basket is empty and no notification is emitted in that case.
    #[instrument(skip(self))]
    pub async fn check(&mut self, product_num: &str) -> Result<String, SessionError> {
        self.state.basket.clear();
        let pn = product_num.trim().to_string();
        self.state.phase = SessionPhase::Checking;
        self.state.focused = Some(pn.clone());

        match self.lookup(&pn).await {
            Ok(CheckOutcome::Unknown) => {
                info!("Unknown product number");
                self.state.phase = SessionPhase::Focused;
                self.state.status = format!("Unknown product number {}", pn);
                self.state.product = None;
                self.state.picture = None;
            }
            Ok(CheckOutcome::OutOfStock(record)) => {
                info!(description = %record.description, "Product not in stock");
                self.state.phase = SessionPhase::Focused;
                self.state.status = format!("{} not in stock", record.description);
                self.state.product = Some(record);
                self.state.picture = None;
            }
            Ok(CheckOutcome::Available { record, picture }) => {
                if let Err(e) = self.state.basket.add(record.with_quantity(1), 1) {
                    self.unfocus();
                    return Err(e.into());
                }
                self.state.phase = SessionPhase::Focused;
                info!(description = %record.description, available = record.quantity, "Product in stock");
                self.state.status = format!(
                    "{} : {:>7} ({:>2})",
                    record.description,
                    money(record.price),
                    record.quantity
                );
                self.state.product = Some(record);
                self.state.picture = picture;
            }
            Err(e) => {
                error!(error = %e, "Stock lookup failed during check");
                self.unfocus();
            }
        }

        let status = self.state.status.clone();
        self.notify(Some(&status));
        Ok(status)
    }

    fn unfocus(&mut self) {
        self.state.phase = SessionPhase::Idle;
        self.state.focused = None;
        self.state.product = None;
        self.state.picture = None;
    }

    async fn lookup(&self, pn: &str) -> Result<CheckOutcome, StockError> {
        if !self.stock.exists(pn).await? {
            return Ok(CheckOutcome::Unknown);
        }
        let record = match self.stock.get_details(pn).await {
            Ok(record) => record,
            Err(StockError::NotFound(_)) => return Ok(CheckOutcome::Unknown),
            Err(e) => return Err(e),
        };
        if record.quantity < 1 {
            return Ok(CheckOutcome::OutOfStock(record));
        }
        let picture = self.stock.get_image(pn).await?;
        Ok(CheckOutcome::Available { record, picture })
    }

    /// Empties the basket and returns the session to its prompt.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.state.basket.clear();
        self.unfocus();
        self.state.status = self.prompt.clone();
        info!("Session cleared");
        let status = self.state.status.clone();
        self.notify(Some(&status));
    }

    /// Adds `quantity` of a product to the basket, merging with an existing line.
    ///
    /// A zero quantity is refused here with a warning and no notification.
    #[instrument(skip(self))]
    pub async fn add_to_basket(&mut self, product_num: &str, quantity: u32) -> Result<(), SessionError> {
        let pn = product_num.trim();
        if quantity == 0 {
            warn!("Invalid quantity specified: 0");
            return Ok(());
        }

        match self.fetch(pn).await {
            Ok(Some(record)) => {
                let outcome = self.state.basket.add(record.with_quantity(quantity), quantity)?;
                info!(?outcome, description = %record.description, "Added to basket");
                let status = format!("Added {} x {} to the basket", record.description, quantity);
                self.state.status = status.clone();
                self.state.product = Some(record);
                self.notify(Some(&status));
            }
            Ok(None) => {
                info!("Product not found in stock");
                let status = format!("Product {} not found", pn);
                self.state.status = status.clone();
                self.notify(Some(&status));
            }
            Err(e) => {
                error!(error = %e, "Stock lookup failed while adding to basket");
            }
        }
        Ok(())
    }

    async fn fetch(&self, pn: &str) -> Result<Option<ProductRecord>, StockError> {
        if !self.stock.exists(pn).await? {
            return Ok(None);
        }
        match self.stock.get_details(pn).await {
            Ok(record) => Ok(Some(record)),
            Err(StockError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Drops the line for `product_num`, if any. Always notifies once.
    #[instrument(skip(self))]
    pub fn remove_from_basket(&mut self, product_num: &str) {
        let removed = self.state.basket.remove(product_num.trim());
        debug!(removed, "Remove from basket");
        self.notify(None);
    }

    /// Commits the basket: renders it, clears it, returns to the prompt and notifies.
    ///
    /// # Errors
    /// `EmptyBasket` when there is nothing to send. No notification is emitted then.
    #[instrument(skip(self))]
    pub fn finalize_order(&mut self) -> Result<OrderConfirmation, SessionError> {
        if self.state.basket.is_empty() {
            warn!("Basket is empty. Nothing to send.");
            return Err(SessionError::EmptyBasket);
        }
        let confirmation = OrderConfirmation::from_basket(&self.state.basket);
        self.state.basket.clear();
        self.state.phase = SessionPhase::Idle;
        self.state.status = self.prompt.clone();
        info!(lines = confirmation.lines.len(), "Basket sent");
        self.notify(None);
        Ok(confirmation)
    }

    /// Every catalogue product with its current details.
    ///
    /// A failed lookup is logged and the products gathered up to that point are returned.
    #[instrument(skip(self))]
    pub async fn available_products(&self) -> Vec<ProductRecord> {
        let numbers = match self.stock.list_product_numbers().await {
            Ok(numbers) => numbers,
            Err(e) => {
                error!(error = %e, "Could not list catalogue");
                return Vec::new();
            }
        };

        let mut products = Vec::with_capacity(numbers.len());
        for pn in numbers {
            match self.stock.get_details(&pn).await {
                Ok(record) => products.push(record),
                Err(e) => {
                    error!(product_num = %pn, error = %e, "Could not fetch product details");
                    break;
                }
            }
        }
        debug!(count = products.len(), "Catalogue listed");
        products
    }

    /// Notifies observers without changing anything, so a new display can draw itself.
    pub fn request_update(&mut self) {
        self.notify(None);
    }

    fn notify(&mut self, message: Option<&str>) {
        let notification = Notification {
            state: &self.state,
            message,
        };
        for observer in &mut self.observers {
            observer.notify(&notification);
        }
    }
}
