use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use super::{CustomerSession, Observer, SessionState};
use crate::clients::SessionClient;
use crate::domain::{OrderConfirmation, ProductRecord};
use crate::error::SessionError;
use crate::stock_actor::StockSource;

pub type ServiceResponse<T> = oneshot::Sender<Result<T, SessionError>>;

/// Typed messages for a [`SessionService`]. Each variant carries a oneshot
/// channel for the reply.
#[derive(Debug)]
pub enum SessionRequest {
    Check {
        product_num: String,
        respond_to: ServiceResponse<String>,
    },
    Clear {
        respond_to: ServiceResponse<()>,
    },
    AddToBasket {
        product_num: String,
        quantity: u32,
        respond_to: ServiceResponse<()>,
    },
    RemoveFromBasket {
        product_num: String,
        respond_to: ServiceResponse<()>,
    },
    FinalizeOrder {
        respond_to: ServiceResponse<OrderConfirmation>,
    },
    AvailableProducts {
        respond_to: ServiceResponse<Vec<ProductRecord>>,
    },
    Snapshot {
        respond_to: ServiceResponse<SessionState>,
    },
    Subscribe {
        observer: Observer,
        respond_to: ServiceResponse<()>,
    },
    RequestUpdate {
        respond_to: ServiceResponse<()>,
    },
    Shutdown,
}

/// Owns one [`CustomerSession`] and applies requests strictly one at a time.
pub struct SessionService<S: StockSource> {
    receiver: mpsc::Receiver<SessionRequest>,
    session: CustomerSession<S>,
}

impl<S: StockSource> SessionService<S> {
    pub fn new(buffer_size: usize, session: CustomerSession<S>) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, session };
        (service, SessionClient::new(sender))
    }

    #[instrument(name = "session_service", skip(self))]
    pub async fn run(mut self) {
        info!("SessionService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Check { product_num, respond_to } => {
                    let _ = respond_to.send(self.session.check(&product_num).await);
                }
                SessionRequest::Clear { respond_to } => {
                    self.session.clear();
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::AddToBasket {
                    product_num,
                    quantity,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.session.add_to_basket(&product_num, quantity).await);
                }
                SessionRequest::RemoveFromBasket { product_num, respond_to } => {
                    self.session.remove_from_basket(&product_num);
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::FinalizeOrder { respond_to } => {
                    let _ = respond_to.send(self.session.finalize_order());
                }
                SessionRequest::AvailableProducts { respond_to } => {
                    let _ = respond_to.send(Ok(self.session.available_products().await));
                }
                SessionRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.session.state().clone()));
                }
                SessionRequest::Subscribe { observer, respond_to } => {
                    debug!("Observer subscribed");
                    self.session.subscribe(observer);
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::RequestUpdate { respond_to } => {
                    self.session.request_update();
                    let _ = respond_to.send(Ok(()));
                }
                SessionRequest::Shutdown => {
                    info!("SessionService shutting down");
                    break;
                }
            }
        }

        info!("SessionService stopped");
    }
}
