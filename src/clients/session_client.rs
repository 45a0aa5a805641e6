use tokio::sync::mpsc;
use tracing::{debug, instrument};

use super::macros::client_method;
use crate::domain::{OrderConfirmation, ProductRecord};
use crate::error::SessionError;
use crate::session::{Observer, SessionRequest, SessionState};

/// Handle to a running [`SessionService`](crate::session::SessionService).
///
/// Cloning the handle does not open a new session: every clone drives the same basket.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        debug!("Sending shutdown request");
        self.sender
            .send(SessionRequest::Shutdown)
            .await
            .map_err(|e| SessionError::ActorCommunication(e.to_string()))
    }
}

client_method!(SessionClient => fn check(product_num: String) -> String as SessionRequest::Check, Error = SessionError);
client_method!(SessionClient => fn clear() -> () as SessionRequest::Clear, Error = SessionError);
client_method!(SessionClient => fn add_to_basket(product_num: String, quantity: u32) -> () as SessionRequest::AddToBasket, Error = SessionError);
client_method!(SessionClient => fn remove_from_basket(product_num: String) -> () as SessionRequest::RemoveFromBasket, Error = SessionError);
client_method!(SessionClient => fn finalize_order() -> OrderConfirmation as SessionRequest::FinalizeOrder, Error = SessionError);
client_method!(SessionClient => fn available_products() -> Vec<ProductRecord> as SessionRequest::AvailableProducts, Error = SessionError);
client_method!(SessionClient => fn snapshot() -> SessionState as SessionRequest::Snapshot, Error = SessionError);
client_method!(SessionClient => fn subscribe(observer: Observer) -> () as SessionRequest::Subscribe, Error = SessionError);
client_method!(SessionClient => fn request_update() -> () as SessionRequest::RequestUpdate, Error = SessionError);
