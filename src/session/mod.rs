//! Per-customer session: use cases, state and the notification contract.

mod customer;
mod notification;
mod service;
mod state;

pub use customer::CustomerSession;
pub use notification::{Notification, Observer};
pub use service::{ServiceResponse, SessionRequest, SessionService};
pub use state::{SessionPhase, SessionState};
