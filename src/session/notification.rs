use std::fmt;

use super::SessionState;

/// Signal emitted after every state-affecting session operation.
///
/// Observers read whatever they need from `state`; `message` carries the
/// status text when the operation produced one.
#[derive(Debug, Clone, Copy)]
pub struct Notification<'a> {
    pub state: &'a SessionState,
    pub message: Option<&'a str>,
}

/// A registered notification handler.
pub struct Observer(Box<dyn FnMut(&Notification<'_>) + Send + Sync>);

impl Observer {
    pub fn new(handler: impl FnMut(&Notification<'_>) + Send + Sync + 'static) -> Self {
        Self(Box::new(handler))
    }

    pub(crate) fn notify(&mut self, notification: &Notification<'_>) {
        (self.0)(notification)
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observer")
    }
}
