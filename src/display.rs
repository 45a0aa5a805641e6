//! Plain-text rendering of session notifications.

use tracing::info;

use crate::session::{Notification, Observer};

pub const EMPTY_BASKET_TEXT: &str = "Your basket is empty.";

/// Renders what a display shows after `notification`: the message, if any,
/// followed by the basket summary or a placeholder when the basket is empty.
pub fn render(notification: &Notification<'_>) -> String {
    let basket = &notification.state.basket;
    let body = if basket.is_empty() {
        EMPTY_BASKET_TEXT.to_string()
    } else {
        basket.render_summary()
    };
    match notification.message {
        Some(message) => format!("{}\n{}", message, body),
        None => body,
    }
}

/// Observer that writes every rendered notification to the log.
pub fn log_display() -> Observer {
    Observer::new(|notification| {
        info!(target: "display", "\n{}", render(notification));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Basket, ProductRecord};
    use crate::session::SessionState;
    use rust_decimal::Decimal;

    #[test]
    fn test_render_empty_basket_with_message() {
        let state = SessionState::new(Basket::new(), "Enter Product Number");
        let notification = Notification { state: &state, message: Some("Enter Product Number") };
        assert_eq!(render(&notification), "Enter Product Number\nYour basket is empty.");
    }

    #[test]
    fn test_render_basket_without_message() {
        let mut basket = Basket::new();
        basket
            .add(ProductRecord::new("0002", "DAB Radio", Decimal::new(2999, 2), 0), 1)
            .unwrap();
        let state = SessionState::new(basket, "Enter Product Number");
        let notification = Notification { state: &state, message: None };
        assert_eq!(
            render(&notification),
            "DAB Radio - £29.99 x 1 = £29.99\n\nTotal Price: £29.99"
        );
    }
}
