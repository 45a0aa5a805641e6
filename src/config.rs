//! Runtime settings for the shop.

use crate::domain::DEFAULT_CURRENCY;
use crate::error::ConfigError;

pub const DEFAULT_PROMPT: &str = "Enter Product Number";

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    /// Prefix for every amount in a rendered basket.
    pub currency_symbol: String,
    /// Status shown after a session is cleared.
    pub prompt: String,
    /// Mailbox size for the stock and session services.
    pub channel_buffer: usize,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            channel_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl ShopConfig {
    /// Reads `SHOP_CURRENCY`, `SHOP_PROMPT`, `SHOP_CHANNEL_BUFFER` and `SHOP_LOG`,
    /// keeping the default for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ShopConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(currency) = lookup("SHOP_CURRENCY") {
            config.currency_symbol = currency;
        }
        if let Some(prompt) = lookup("SHOP_PROMPT") {
            config.prompt = prompt;
        }
        if let Some(raw) = lookup("SHOP_CHANNEL_BUFFER") {
            config.channel_buffer = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "SHOP_CHANNEL_BUFFER",
                        value: raw,
                    })
                }
            };
        }
        if let Some(filter) = lookup("SHOP_LOG") {
            config.log_filter = filter;
        }
        Ok(config)
    }
}
