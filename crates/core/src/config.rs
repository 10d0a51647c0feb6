//! Gateway connection settings abstraction.
//!
//! The client never talks to a settings store directly; it is handed a
//! [`ConfigProvider`] at construction and reads it fresh on every call, so
//! settings edits take effect without rebuilding the client.

/// Source of the gateway base URL and shared passphrase.
pub trait ConfigProvider: Send + Sync {
    /// Base URL of the gateway, `None` when not configured yet.
    ///
    /// An empty string is treated the same as `None` by consumers.
    fn base_url(&self) -> Option<String>;

    /// Shared passphrase sent with every operation command.
    fn passphrase(&self) -> String;
}

/// Fixed-value provider, suitable for CLIs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    pub base_url: Option<String>,
    pub passphrase: String,
}

impl StaticConfig {
    /// Creates a provider with the given base URL and passphrase.
    pub fn new(base_url: impl Into<String>, passphrase: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            passphrase: passphrase.into(),
        }
    }

    /// Provider with no base URL, matching a device whose settings screen
    /// was never filled in.
    pub fn unconfigured() -> Self {
        Self::default()
    }
}

impl ConfigProvider for StaticConfig {
    fn base_url(&self) -> Option<String> {
        self.base_url.clone()
    }

    fn passphrase(&self) -> String {
        self.passphrase.clone()
    }
}
