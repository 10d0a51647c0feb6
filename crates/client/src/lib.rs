//! homelink_client - typed client and CLI for the homelink appliance gateway.

pub mod callback;
pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use callback::{CallbackClient, CompletionQueue};
pub use client::ApiClient;
pub use error::{ApiError, Result};
