mod mock_data;
mod types;
mod wire;

pub use mock_data::{sample_appliances, sample_operations};
pub use types::{Appliance, Operation};
pub use wire::{ErrorEnvelope, ErrorMessage, PostOperationBody};
